//! Lead capture: form data, validation and the submission workflow.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};
use std::time::Duration;

use regex::Regex;
use serde::Serialize;

use super::client::ContentClient;
use super::config::SiteConfig;
use super::lifecycle::Lifecycle;
use super::schedule::{Navigator, Scheduler};
use super::transport::Transport;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Message,
    ];

    /// Key of the field in the submitted JSON
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email_id",
            Self::Phone => "phone_number",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The five fields posted to `/contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormData {
    pub first_name: String,
    pub last_name: String,
    pub email_id: String,
    pub phone_number: String,
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email_id,
            ContactField::Phone => &self.phone_number,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email_id,
            ContactField::Phone => &mut self.phone_number,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Per-field messages from the last validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidationErrors(BTreeMap<ContactField, String>);

impl FormValidationErrors {
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.keys().copied()
    }

    pub fn clear_field(&mut self, field: ContactField) {
        self.0.remove(&field);
    }

    fn insert(&mut self, field: ContactField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub email_required: bool,
}

impl Default for ValidationRules {
    /// Name and phone are required; email is checked only when given.
    fn default() -> Self {
        Self {
            email_required: false,
        }
    }
}

/// Check `data` against `rules`. An empty result means the form may be sent.
pub fn validate_form(data: &ContactFormData, rules: ValidationRules) -> FormValidationErrors {
    let mut errors = FormValidationErrors::default();

    if data.first_name.trim().is_empty() {
        errors.insert(ContactField::FirstName, "First name is required");
    }
    if data.last_name.trim().is_empty() {
        errors.insert(ContactField::LastName, "Last name is required");
    }

    let email = data.email_id.trim();
    if email.is_empty() {
        if rules.email_required {
            errors.insert(ContactField::Email, "Email address is required");
        }
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.insert(ContactField::Email, "Please enter a valid email address");
    }

    let phone: String = data
        .phone_number
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if phone.is_empty() {
        errors.insert(ContactField::Phone, "Phone number is required");
    } else if !PHONE_PATTERN.is_match(&phone) {
        errors.insert(ContactField::Phone, "Please enter a valid 10-digit phone number");
    }

    errors
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    NotSubmitted,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Everything the form renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSnapshot {
    pub data: ContactFormData,
    pub errors: FormValidationErrors,
    pub state: SubmitState,
}

/// Where to go after a lead is accepted, and how the form validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSettings {
    pub rules: ValidationRules,
    pub redirect_to: String,
    pub redirect_delay: Duration,
}

impl WorkflowSettings {
    pub fn from_config(config: &SiteConfig, rules: ValidationRules) -> Self {
        Self {
            rules,
            redirect_to: config.thank_you_path.clone(),
            redirect_delay: config.redirect_delay(),
        }
    }
}

pub type SnapshotObserver = Arc<dyn Fn(&ContactSnapshot) + Send + Sync>;

struct WorkflowInner<T> {
    client: Arc<ContentClient<T>>,
    settings: WorkflowSettings,
    scheduler: Arc<dyn Scheduler>,
    navigator: Arc<dyn Navigator>,
    lifecycle: Lifecycle,
    snapshot: Mutex<ContactSnapshot>,
    observer: Mutex<Option<SnapshotObserver>>,
}

/// Validate, submit once, then redirect once.
///
/// Owned by a mounted form; [`dispose`](Self::dispose) cancels a pending
/// redirect and drops late responses.
pub struct ContactWorkflow<T> {
    inner: Arc<WorkflowInner<T>>,
}

impl<T> Clone for ContactWorkflow<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Transport> ContactWorkflow<T> {
    pub fn new(
        client: Arc<ContentClient<T>>,
        settings: WorkflowSettings,
        scheduler: Arc<dyn Scheduler>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            inner: Arc::new(WorkflowInner {
                client,
                settings,
                scheduler,
                navigator,
                lifecycle: Lifecycle::new(),
                snapshot: Mutex::new(ContactSnapshot::default()),
                observer: Mutex::new(None),
            }),
        }
    }

    /// Call `observer` with the new snapshot after every change.
    pub fn observe(&self, observer: impl Fn(&ContactSnapshot) + Send + Sync + 'static) {
        *self
            .inner
            .observer
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(observer));
    }

    pub fn snapshot(&self) -> ContactSnapshot {
        self.lock().clone()
    }

    pub fn state(&self) -> SubmitState {
        self.lock().state.clone()
    }

    pub fn data(&self) -> ContactFormData {
        self.lock().data.clone()
    }

    pub fn errors(&self) -> FormValidationErrors {
        self.lock().errors.clone()
    }

    pub fn client(&self) -> &Arc<ContentClient<T>> {
        &self.inner.client
    }

    pub fn settings(&self) -> &WorkflowSettings {
        &self.inner.settings
    }

    /// Store a field edit and clear that field's error.
    pub fn update_field(&self, field: ContactField, value: impl Into<String>) {
        if !self.inner.lifecycle.is_live() {
            return;
        }
        self.change(|snapshot| {
            snapshot.data.set(field, value);
            snapshot.errors.clear_field(field);
        });
    }

    /// Run one submission attempt and return the resulting state.
    ///
    /// Ignored while a submission is in flight. Validation failures never
    /// reach the network.
    pub async fn submit(&self) -> SubmitState {
        if !self.inner.lifecycle.is_live() {
            return self.state();
        }

        let lead = {
            let mut snapshot = self.lock();
            if snapshot.state.is_submitting() {
                tracing::debug!("submit ignored, a submission is in flight");
                return SubmitState::Submitting;
            }
            let errors = validate_form(&snapshot.data, self.inner.settings.rules);
            if errors.is_empty() {
                snapshot.errors = errors;
                snapshot.state = SubmitState::Submitting;
                Some(snapshot.data.clone())
            } else {
                tracing::debug!("lead rejected by validation: {} field(s)", errors.len());
                snapshot.errors = errors;
                snapshot.state = SubmitState::NotSubmitted;
                None
            }
        };
        self.notify();

        let Some(lead) = lead else {
            return SubmitState::NotSubmitted;
        };

        let result = self.inner.client.submit_lead(&lead).await;
        if !self.inner.lifecycle.is_live() {
            tracing::debug!("form unmounted before the submission finished");
            return self.state();
        }

        match result {
            Ok(()) => {
                self.change(|snapshot| {
                    snapshot.data.clear();
                    snapshot.state = SubmitState::Succeeded;
                });
                self.schedule_redirect();
                SubmitState::Succeeded
            }
            Err(err) => {
                tracing::warn!("lead submission failed: {err:?}");
                let state = SubmitState::Failed(err.user_message());
                let applied = state.clone();
                self.change(move |snapshot| snapshot.state = applied);
                state
            }
        }
    }

    /// Stop the workflow; a pending redirect will not run.
    pub fn dispose(&self) {
        self.inner.lifecycle.dispose();
    }

    fn schedule_redirect(&self) {
        let settings = &self.inner.settings;
        let navigator = self.inner.navigator.clone();
        let lifecycle = self.inner.lifecycle.clone();
        let path = settings.redirect_to.clone();
        let handle = self.inner.scheduler.schedule_once(
            settings.redirect_delay,
            Box::new(move || {
                if lifecycle.is_live() {
                    navigator.navigate(&path);
                }
            }),
        );
        self.inner.lifecycle.adopt(handle);
    }

    fn change(&self, edit: impl FnOnce(&mut ContactSnapshot)) {
        edit(&mut self.lock());
        self.notify();
    }

    fn notify(&self) {
        let observer = self
            .inner
            .observer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(observer) = observer {
            let snapshot = self.snapshot();
            observer(&snapshot);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ContactSnapshot> {
        self.inner
            .snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
