//! Generic fetch lifecycle shared by every content section.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use super::client::ContentClient;
use super::lifecycle::{Lifecycle, Ticket};
use super::request::SectionRequest;
use super::sections::Section;
use super::transport::Transport;

/// Where a section's data currently stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    /// Idle and Loading both render the placeholder.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

pub type StateObserver<S> = Arc<dyn Fn(&LoadState<S>) + Send + Sync>;

/// Loads one [`Section`] and tracks its [`LoadState`].
///
/// Each [`load`](Self::load) supersedes the previous one: only the newest
/// request may write state, and nothing is written after [`dispose`](Self::dispose).
pub struct SectionLoader<S, T> {
    client: Arc<ContentClient<T>>,
    request: SectionRequest,
    state: Arc<Mutex<LoadState<S>>>,
    lifecycle: Lifecycle,
    observer: Option<StateObserver<S>>,
}

impl<S, T> Clone for SectionLoader<S, T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            request: self.request.clone(),
            state: self.state.clone(),
            lifecycle: self.lifecycle.clone(),
            observer: self.observer.clone(),
        }
    }
}

impl<S, T> fmt::Debug for SectionLoader<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionLoader")
            .field("request", &self.request)
            .field("lifecycle", &self.lifecycle)
            .finish()
    }
}

impl<S: Section, T: Transport> SectionLoader<S, T> {
    pub fn new(client: Arc<ContentClient<T>>, request: SectionRequest) -> Self {
        Self {
            client,
            request,
            state: Arc::new(Mutex::new(LoadState::Idle)),
            lifecycle: Lifecycle::new(),
            observer: None,
        }
    }

    /// Loader for the section's own endpoint.
    pub fn for_section(client: Arc<ContentClient<T>>) -> Self {
        let request = client.section_request::<S>();
        Self::new(client, request)
    }

    /// Call `observer` after every state change this loader applies.
    pub fn with_observer(mut self, observer: impl Fn(&LoadState<S>) + Send + Sync + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    pub fn request(&self) -> &SectionRequest {
        &self.request
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn state(&self) -> LoadState<S> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Fetch the section once. No retries; failures end in `Failed`.
    ///
    /// Returns the loader's state when this call finishes, which is another
    /// call's state if this one was superseded.
    pub async fn load(&self) -> LoadState<S> {
        let ticket = self.lifecycle.begin();
        if !self.apply(ticket, LoadState::Loading) {
            return self.state();
        }
        tracing::debug!("loading {}", self.request.endpoint);

        let next = match self.client.fetch::<S>(&self.request).await {
            Ok(data) => LoadState::Loaded(data),
            Err(err) => {
                tracing::warn!("{} failed: {}", self.request.endpoint, err);
                LoadState::Failed(err.to_string())
            }
        };

        if !self.apply(ticket, next) {
            tracing::debug!("discarding superseded response for {}", self.request.endpoint);
        }
        self.state()
    }

    /// Stop accepting results; called when the owning component unmounts.
    pub fn dispose(&self) {
        self.lifecycle.dispose();
    }

    fn apply(&self, ticket: Ticket, next: LoadState<S>) -> bool {
        let snapshot = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if !self.lifecycle.is_current(ticket) {
                return false;
            }
            *state = next;
            self.observer.as_ref().map(|_| state.clone())
        };
        if let (Some(observer), Some(snapshot)) = (&self.observer, snapshot) {
            observer(&snapshot);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_state_accessors() {
        let idle: LoadState<u8> = LoadState::default();
        assert!(idle.is_pending());
        assert!(LoadState::<u8>::Loading.is_pending());

        let loaded = LoadState::Loaded(7u8);
        assert_eq!(loaded.data(), Some(&7));
        assert!(!loaded.is_pending());

        let failed: LoadState<u8> = LoadState::Failed("Failed to fetch FAQ data".into());
        assert_eq!(failed.error(), Some("Failed to fetch FAQ data"));
        assert_eq!(failed.data(), None);
    }
}
