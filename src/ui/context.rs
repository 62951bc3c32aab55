//! Site-wide context: configuration, API client and browser services.

use std::sync::Arc;

use leptos::prelude::*;

use crate::core::{ContentClient, DefaultTransport, Scheduler, SiteConfig, Viewport};
use crate::ui::browser::{BrowserScheduler, platform_viewport};

/// Shared services for every section on the page
#[derive(Clone)]
pub struct SiteContext {
    pub config: Arc<SiteConfig>,
    pub client: Arc<ContentClient<DefaultTransport>>,
    pub scheduler: Arc<dyn Scheduler>,
    pub viewport: Arc<dyn Viewport>,
    /// Whether the contact dialog is showing
    pub contact_open: RwSignal<bool>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        let client = ContentClient::from_config(&config, DefaultTransport::default());
        Self {
            config: Arc::new(config),
            client: Arc::new(client),
            scheduler: Arc::new(BrowserScheduler),
            viewport: platform_viewport(),
            contact_open: RwSignal::new(false),
        }
    }

    pub fn open_contact(&self) {
        self.contact_open.set(true);
    }

    pub fn close_contact(&self) {
        self.contact_open.set(false);
    }

    /// Scroll to a section by its element id.
    pub fn scroll_to(&self, id: &str) {
        self.viewport.scroll_to(id);
    }
}

/// Provide the site context to the component tree
pub fn provide_site_context(config: SiteConfig) -> SiteContext {
    if let Err(e) = config.validate() {
        tracing::warn!("site config is incomplete: {e}");
    }

    let ctx = SiteContext::new(config);
    provide_context(ctx.clone());
    ctx
}

/// Get the site context from the component tree
pub fn use_site_context() -> SiteContext {
    expect_context::<SiteContext>()
}
