//! Platform-neutral site logic: content fetching, lead capture and scheduling

pub mod client;
pub mod config;
pub mod contact;
pub mod error;
pub mod html;
pub mod lifecycle;
pub mod loader;
pub mod qr;
pub mod request;
pub mod schedule;
pub mod sections;
pub mod transport;
pub mod viewport;
#[cfg(all(test, feature = "ssr"))]
mod tests;

pub use client::ContentClient;
pub use config::SiteConfig;
pub use contact::{
    ContactField, ContactFormData, ContactSnapshot, ContactWorkflow, FormValidationErrors,
    SubmitState, ValidationRules, WorkflowSettings, validate_form,
};
pub use error::{FetchError, SubmitError};
pub use html::TrustedHtml;
pub use lifecycle::{Lifecycle, TaskHandle};
pub use loader::{LoadState, SectionLoader};
pub use request::SectionRequest;
pub use schedule::{Navigator, Scheduler, schedule_popup};
pub use sections::*;
pub use transport::{DefaultTransport, RawResponse, Transport};
pub use viewport::Viewport;
