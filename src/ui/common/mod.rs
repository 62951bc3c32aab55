//! Common reusable UI components
//!
//! Building blocks shared by the page sections, the contact forms and the
//! dialogs.

pub mod form;
pub mod message;
pub mod modal;
pub mod spinner;

pub use form::{FormField, TextAreaField};
pub use message::{ErrorMessage, ErrorMessageStatic, SuccessMessage};
pub use modal::BaseModal;
pub use spinner::{InlineSpinner, LoadingSpinner};
