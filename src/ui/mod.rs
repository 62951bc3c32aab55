pub mod browser;
pub mod common;
pub mod contact;
pub mod context;
pub mod floating_buttons;
pub mod icon;
pub mod pages;
pub mod section;
pub mod sections;

pub use context::{SiteContext, provide_site_context, use_site_context};
pub use icon::{Icon, icons};
pub use pages::{BlogDetailPage, HomePage, NotFoundPage, ThankYouPage};
