//! Application pages
//!
//! - Home: every property section in order
//! - Blog post detail
//! - Thank-you page after a lead is accepted
//! - Not found

mod blog_detail;
mod home;
mod not_found;
mod thank_you;

pub use blog_detail::BlogDetailPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use thank_you::ThankYouPage;
