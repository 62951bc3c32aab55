//! Page sections
//!
//! Each section owns its loader, so one failing endpoint only affects its
//! own region of the page.

mod amenities;
mod banks;
mod blogs;
mod faq;
mod footer;
mod gallery;
mod header;
mod layouts;
mod location;
mod prices;
mod property;
mod rera;
mod video;

pub use amenities::AmenitiesSection;
pub use banks::BanksSection;
pub use blogs::{BlogCard, BlogsSection};
pub use faq::FaqSection;
pub use footer::Footer;
pub use gallery::GallerySection;
pub use header::Header;
pub use layouts::{FloorPlansSection, MasterLayoutSection, UnitLayoutsSection};
pub use location::{LocationAdvantagesSection, LocationMapSection};
pub use prices::PropertyPricesSection;
pub use property::{PropertyDescription, PropertyInfo, PropertySpecifications};
pub use rera::ReraSection;
pub use video::VideoTour;

use leptos::prelude::*;

use crate::core::TrustedHtml;
use crate::core::qr::{QR_SIZE, qr_svg};

/// Element ids the navigation scrolls to
pub mod anchors {
    pub const HERO: &str = "hero";
    pub const ABOUT: &str = "featured";
    pub const PROPERTY_INFO: &str = "property-info";
    pub const BUILDER: &str = "about-the-builder";
    pub const FLOOR_PLANS: &str = "floor-plans";
    pub const PRICES: &str = "prices";
    pub const LOCATION: &str = "location";
    pub const AMENITIES: &str = "amenities";
    pub const UNIT_LAYOUTS: &str = "unit-layouts";
    pub const MASTER_LAYOUT: &str = "master-layout";
    pub const GALLERY: &str = "gallery";
    pub const RERA: &str = "rera";
    pub const VIDEO: &str = "video-tour";
    pub const BLOGS: &str = "blogs";
    pub const FAQ: &str = "faq";
    pub const CONTACT: &str = "contact";
    pub const BANKS: &str = "banks";
}

/// Section title with an optional subtitle
#[component]
pub fn SectionHeading(
    heading: String,
    #[prop(optional)] subheading: Option<String>,
) -> impl IntoView {
    view! {
        <div class="section-heading">
            <h2 class="title-xl">{heading}</h2>
            {subheading
                .filter(|s| !s.trim().is_empty())
                .map(|s| view! { <p class="subtitle">{s}</p> })}
        </div>
    }
}

/// Sanitized rich text from the content API
#[component]
pub fn RichText(
    html: TrustedHtml,
    #[prop(default = "rich-text")] class: &'static str,
) -> impl IntoView {
    view! { <div class=class inner_html=html.into_inner()></div> }
}

/// Scannable QR code for a registration link
#[component]
pub fn RegistrationQr(url: String) -> impl IntoView {
    match qr_svg(&url, QR_SIZE) {
        Ok(svg) => view! {
            <div class="qr-code" role="img" aria-label=format!("QR code for {url}") inner_html=svg></div>
        }
        .into_any(),
        Err(e) => {
            tracing::warn!("cannot encode {url} as a QR code: {e}");
            ().into_any()
        }
    }
}
