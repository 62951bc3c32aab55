//! Landing page for the property.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::{Lifecycle, schedule_popup};
use crate::ui::contact::{ContactDialog, ContactUsSection};
use crate::ui::context::use_site_context;
use crate::ui::floating_buttons::FloatingButtons;
use crate::ui::sections::{
    AmenitiesSection, BanksSection, BlogsSection, FaqSection, FloorPlansSection, Footer,
    GallerySection, Header, LocationAdvantagesSection, LocationMapSection, MasterLayoutSection,
    PropertyDescription, PropertyInfo, PropertyPricesSection, PropertySpecifications, ReraSection,
    UnitLayoutsSection, VideoTour,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_site_context();

    // Contact popup: once after the delay, then on every interval
    if ctx.config.popup_enabled {
        let lifecycle = Lifecycle::new();
        let open = ctx.contact_open;
        schedule_popup(
            ctx.scheduler.as_ref(),
            &lifecycle,
            ctx.config.popup_delay(),
            ctx.config.popup_interval(),
            Arc::new(move || open.set(true)),
        );
        on_cleanup(move || lifecycle.dispose());
    }

    view! {
        <Title text="Home" />
        <ContactDialog />

        <Header />
        <main>
            <PropertyDescription />
            <FloorPlansSection />
            <PropertyPricesSection />
            <LocationAdvantagesSection />
            <AmenitiesSection />
            <LocationMapSection />
            <UnitLayoutsSection />
            <PropertyInfo />
            <MasterLayoutSection />
            <GallerySection />
            <ReraSection />
            <VideoTour />
            <PropertySpecifications />
            <BlogsSection />
            <FaqSection />
            <ContactUsSection />
            <BanksSection />
        </main>
        <Footer />
        <FloatingButtons />
    }
}
