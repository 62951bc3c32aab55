//! Property write-ups from `/propert-details`.
//!
//! The three sections read the same endpoint but each keeps its own loader.

use leptos::prelude::*;

use super::{RichText, SectionHeading, anchors};
use crate::core::{PropertyDetailsSection, TrustedHtml};
use crate::ui::context::use_site_context;
use crate::ui::section::{section_view, use_section};

#[component]
pub fn PropertyDescription() -> impl IntoView {
    let ctx = use_site_context();
    let details = use_section::<PropertyDetailsSection>();

    let contact = Callback::new(move |_: ()| ctx.scroll_to(anchors::CONTACT));

    view! {
        <section id=anchors::ABOUT class="section section-light">
            <SectionHeading heading="About the Property".to_string() />
            {section_view(details, move |data: PropertyDetailsSection| view! {
                <div class="card-dark">
                    <RichText
                        html=TrustedHtml::sanitize(&data.property_details.property_description)
                        class="rich-text max-h-96 overflow-y-auto"
                    />
                </div>
                <div class="flex justify-center mt-8">
                    <button class="btn-base btn-primary btn-lg" on:click=move |_| contact.run(())>
                        "Contact Us"
                    </button>
                </div>
            })}
        </section>
    }
}

#[component]
pub fn PropertyInfo() -> impl IntoView {
    let details = use_section::<PropertyDetailsSection>();

    view! {
        <section id=anchors::PROPERTY_INFO class="section">
            {section_view(details, |data: PropertyDetailsSection| {
                let property = data.property_details;
                view! {
                    <h2 class="title-xl text-center">{property.property_name.clone()}</h2>
                    {(!property.og_image.is_empty()).then(|| view! {
                        <img
                            src=property.og_image.clone()
                            alt=property.property_name.clone()
                            class="property-cover"
                        />
                    })}
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                        <RichText
                            html=TrustedHtml::sanitize(&property.property_information)
                            class="rich-text card-dark max-h-60 overflow-y-auto"
                        />
                        <dl class="property-facts">
                            <dt>"Builder:"</dt>
                            <dd>{property.builder_name.clone()}</dd>
                            <dt>"Size Range:"</dt>
                            <dd>{property.property_price_range.clone()}</dd>
                            <dt>"Type:"</dt>
                            <dd>{property.property_type_price_range.clone()}</dd>
                        </dl>
                    </div>
                }
            })}
        </section>
    }
}

#[component]
pub fn PropertySpecifications() -> impl IntoView {
    let details = use_section::<PropertyDetailsSection>();

    view! {
        <section id=anchors::BUILDER class="section section-light">
            <SectionHeading heading="About the Builder".to_string() />
            {section_view(details, |data: PropertyDetailsSection| view! {
                <div class="card-dark">
                    <RichText html=TrustedHtml::sanitize(&data.property_details.property_specification) />
                </div>
            })}
        </section>
    }
}
