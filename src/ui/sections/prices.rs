use leptos::prelude::*;

use super::{SectionHeading, anchors};
use crate::core::PropertyPricesSection as Prices;
use crate::ui::context::use_site_context;
use crate::ui::section::{section_view, use_section};

/// Price cards per tower and configuration
#[component]
pub fn PropertyPricesSection() -> impl IntoView {
    let ctx = use_site_context();
    let prices = use_section::<Prices>();
    let enquire = Callback::new(move |_: ()| ctx.scroll_to(anchors::CONTACT));

    view! {
        <section id=anchors::PRICES class="section">
            {section_view(prices, move |data: Prices| view! {
                <span class="eyebrow">"Premium Selection"</span>
                <SectionHeading
                    heading=data.heading()
                    subheading="Discover our exclusive selection of properties with premium amenities and strategic locations.".to_string()
                />
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8">
                    {data.property_prices.iter().map(|price| view! {
                        <div class="price-card">
                            <h3 class="title-md">{price.property_type.clone()}</h3>
                            <p class="price-card-tower">{format!("Tower: {}", price.property_tower)}</p>
                            <p>{format!("Carpet Area: {} {}", price.property_carpet_sqft, price.carpet_unit_sqft)}</p>
                            <p>{format!("Configuration: {}", price.configuration())}</p>
                            <button class="btn-base btn-primary mt-6" on:click=move |_| enquire.run(())>
                                "Request More Detail"
                            </button>
                        </div>
                    }).collect_view()}
                </div>
            })}
        </section>
    }
}
