use leptos::prelude::*;

use super::{SectionHeading, anchors};
use crate::core::AmenitiesSection as Amenities;
use crate::ui::section::{section_view, use_section};

#[component]
pub fn AmenitiesSection() -> impl IntoView {
    let amenities = use_section::<Amenities>();

    view! {
        <section id=anchors::AMENITIES class="section section-light">
            <SectionHeading heading="Our Amenities".to_string() />
            {section_view(amenities, |data: Amenities| view! {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {data.items().iter().map(|amenity| view! {
                        <div class="amenity-card">
                            <img
                                src=amenity.property_amenities_photo.clone()
                                alt=amenity.amenity_name.clone()
                                class="w-20 h-20 object-cover rounded-md"
                            />
                            <h3 class="title-md">{amenity.amenity_name.clone()}</h3>
                        </div>
                    }).collect_view()}
                </div>
            })}
        </section>
    }
}
