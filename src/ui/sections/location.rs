//! Embedded map and the rotating list of nearby landmarks.

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;

use super::{RichText, SectionHeading, anchors};
use crate::core::viewport::{next_index, prev_index};
use crate::core::{Lifecycle, LocationAdvantagesSection as Advantages, LocationMapSection as LocationMap, TrustedHtml};
use crate::ui::context::use_site_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::section::{section_view, use_section};

/// Time each landmark stays on screen before the carousel advances.
pub const ADVANCE_EVERY: Duration = Duration::from_secs(4);

#[component]
pub fn LocationMapSection() -> impl IntoView {
    let location = use_section::<LocationMap>();

    view! {
        <section id=anchors::LOCATION class="section section-light text-center">
            {section_view(location, |data: LocationMap| view! {
                <SectionHeading heading=data.heading() subheading=data.subheading.clone() />
                <RichText html=TrustedHtml::sanitize(&data.map) class="location-map" />
            })}
        </section>
    }
}

#[component]
pub fn LocationAdvantagesSection() -> impl IntoView {
    let ctx = use_site_context();
    let advantages = use_section::<Advantages>();
    let current = RwSignal::new(0_usize);

    let count = move || {
        advantages
            .state
            .with(|state| state.data().map_or(0, |data| data.location_advantages.len()))
    };

    let lifecycle = Lifecycle::new();
    lifecycle.adopt(ctx.scheduler.schedule_repeating(
        ADVANCE_EVERY,
        ADVANCE_EVERY,
        Arc::new(move || {
            let len = count();
            current.update(|index| *index = next_index(*index, len));
        }),
    ));
    on_cleanup(move || lifecycle.dispose());

    let show_map = Callback::new(move |_: ()| ctx.scroll_to(anchors::LOCATION));

    view! {
        <section class="section section-dark text-center">
            {section_view(advantages, move |data: Advantages| {
                let heading = data.heading();
                let items = data.location_advantages;
                let len = items.len();
                let dots = (0..len).map(|index| view! {
                    <button
                        class="carousel-dot"
                        class:carousel-dot-active=move || current.get() == index
                        aria-label=format!("Show landmark {}", index + 1)
                        on:click=move |_| current.set(index)
                    />
                }).collect_view();

                view! {
                    <SectionHeading heading=heading />
                    <div class="card carousel">
                        <div class="flex items-center justify-between mb-6">
                            <button
                                class="carousel-step"
                                aria-label="Previous landmark"
                                on:click=move |_| current.update(|i| *i = prev_index(*i, len))
                            >
                                <Icon name=icons::CHEVRON_LEFT class="w-6 h-6"/>
                            </button>
                            <button
                                class="carousel-step"
                                aria-label="Next landmark"
                                on:click=move |_| current.update(|i| *i = next_index(*i, len))
                            >
                                <Icon name=icons::CHEVRON_RIGHT class="w-6 h-6"/>
                            </button>
                        </div>
                        {move || items.get(current.get()).cloned().map(|item| view! {
                            <div class="flex flex-col items-center">
                                <div class="carousel-badge">
                                    <Icon name=icons::MAP_PIN class="w-10 h-10"/>
                                </div>
                                <h4 class="title-md">{item.location}</h4>
                                <p class="font-medium">{item.distance}</p>
                                <p class="mt-4 max-w-2xl">{item.description}</p>
                                <button class="link mt-6 flex items-center gap-1" on:click=move |_| show_map.run(())>
                                    "View on map"
                                    <Icon name=icons::EXTERNAL_LINK class="w-4 h-4"/>
                                </button>
                            </div>
                        })}
                    </div>
                    <div class="flex justify-center mt-6">{dots}</div>
                }
            })}
        </section>
    }
}
