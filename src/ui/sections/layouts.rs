//! Floor plans, unit layouts and the master plan.

use leptos::prelude::*;

use super::{SectionHeading, anchors};
use crate::core::{FloorPlansSection as FloorPlans, MasterLayoutSection as MasterLayout, UnitLayoutsSection as UnitLayouts};
use crate::ui::context::use_site_context;
use crate::ui::section::{section_view, use_section};

#[component]
pub fn FloorPlansSection() -> impl IntoView {
    let ctx = use_site_context();
    let plans = use_section::<FloorPlans>();
    let enquire = Callback::new(move |_: ()| ctx.scroll_to(anchors::CONTACT));

    view! {
        <section id=anchors::FLOOR_PLANS class="section section-light">
            {section_view(plans, move |data: FloorPlans| view! {
                <SectionHeading heading=data.heading() />
                <div class="space-y-12">
                    {data.floor_plans.iter().map(|plan| view! {
                        <div class="layout-card">
                            <img
                                src=plan.layout_image.clone()
                                alt=plan.layout_name.clone()
                                class="layout-card-image blur-preview"
                            />
                            <div class="layout-card-body">
                                <h3 class="title-md">{plan.layout_name.clone()}</h3>
                                <button class="btn-base btn-primary mt-4" on:click=move |_| enquire.run(())>
                                    "Enquire Now"
                                </button>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            })}
        </section>
    }
}

#[component]
pub fn UnitLayoutsSection() -> impl IntoView {
    let ctx = use_site_context();
    let units = use_section::<UnitLayouts>();
    let enquire = Callback::new(move |_: ()| ctx.scroll_to(anchors::CONTACT));

    view! {
        <section id=anchors::UNIT_LAYOUTS class="section">
            {section_view(units, move |data: UnitLayouts| {
                let heading = data.heading();
                if data.unit_layout.is_empty() {
                    return view! {
                        <SectionHeading heading=heading />
                        <div class="card p-10 text-center">
                            "No unit layouts available at the moment. Please check back later."
                        </div>
                    }
                    .into_any();
                }

                view! {
                    <SectionHeading heading=heading />
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-10">
                        {data.unit_layout.iter().map(|unit| view! {
                            <div class="unit-card">
                                <img
                                    src=unit.image_url()
                                    alt=unit.layout_name.clone()
                                    class="unit-card-image blur-preview"
                                />
                                <h3 class="title-md mt-4">{unit.layout_name.clone()}</h3>
                                <p class="text-sm text-center mb-4">{unit.unit_layout_heading.clone()}</p>
                                <span class="pill">{format!("Carpet Area: {} sq.ft", unit.carpet_area())}</span>
                                <button class="btn-base btn-secondary mt-4" on:click=move |_| enquire.run(())>
                                    "Inquire About This Unit"
                                </button>
                            </div>
                        }).collect_view()}
                    </div>
                }
                .into_any()
            })}
        </section>
    }
}

#[component]
pub fn MasterLayoutSection() -> impl IntoView {
    let master = use_section::<MasterLayout>();

    view! {
        <section id=anchors::MASTER_LAYOUT class="section section-light">
            {section_view(master, |data: MasterLayout| view! {
                <SectionHeading heading=data.heading() />
                {data.layout().cloned().map(|layout| view! {
                    <figure class="flex flex-col items-center">
                        <figcaption class="title-md mb-2">{layout.layout_name.clone()}</figcaption>
                        <img
                            src=layout.layout_image.clone()
                            alt=layout.layout_name
                            class="w-full max-w-3xl rounded-lg shadow-lg"
                        />
                    </figure>
                })}
            })}
        </section>
    }
}
