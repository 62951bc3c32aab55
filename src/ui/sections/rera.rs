//! Regulatory registration details per project phase.

use std::collections::BTreeSet;

use leptos::prelude::*;

use super::{RegistrationQr, anchors};
use crate::core::ReraSection as Rera;
use crate::ui::icon::{Icon, icons};
use crate::ui::section::{section_view, use_section};

/// Phases shown before "Show More" is pressed.
const COLLAPSED_COUNT: usize = 2;

fn phase_title(phase_name: &str, index: usize) -> String {
    match phase_name.trim() {
        "" => format!("Phase {}", index + 1),
        name => name.to_string(),
    }
}

#[component]
pub fn ReraSection() -> impl IntoView {
    let rera = use_section::<Rera>();
    let expanded = RwSignal::new(BTreeSet::<usize>::new());
    let show_all = RwSignal::new(false);

    let toggle = move |index: usize| {
        expanded.update(|open| {
            if !open.remove(&index) {
                open.insert(index);
            }
        });
    };

    view! {
        <section id=anchors::RERA class="section">
            {section_view(rera, move |data: Rera| {
                if data.rera.is_empty() {
                    return ().into_any();
                }

                let heading = data.heading();
                let subheading = data.subheading();
                let total = data.rera.len();
                let records = data.rera;

                view! {
                    <div class="card p-6">
                        <h2 class="title-xl text-center">{heading}</h2>
                        <p class="subtitle text-center mb-6">{subheading}</p>
                        <div class="space-y-4">
                            {move || {
                                let visible = if show_all.get() { total } else { COLLAPSED_COUNT };
                                records.iter().take(visible).enumerate().map(|(index, record)| {
                                    let record = record.clone();
                                    let title = phase_title(&record.phase_name, index);
                                    let is_open = move || expanded.with(|open| open.contains(&index));
                                    view! {
                                        <div class="rera-item">
                                            <button class="rera-item-header" on:click=move |_| toggle(index)>
                                                <h3>{title}</h3>
                                                <span class:rotate-180=is_open>
                                                    <Icon name=icons::CHEVRON_DOWN/>
                                                </span>
                                            </button>
                                            <Show when=is_open>
                                                <dl class="rera-details">
                                                    <dt>"Phase Name"</dt><dd>{record.phase_name.clone()}</dd>
                                                    <dt>"RERA ID"</dt><dd>{record.registration_id()}</dd>
                                                    <dt>"Total Area"</dt>
                                                    <dd>{format!("{} sq.ft ({} acres)", record.total_area, record.total_acre)}</dd>
                                                    <dt>"Total Towers"</dt><dd>{record.total_tower.clone()}</dd>
                                                    <dt>"Completion Date"</dt><dd>{record.completion_date.clone()}</dd>
                                                    <dt>"Total Units"</dt><dd>{record.total_units.clone()}</dd>
                                                </dl>
                                                <div class="flex justify-center mt-4">
                                                    <RegistrationQr url=record.portal_url() />
                                                </div>
                                                <a
                                                    href=record.portal_url()
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="link flex items-center justify-center gap-1 mt-4"
                                                >
                                                    "Verify on the RERA portal"
                                                    <Icon name=icons::EXTERNAL_LINK class="w-4 h-4"/>
                                                </a>
                                            </Show>
                                        </div>
                                    }
                                }).collect_view()
                            }}
                            {(total > COLLAPSED_COUNT).then(|| view! {
                                <div class="text-center mt-4">
                                    <button class="btn-base btn-outline" on:click=move |_| show_all.update(|all| *all = !*all)>
                                        {move || if show_all.get() { "Show Less" } else { "Show More" }}
                                    </button>
                                </div>
                            })}
                        </div>
                    </div>
                }
                .into_any()
            })}
        </section>
    }
}
