use leptos::prelude::*;

use super::{SectionHeading, anchors};
use crate::core::BanksSection as Banks;
use crate::ui::section::{section_view, use_section};

/// Home loan partners
#[component]
pub fn BanksSection() -> impl IntoView {
    let banks = use_section::<Banks>();

    view! {
        <section id=anchors::BANKS class="section section-light">
            {section_view(banks, |data: Banks| view! {
                <SectionHeading heading=data.heading() />
                <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
                    {data.bank.banks.iter().map(|bank| view! {
                        <a
                            href=bank.bank_slug.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="bank-card"
                        >
                            <img
                                src=bank.property_bank_photo.clone()
                                alt=bank.bank_name.clone()
                                class="w-full h-32 object-contain mb-4"
                            />
                            <h3 class="title-md text-center">{bank.bank_name.clone()}</h3>
                        </a>
                    }).collect_view()}
                </div>
            })}
        </section>
    }
}
