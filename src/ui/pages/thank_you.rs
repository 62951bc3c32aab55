//! Landing page after a successful lead submission.

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::HeaderSection;
use crate::ui::icon::{Icon, icons};
use crate::ui::section::{section_view, use_section};

#[component]
pub fn ThankYouPage() -> impl IntoView {
    let header = use_section::<HeaderSection>();
    let year = chrono::Utc::now().year();

    view! {
        <Title text="Thank You" />
        <div class="thank-you-page">
            {section_view(header, move |data: HeaderSection| view! {
                <div class="thank-you-card">
                    {(!data.logo.is_empty()).then(|| view! {
                        <img src=data.logo.clone() alt=data.property_name.clone() class="h-16 mx-auto mb-6" />
                    })}
                    <div class="thank-you-badge">
                        <Icon name=icons::CHECK class="w-10 h-10"/>
                    </div>
                    <h1 class="title-xl mb-4">"Thank You!"</h1>
                    <p class="mb-8">
                        "We have received your message. Our team will contact you shortly!"
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <A href="/#contact" attr:class="btn-base btn-outline">
                            <Icon name=icons::CHEVRON_LEFT class="w-4 h-4"/>
                            <span>"Go Back"</span>
                        </A>
                        <A href="/" attr:class="btn-base btn-primary">"Home"</A>
                    </div>
                    <p class="text-sm mt-10">
                        {format!("© {year} {}. All rights reserved.", data.property_name)}
                    </p>
                </div>
            })}
        </div>
    }
}
