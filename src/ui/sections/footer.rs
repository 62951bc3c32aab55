use chrono::Datelike;
use leptos::prelude::*;

use super::{RegistrationQr, RichText};
use crate::core::{FooterSection, LoadState, ReraRecord, ReraSection, TrustedHtml};
use crate::ui::section::{section_view, use_section};

#[component]
pub fn Footer() -> impl IntoView {
    let footer = use_section::<FooterSection>();
    let rera = use_section::<ReraSection>();

    // First registration once `/rera` loads; an empty record falls back to the portal.
    let project = Memo::new(move |_| {
        rera.state.with(|state| match state {
            LoadState::Loaded(data) => data.rera.first().cloned().unwrap_or_default(),
            _ => ReraRecord::default(),
        })
    });
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            {section_view(footer, move |data: FooterSection| {
                let settings = data.g_setting;
                view! {
                    <div class="flex flex-col items-center space-y-4 max-w-6xl mx-auto">
                        <p class="text-sm break-words">
                            <span>{format!("Agent RERA: {}", settings.footer_agent_rera)}</span>
                            <span class="hidden sm:inline">" | "</span>
                            <span>
                                {move || format!("Project RERA: {}", project.get().registration_id())}
                            </span>
                            " "
                            {move || {
                                let url = project.get().portal_url();
                                view! {
                                    <a href=url.clone() target="_blank" rel="noopener noreferrer" class="footer-link">
                                        {format!("({url})")}
                                    </a>
                                }
                            }}
                        </p>
                        {move || view! { <RegistrationQr url=project.get().portal_url() /> }}
                        <hr class="w-full md:w-3/4" />
                        <RichText
                            html=TrustedHtml::sanitize(&settings.footer_disclaimer)
                            class="text-sm max-w-3xl mx-auto"
                        />
                        <a href="/privacy-policy" class="footer-link text-sm">"Privacy Policy"</a>
                        <div class="text-sm text-muted">{format!("© {year} All Rights Reserved.")}</div>
                    </div>
                }
            })}
        </footer>
    }
}
