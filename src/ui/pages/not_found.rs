//! Not found page component
//!
//! Displayed for any route the router does not know, including blog
//! links with a malformed path.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use crate::ui::sections::anchors;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let blogs = format!("/#{}", anchors::BLOGS);

    view! {
        <Title text="Page Not Found" />
        <div class="not-found-page">
            <div class="text-center">
                <div class="not-found-badge">
                    <Icon name=icons::ALERT_CIRCLE class="w-12 h-12" />
                </div>

                <h1 class="title-xl mb-4">"404"</h1>
                <h2 class="title-lg mb-2">"Page Not Found"</h2>
                <p class="mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/" attr:class="btn-base btn-primary">"Go Home"</A>
                    <A href=blogs attr:class="btn-base btn-outline">"Read Our Blog"</A>
                </div>
            </div>
        </div>
    }
}
