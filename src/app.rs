use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::SiteConfig;
use crate::core::config::DEFAULT_THANK_YOU_PATH;
use crate::ui::{BlogDetailPage, HomePage, NotFoundPage, ThankYouPage, provide_site_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let ctx = provide_site_context(SiteConfig::from_env());
    if ctx.config.thank_you_path != DEFAULT_THANK_YOU_PATH {
        tracing::warn!(
            "thank-you path {} is not routed, only {DEFAULT_THANK_YOU_PATH} is",
            ctx.config.thank_you_path
        );
    }

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/estatefront.css"/>

        <Title formatter=|text: String| format!("{text} | Property")/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/blogs/:id") view=BlogDetailPage/>
                <Route path=path!("/thank-you") view=ThankYouPage/>
            </Routes>
        </Router>
    }
}
