//! Estatefront - marketing site for a single real-estate property
//!
//! Every section of the page is loaded from a headless content API and
//! leads are posted back to it through the contact form. Rendered on the
//! server with Leptos and hydrated in the browser via WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
