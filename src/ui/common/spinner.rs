use leptos::prelude::*;

/// Where a spinner sits, which also decides how big it is
#[derive(Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// Inside a button, next to its label
    Inline,
    /// Centred in a section that is still loading
    Section,
}

impl Placement {
    fn classes(self) -> (&'static str, &'static str) {
        match self {
            Placement::Inline => ("spinner-container spinner-inline", "spinner spinner-sm"),
            Placement::Section => ("spinner-container spinner-centered", "spinner spinner-lg"),
        }
    }
}

#[component]
fn Spinner(placement: Placement) -> impl IntoView {
    let (container, circle) = placement.classes();

    view! {
        <div class=container>
            <div class=circle role="status" aria-live="polite">
                <div class="spinner-circle-inner"></div>
                <span class="sr-only">"Loading..."</span>
            </div>
        </div>
    }
}

/// Section placeholder while content is on its way
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! { <Spinner placement=Placement::Section /> }
}

/// Small spinner for buttons with a request in flight
#[component]
pub fn InlineSpinner() -> impl IntoView {
    view! { <Spinner placement=Placement::Inline /> }
}
