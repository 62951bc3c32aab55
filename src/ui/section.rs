//! Reactive binding between a [`SectionLoader`] and the component that shows it.

use leptos::prelude::*;

use crate::core::{DefaultTransport, LoadState, Section, SectionLoader, SectionRequest};
use crate::ui::common::{ErrorMessageStatic, LoadingSpinner};
use crate::ui::context::use_site_context;

/// Load state of one section plus a way to fetch it again.
pub struct SectionHandle<S: Section> {
    pub state: RwSignal<LoadState<S>>,
    pub reload: Callback<()>,
}

impl<S: Section> Clone for SectionHandle<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Section> Copy for SectionHandle<S> {}

/// Load the section from its own endpoint once the component mounts.
pub fn use_section<S: Section>() -> SectionHandle<S> {
    let request = use_site_context().client.section_request::<S>();
    use_section_request(request)
}

/// Load `request` once the component mounts and stop listening when it unmounts.
pub fn use_section_request<S: Section>(request: SectionRequest) -> SectionHandle<S> {
    let ctx = use_site_context();
    let state = RwSignal::new(LoadState::Idle);

    let loader = SectionLoader::<S, DefaultTransport>::new(ctx.client, request)
        .with_observer(move |next| state.set(next.clone()));

    let reload = {
        let loader = loader.clone();
        Callback::new(move |_| {
            #[cfg(not(feature = "ssr"))]
            {
                let loader = loader.clone();
                leptos::task::spawn_local(async move {
                    loader.load().await;
                });
            }
            #[cfg(feature = "ssr")]
            {
                let _ = &loader;
            }
        })
    };

    // Server renders the placeholder; the browser fetches after hydration
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| reload.run(()));

    on_cleanup(move || loader.dispose());

    SectionHandle { state, reload }
}

/// Spinner while pending, an error with a retry button on failure, and
/// `render` once the data arrives.
pub fn section_view<S, V, F>(handle: SectionHandle<S>, render: F) -> impl IntoView
where
    S: Section,
    V: IntoView + 'static,
    F: Fn(S) -> V + Send + Sync + 'static,
{
    let SectionHandle { state, reload } = handle;

    move || match state.get() {
        LoadState::Idle | LoadState::Loading => view! { <LoadingSpinner /> }.into_any(),
        LoadState::Failed(message) => view! {
            <div class="section-error">
                <ErrorMessageStatic message=message />
                <button class="btn-base btn-secondary" on:click=move |_| reload.run(())>
                    "Try again"
                </button>
            </div>
        }
        .into_any(),
        LoadState::Loaded(data) => render(data).into_any(),
    }
}

/// Like [`section_view`] but renders nothing until the data is loaded.
pub fn quiet_section_view<S, V, F>(handle: SectionHandle<S>, render: F) -> impl IntoView
where
    S: Section,
    V: IntoView + 'static,
    F: Fn(S) -> V + Send + Sync + 'static,
{
    move || match handle.state.get() {
        LoadState::Loaded(data) => Some(render(data)),
        _ => None,
    }
}
