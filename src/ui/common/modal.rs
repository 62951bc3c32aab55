use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Overlay dialog that closes on Escape, on the close button and on a
/// backdrop click
#[component]
pub fn BaseModal(
    /// Whether modal is open
    #[prop(into)]
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: ChildrenFn,
    /// Maximum width class
    #[prop(default = "max-w-lg")]
    max_width: &'static str,
    /// Accessible label for the dialog
    #[prop(default = "Dialog")]
    label: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    view! {
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center p-4 modal-backdrop"
                role="dialog"
                aria-modal="true"
                aria-label=label
                on:click=move |e| {
                    #[cfg(not(feature = "ssr"))]
                    {
                        if let Some(element) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                            if element.class_list().contains("modal-backdrop") {
                                on_close.run(());
                            }
                        }
                    }
                    #[cfg(feature = "ssr")]
                    {
                        let _ = e;
                    }
                }
            >
                <div class=format!("relative w-full {} card", max_width)>
                    <button
                        class="btn-icon absolute top-3 right-3"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close dialog"
                    >
                        <Icon name=icons::X class="icon-standalone"/>
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
