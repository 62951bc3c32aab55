use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::core::viewport::show_back_to_top;
use crate::ui::context::use_site_context;
use crate::ui::icon::{Icon, icons};

/// Fixed quick actions: WhatsApp, call, contact dialog and back to top
#[component]
pub fn FloatingButtons() -> impl IntoView {
    let ctx = use_site_context();
    let scroll_y = RwSignal::new(0.0_f64);

    #[cfg(not(feature = "ssr"))]
    {
        let viewport = ctx.viewport.clone();
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            scroll_y.set(viewport.scroll_y());
        });
        on_cleanup(move || handle.remove());
    }

    let whatsapp = ctx.config.whatsapp_link();
    let call = ctx.config.call_link();
    let open_contact = {
        let ctx = ctx.clone();
        move |_: MouseEvent| ctx.open_contact()
    };
    let to_top = move |_: MouseEvent| ctx.viewport.scroll_to_top();

    view! {
        <div class="floating-buttons">
            <a
                href=whatsapp
                target="_blank"
                rel="noopener noreferrer"
                class="floating-button floating-whatsapp"
                aria-label="Chat on WhatsApp"
            >
                <Icon name=icons::WHATSAPP class="w-6 h-6"/>
            </a>
            <a href=call class="floating-button floating-call" aria-label="Call us">
                <Icon name=icons::PHONE class="w-6 h-6"/>
            </a>
            <button class="floating-button floating-contact" aria-label="Contact us" on:click=open_contact>
                <Icon name=icons::MESSAGE class="w-6 h-6"/>
            </button>
            <Show when=move || show_back_to_top(scroll_y.get())>
                <button class="floating-button floating-top" aria-label="Back to top" on:click=to_top.clone()>
                    <Icon name=icons::ARROW_UP class="w-6 h-6"/>
                </button>
            </Show>
        </div>
    }
}
