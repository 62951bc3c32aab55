//! Inline status banners for failed loads and form submissions.

use leptos::prelude::*;

use crate::ui::{Icon, icons};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tone {
    Error,
    Success,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Error => "error-message",
            Tone::Success => "success-message",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Error => icons::ALERT_CIRCLE,
            Tone::Success => icons::CHECK,
        }
    }

    /// Errors interrupt screen readers, confirmations wait their turn
    fn role(self) -> &'static str {
        match self {
            Tone::Error => "alert",
            Tone::Success => "status",
        }
    }
}

#[component]
fn Banner(tone: Tone, text: String) -> impl IntoView {
    view! {
        <div class=tone.class() role=tone.role()>
            <Icon name=tone.icon() class="icon-text"/>
            <span>{text}</span>
        </div>
    }
}

/// Error banner, shown while `error` holds a message
#[component]
pub fn ErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|text| view! { <Banner tone=Tone::Error text=text /> })
}

/// Confirmation banner, shown while `message` holds a message
#[component]
pub fn SuccessMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|text| view! { <Banner tone=Tone::Success text=text /> })
}

/// Error banner that is always visible
#[component]
pub fn ErrorMessageStatic(message: String) -> impl IntoView {
    view! { <Banner tone=Tone::Error text=message /> }
}
