use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Validation error under a field
#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|err| view! {
            <div class="flex items-center text-sm text-red-500 mt-1">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{err}</span>
            </div>
        })
    }
}

/// Text input with a leading icon, a label and an inline validation error
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Input name, also used as its id
    name: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Leading icon
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, optional)]
    disabled: Signal<bool>,
    /// Validation error to display
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label" for=name>
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <div class="relative">
                {icon.map(|name| view! {
                    <span class="input-icon"><Icon name=name class="w-4 h-4"/></span>
                })}
                <input
                    id=name
                    name=name
                    type=input_type
                    class="input-base"
                    class:pl-9=icon.is_some()
                    class:border-red-500=move || error.get().is_some()
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    disabled=move || disabled.get()
                />
            </div>
            <FieldError error=error />
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    /// Field label text
    label: &'static str,
    /// Field name, also used as its id
    name: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 3)]
    rows: u32,
    /// Whether field is disabled
    #[prop(into, optional)]
    disabled: Signal<bool>,
    /// Validation error to display
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label" for=name>{label}</label>
            <textarea
                id=name
                name=name
                class="input-base resize-none"
                class:border-red-500=move || error.get().is_some()
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldError error=error />
        </div>
    }
}
