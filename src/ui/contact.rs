//! Lead capture: the shared contact form, the popup dialog and the
//! on-page contact section.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::core::{
    ContactField, ContactSnapshot, ContactWorkflow, HeaderSection, SubmitState, ValidationRules,
    WorkflowSettings,
};
use crate::ui::browser::router_navigator;
use crate::ui::common::{
    BaseModal, ErrorMessage, FormField, InlineSpinner, SuccessMessage, TextAreaField,
};
use crate::ui::context::use_site_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::section::{section_view, use_section};
use crate::ui::sections::anchors;

const REDIRECT_NOTICE: &str = "Thank you for your message! Redirecting you to our thank you page...";

/// Contact form driven by a [`ContactWorkflow`]; the workflow is disposed
/// when the form unmounts, which also cancels a pending redirect.
#[component]
pub fn ContactForm(
    /// Validation rules for this form
    rules: ValidationRules,
    /// Placeholder-only inputs, for the dialog
    #[prop(default = false)]
    compact: bool,
) -> impl IntoView {
    let ctx = use_site_context();
    let workflow = ContactWorkflow::new(
        ctx.client.clone(),
        WorkflowSettings::from_config(&ctx.config, rules),
        ctx.scheduler.clone(),
        router_navigator(),
    );

    let snapshot = RwSignal::new(ContactSnapshot::default());
    workflow.observe(move |next| snapshot.set(next.clone()));
    {
        let workflow = workflow.clone();
        on_cleanup(move || workflow.dispose());
    }

    let value = move |field: ContactField| {
        Signal::derive(move || snapshot.with(|s| s.data.get(field).to_string()))
    };
    let error = move |field: ContactField| {
        Signal::derive(move || snapshot.with(|s| s.errors.get(field).map(str::to_string)))
    };
    let on_input = |field: ContactField| {
        let workflow = workflow.clone();
        Callback::new(move |text: String| workflow.update_field(field, text))
    };

    let submitting = Signal::derive(move || snapshot.with(|s| s.state.is_submitting()));
    let failure = Signal::derive(move || {
        snapshot.with(|s| match &s.state {
            SubmitState::Failed(message) => Some(message.clone()),
            _ => None,
        })
    });
    let success = Signal::derive(move || {
        snapshot.with(|s| (s.state == SubmitState::Succeeded).then(|| REDIRECT_NOTICE.to_string()))
    });

    let on_submit = {
        let workflow = workflow.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            #[cfg(not(feature = "ssr"))]
            {
                let workflow = workflow.clone();
                leptos::task::spawn_local(async move {
                    workflow.submit().await;
                });
            }
            #[cfg(feature = "ssr")]
            {
                let _ = &workflow;
            }
        }
    };

    let label = move |text: &'static str| if compact { "" } else { text };
    let email_placeholder = if rules.email_required { "Email Address*" } else { "Email Address" };

    view! {
        <form class="contact-form space-y-4" on:submit=on_submit novalidate=true>
            <SuccessMessage message=success />
            <ErrorMessage error=failure />

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <FormField
                    label=label("First Name")
                    name="first_name"
                    required=!compact
                    placeholder="First Name*"
                    icon=icons::USER
                    value=value(ContactField::FirstName)
                    on_input=on_input(ContactField::FirstName)
                    disabled=submitting
                    error=error(ContactField::FirstName)
                />
                <FormField
                    label=label("Last Name")
                    name="last_name"
                    required=!compact
                    placeholder="Last Name*"
                    icon=icons::USER
                    value=value(ContactField::LastName)
                    on_input=on_input(ContactField::LastName)
                    disabled=submitting
                    error=error(ContactField::LastName)
                />
            </div>
            <FormField
                label=label("Email Address")
                name="email_id"
                required=rules.email_required && !compact
                input_type="email"
                placeholder=email_placeholder
                icon=icons::MAIL
                value=value(ContactField::Email)
                on_input=on_input(ContactField::Email)
                disabled=submitting
                error=error(ContactField::Email)
            />
            <FormField
                label=label("Phone Number")
                name="phone_number"
                required=!compact
                input_type="tel"
                placeholder="Phone Number*"
                icon=icons::PHONE
                value=value(ContactField::Phone)
                on_input=on_input(ContactField::Phone)
                disabled=submitting
                error=error(ContactField::Phone)
            />
            <TextAreaField
                label=label("Message")
                name="message"
                placeholder="Tell us about your requirements..."
                rows=if compact { 3 } else { 5 }
                value=value(ContactField::Message)
                on_input=on_input(ContactField::Message)
                disabled=submitting
                error=error(ContactField::Message)
            />

            <button type="submit" class="btn-base btn-primary w-full" disabled=move || submitting.get()>
                {move || if submitting.get() {
                    view! { <InlineSpinner /> <span>"Sending..."</span> }.into_any()
                } else {
                    view! { <Icon name=icons::SEND class="w-4 h-4"/> <span>"Send Message"</span> }.into_any()
                }}
            </button>
        </form>
    }
}

/// Popup contact form branded with the header data.
///
/// The header is loaded each time the dialog opens; the form mounts only
/// once it has arrived.
#[component]
pub fn ContactDialog() -> impl IntoView {
    let ctx = use_site_context();
    let is_open = ctx.contact_open;
    let on_close = Callback::new(move |_: ()| ctx.close_contact());

    view! {
        <BaseModal is_open=is_open on_close=on_close label="Contact us">
            <ContactDialogBody />
        </BaseModal>
    }
}

#[component]
fn ContactDialogBody() -> impl IntoView {
    let header = use_section::<HeaderSection>();

    section_view(header, |data: HeaderSection| view! {
        <div class="dialog-header">
            {(!data.logo.is_empty()).then(|| view! {
                <img src=data.logo.clone() alt=data.property_name.clone() class="h-12 max-w-[120px] mb-3" />
            })}
            <h2 class="title-lg">{data.hero_banner_heading.clone()}</h2>
            <h3 class="title-md text-accent mt-2">"Contact Us"</h3>
        </div>
        <div class="p-6">
            <ContactForm rules=ValidationRules::default() compact=true />
        </div>
    })
}

/// On-page contact section; email is required here unless configured otherwise
#[component]
pub fn ContactUsSection() -> impl IntoView {
    let ctx = use_site_context();
    let rules = ValidationRules {
        email_required: ctx.config.email_required,
    };
    let call_link = ctx.config.call_link();
    let phone = ctx.config.contact_phone.clone();

    view! {
        <section id=anchors::CONTACT class="section">
            <div class="max-w-6xl mx-auto">
                <h2 class="title-xl mb-8">"Get In Touch"</h2>
                <div class="flex flex-col md:flex-row gap-8">
                    <div class="md:w-1/2 space-y-6">
                        <p>"We'd love to hear from you. Fill out the form and we'll get back to you as soon as possible."</p>
                        <div class="card-dark p-6">
                            <h3 class="title-md mb-4">"Contact Information"</h3>
                            <div class="flex items-center gap-3">
                                <Icon name=icons::PHONE class="w-5 h-5"/>
                                <div>
                                    <p>"Phone"</p>
                                    <a href=call_link class="link">{phone}</a>
                                </div>
                            </div>
                        </div>
                    </div>
                    <div class="md:w-1/2 card p-6">
                        <ContactForm rules=rules />
                    </div>
                </div>
            </div>
        </section>
    }
}
