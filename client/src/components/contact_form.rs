//! Contact form with submit lifecycle and post-submit acknowledgment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads/writes the section's `RwSignal<ContactState>` from context. Renders
//! the input form while editing and a static acknowledgment once submitted;
//! the acknowledgment is terminal for this instance.

use leptos::prelude::*;

use crate::net::form_endpoint::FormField;
use crate::state::contact::{ContactFields, ContactState};

pub const ACK_TITLE: &str = "Message sent";
pub const ACK_BODY: &str = "Thanks for reaching out! I'll get back to you soon.";

/// Contact form area of the contact section.
#[component]
pub fn ContactForm() -> impl IntoView {
    let state = expect_context::<RwSignal<ContactState>>();

    let is_submitted = move || state.with(|s| s.view().is_submitted());

    view! {
        <div class="contact-card contact-form-card">
            <Show when=is_submitted fallback=move || view! { <ContactFormInputs state=state/> }>
                <div class="contact-ack">
                    <h3>{ACK_TITLE}</h3>
                    <p>{ACK_BODY}</p>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ContactFormInputs(state: RwSignal<ContactState>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let fields = ContactFields { name: name.get(), email: email.get(), message: message.get() };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let transport = crate::net::form_endpoint::BrowserTransport::default();
            match crate::state::submission::submit(&state, &transport, &fields).await {
                Ok(outcome) => log::debug!("contact submit settled: {outcome:?}"),
                Err(rejection) => log::debug!("contact submit rejected: {rejection:?}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = fields;
    };

    let view_state = move || state.with(ContactState::view);
    let error = move || view_state().error_notice().map(str::to_owned);

    view! {
        <form class="contact-form" on:submit=on_submit>
            <Show when=move || error().is_some()>
                <p class="contact-error" role="alert">{move || error().unwrap_or_default()}</p>
            </Show>
            <label class="contact-label">
                {FormField::Name.label()}
                <input
                    class="contact-input"
                    type="text"
                    name=FormField::Name.entry_id()
                    required=true
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="contact-label">
                {FormField::Email.label()}
                <input
                    class="contact-input"
                    type="email"
                    name=FormField::Email.entry_id()
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="contact-label">
                {FormField::Message.label()}
                <textarea
                    class="contact-input contact-input--message"
                    name=FormField::Message.entry_id()
                    rows="5"
                    required=true
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button
                class="contact-submit"
                type="submit"
                disabled=move || view_state().is_pending()
            >
                {move || view_state().submit_label()}
            </button>
        </form>
    }
}
