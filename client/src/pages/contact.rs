//! Contact section page: info cards, contact form, and theme toggle.
//!
//! ARCHITECTURE
//! ============
//! Owns the single `RwSignal<ContactState>` for this instance and provides it
//! to child components. Disposing the page disposes the signal, which is what
//! lets an in-flight submit detect that it has nowhere to write.

use leptos::prelude::*;

use crate::components::{contact_cards::ContactCards, contact_form::ContactForm, theme_toggle::ThemeToggle};
use crate::state::contact::ContactState;
use crate::state::profile::ContactProfile;
use crate::util::dark_mode;

pub const SECTION_TITLE: &str = "Contact";

#[component]
pub fn ContactPage() -> impl IntoView {
    let state = RwSignal::new(ContactState::default());
    provide_context(state);

    // One-shot ambient theme read on mount; effects only run in the browser.
    Effect::new(move |_| {
        let is_dark = dark_mode::read_system_preference();
        dark_mode::apply(is_dark);
        state.update(|s| s.is_dark = is_dark);
    });

    view! {
        <div class="contact-container">
            <section class="section contact-section">
                <div class="content-wrapper">
                    <div class="contact-header">
                        <h2 class="section-title">{SECTION_TITLE}</h2>
                        <ThemeToggle/>
                    </div>
                    <div class="contact-grid">
                        <ContactCards profile=ContactProfile::default()/>
                        <ContactForm/>
                    </div>
                </div>
            </section>
        </div>
    }
}
