//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::contact::ContactState;
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = expect_context::<RwSignal<ContactState>>();

    view! {
        <button
            class="btn contact-theme-toggle"
            type="button"
            on:click=move |_| state.update(|s| dark_mode::apply(s.toggle_theme()))
            title="Toggle dark mode"
        >
            {move || if state.with(|s| s.is_dark) { "☀" } else { "☾" }}
        </button>
    }
}
