//! # contact-client
//!
//! Leptos + WASM contact section: static contact cards, a contact form that
//! posts to an external form-collection endpoint, and a light/dark toggle.
//!
//! Built with `hydrate` for the browser bundle and `ssr` for the server
//! renderer in `contact-server`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
