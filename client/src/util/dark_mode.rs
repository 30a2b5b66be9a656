//! Theme detection and application.
//!
//! Reads the host's `prefers-color-scheme` once and applies a `data-theme`
//! attribute to the `<html>` element. Nothing is persisted and later OS
//! theme changes are not observed. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! SSR paths no-op and report a light theme so server rendering stays
//! deterministic; the real preference is applied once hydrated.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Return the attribute value written to `<html data-theme>`.
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Read the system color-scheme preference.
///
/// Returns `true` if the host prefers dark mode.
pub fn read_system_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window
            .match_media(DARK_QUERY)
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme_name(enabled));
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
