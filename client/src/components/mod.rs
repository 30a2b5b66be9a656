//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the contact section's pieces while reading/writing the
//! section's `ContactState` from a Leptos context provider.

pub mod contact_cards;
pub mod contact_form;
pub mod theme_toggle;
