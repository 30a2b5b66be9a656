//! Networking modules for outbound form submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! `form_endpoint` owns the fixed collection endpoint, its field identifiers,
//! body encoding, and the blind transport used by the contact form.

pub mod form_endpoint;
