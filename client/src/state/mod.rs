//! Client-side state for the contact section.
//!
//! DESIGN
//! ======
//! `contact` is the transient lifecycle state of one form instance,
//! `submission` drives a submit attempt against it, and `profile` is the
//! static content shown beside the form.

pub mod contact;
pub mod profile;
pub mod submission;
