//! Submit lifecycle: validate, enter loading, dispatch once, settle.
//!
//! ARCHITECTURE
//! ============
//! `submit` is generic over where state lives ([`ContactStore`]) and how the
//! request leaves ([`FormTransport`]). The component passes its
//! `RwSignal<ContactState>` and a `BrowserTransport`; tests pass doubles.
//!
//! The settle write goes through `try_update_state`. A store that has been
//! torn down (component unmounted mid-request) yields `None` and the outcome
//! is dropped instead of written.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use leptos::prelude::*;

use super::contact::{ContactFields, ContactState};
use crate::net::form_endpoint::{DispatchOutcome, FormField, FormSubmission, FormTransport};

/// Holder of a component's [`ContactState`] that may outlive the component.
pub trait ContactStore {
    /// Run `f` against the state, or return `None` if it no longer exists.
    fn try_update_state<R>(&self, f: impl FnOnce(&mut ContactState) -> R) -> Option<R>;
}

impl ContactStore for RwSignal<ContactState> {
    fn try_update_state<R>(&self, f: impl FnOnce(&mut ContactState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Why a submit did not produce a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Required fields are blank; nothing was sent.
    MissingFields(Vec<FormField>),
    /// A dispatch is already in flight or the form was already submitted.
    Busy,
    /// The state was disposed before the attempt started.
    Unmounted,
}

/// Run one submit attempt.
///
/// Sends at most one request. Returns the dispatch outcome whether or not
/// the store was still alive to receive it.
///
/// # Errors
///
/// Returns a [`SubmitRejection`] when no request was sent.
pub async fn submit<S, T>(store: &S, transport: &T, fields: &ContactFields) -> Result<DispatchOutcome, SubmitRejection>
where
    S: ContactStore,
    T: FormTransport,
{
    let missing = fields.missing_required();
    if !missing.is_empty() {
        return Err(SubmitRejection::MissingFields(missing));
    }

    match store.try_update_state(ContactState::begin_submit) {
        Some(true) => {}
        Some(false) => return Err(SubmitRejection::Busy),
        None => return Err(SubmitRejection::Unmounted),
    }

    let outcome = transport.dispatch(&FormSubmission::from_fields(fields)).await;

    if store.try_update_state(|state| state.settle(&outcome)).is_none() {
        #[cfg(feature = "hydrate")]
        log::debug!("contact form unmounted before settle; dropping {outcome:?}");
    }
    Ok(outcome)
}
