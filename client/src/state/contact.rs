//! Contact form lifecycle state (submitted / loading / error / theme).
//!
//! DESIGN
//! ======
//! Plain data with small transition methods so the submit lifecycle can be
//! driven and asserted without a browser. Components hold it in a single
//! `RwSignal<ContactState>`.
//!
//! Invariants: `loading` and `submitted` are never both true, and `error` is
//! only non-empty while `submitted` is false.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::form_endpoint::{DispatchOutcome, FormField};

/// User-facing notice shown after a transport failure.
pub const SUBMIT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMIT_PENDING_LABEL: &str = "Sending...";

/// Current values of the form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Required fields that are empty, in form order.
    ///
    /// Same rule as the inputs' `required` attribute: any character,
    /// whitespace included, satisfies it. No format checks are applied.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .collect()
    }
}

/// What the form area renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactView {
    /// Input form, optionally with a pending submit or an inline error.
    Editing { loading: bool, error: Option<String> },
    /// Terminal acknowledgment; the form is no longer reachable.
    Submitted,
}

impl ContactView {
    pub fn is_submitted(&self) -> bool {
        matches!(self, ContactView::Submitted)
    }

    /// Inline notice to show above the form, if any.
    pub fn error_notice(&self) -> Option<&str> {
        match self {
            ContactView::Editing { error, .. } => error.as_deref(),
            ContactView::Submitted => None,
        }
    }

    /// Whether the submit control is disabled.
    pub fn is_pending(&self) -> bool {
        matches!(self, ContactView::Editing { loading: true, .. })
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_pending() { SUBMIT_PENDING_LABEL } else { SUBMIT_LABEL }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub submitted: bool,
    pub loading: bool,
    pub error: String,
    pub is_dark: bool,
}

impl ContactState {
    pub fn with_theme(is_dark: bool) -> Self {
        Self { is_dark, ..Self::default() }
    }

    /// Enter the pending state. Returns `false` (and changes nothing) when a
    /// dispatch is already in flight or the form was already submitted.
    pub fn begin_submit(&mut self) -> bool {
        if self.loading || self.submitted {
            return false;
        }
        self.loading = true;
        self.error.clear();
        true
    }

    /// Apply a settled dispatch.
    pub fn settle(&mut self, outcome: &DispatchOutcome) {
        match outcome {
            DispatchOutcome::Dispatched => {
                self.submitted = true;
                self.error.clear();
            }
            DispatchOutcome::TransportError(_) => {
                self.error = SUBMIT_ERROR_MESSAGE.to_owned();
            }
        }
        self.loading = false;
    }

    /// Flip the theme and return the new value.
    pub fn toggle_theme(&mut self) -> bool {
        self.is_dark = !self.is_dark;
        self.is_dark
    }

    pub fn view(&self) -> ContactView {
        if self.submitted {
            ContactView::Submitted
        } else {
            ContactView::Editing {
                loading: self.loading,
                error: (!self.error.is_empty()).then(|| self.error.clone()),
            }
        }
    }
}
