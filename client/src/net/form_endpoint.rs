//! Outbound contact form submission to the external form-collection service.
//!
//! Client-side (hydrate): a blind `POST` via `gloo-net` in `no-cors` mode.
//! Server-side (SSR): a stub that reports a transport error, since submission
//! is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The collection service does not allow cross-origin response reads, so the
//! request is sent opaque. A 4xx/5xx from the service is indistinguishable
//! from success; only transport failures surface, as
//! [`DispatchOutcome::TransportError`].

#[cfg(test)]
#[path = "form_endpoint_test.rs"]
mod form_endpoint_test;

use crate::state::contact::ContactFields;

/// Google Forms response endpoint that collects contact submissions.
pub const FORM_ENDPOINT: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLSfCCpgHY_NDm-pDQWDRyb_jKIvvYZgJdW2aEadjKkl5YHi59Q/formResponse";

/// Logical fields of the contact form, in submission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// Opaque field identifier the collection service expects.
    pub fn entry_id(self) -> &'static str {
        match self {
            FormField::Name => "entry.710042333",
            FormField::Email => "entry.1045781291",
            FormField::Message => "entry.1166974658",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }
}

/// Field values keyed by their opaque identifiers, ready to encode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSubmission {
    pairs: Vec<(&'static str, String)>,
}

impl FormSubmission {
    pub fn from_fields(fields: &ContactFields) -> Self {
        let pairs = FormField::ALL
            .iter()
            .map(|field| (field.entry_id(), fields.value(*field).to_owned()))
            .collect();
        Self { pairs }
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Render the body as `application/x-www-form-urlencoded`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the pairs cannot be serialized.
    pub fn encode_body(&self) -> Result<String, String> {
        serde_urlencoded::to_string(&self.pairs).map_err(|e| e.to_string())
    }
}

/// Result of a blind dispatch. There is deliberately no response variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The request left the browser without a transport error.
    Dispatched,
    /// The request could not be sent; carries the underlying detail for logs.
    TransportError(String),
}

impl DispatchOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, DispatchOutcome::Dispatched)
    }
}

/// Sends a contact submission somewhere and reports whether it left.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn dispatch(&self, submission: &FormSubmission) -> DispatchOutcome;
}

/// Transport that posts to [`FORM_ENDPOINT`] from the browser.
#[derive(Clone, Copy, Debug)]
pub struct BrowserTransport {
    endpoint: &'static str,
}

impl Default for BrowserTransport {
    fn default() -> Self {
        Self { endpoint: FORM_ENDPOINT }
    }
}

impl BrowserTransport {
    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn transport_failed_message(detail: &str) -> String {
    format!("contact form dispatch failed: {detail}")
}

impl FormTransport for BrowserTransport {
    async fn dispatch(&self, submission: &FormSubmission) -> DispatchOutcome {
        #[cfg(feature = "hydrate")]
        {
            let body = match submission.encode_body() {
                Ok(body) => body,
                Err(e) => {
                    log::warn!("{}", transport_failed_message(&e));
                    return DispatchOutcome::TransportError(e);
                }
            };
            let request = gloo_net::http::Request::post(self.endpoint)
                .mode(web_sys::RequestMode::NoCors)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(body);
            let request = match request {
                Ok(request) => request,
                Err(e) => {
                    log::warn!("{}", transport_failed_message(&e.to_string()));
                    return DispatchOutcome::TransportError(e.to_string());
                }
            };
            match request.send().await {
                Ok(_) => {
                    log::info!("contact form dispatched to {}", self.endpoint);
                    DispatchOutcome::Dispatched
                }
                Err(e) => {
                    log::warn!("{}", transport_failed_message(&e.to_string()));
                    DispatchOutcome::TransportError(e.to_string())
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submission;
            DispatchOutcome::TransportError("not available on server".to_owned())
        }
    }
}
