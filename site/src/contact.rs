//! Contact-request capture and submission.
//!
//! [`ContactFormHandler`] owns the three form fields. `submit` snapshots them
//! into a [`ContactSubmission`], validates it, and hands it to a
//! [`SubmissionTransport`] under a timeout. While a submission is in flight
//! the submit control is disabled and further submits are refused, so one
//! click produces at most one transport attempt.
//!
//! No delivery backend is bundled. [`DiscardTransport`] logs and drops the
//! request; [`MailtoTransport`] turns it into a prefilled `mailto:` draft.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{SubmissionError, TransportError};

/// Default bound on a single transport call.
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

/// A contact form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Visitor's name, required
    Name,
    /// Reply address, required
    Email,
    /// Free-text cargo description, optional
    CargoDetails,
}

impl FormField {
    /// Fields in form order.
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::CargoDetails];

    /// Wire name used for the `name` attribute and in form bodies.
    pub fn wire_name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::CargoDetails => "cargoDetails",
        }
    }

    /// Field with the given wire name.
    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.wire_name() == name)
    }
}

/// Field-level validation failure shown next to the offending input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// Field the message belongs to
    pub field: FormField,
    /// Text shown under the field
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.wire_name(), self.message)
    }
}

/// Values captured from the contact form at the moment of submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Visitor's name
    pub name: String,
    /// Reply address
    pub email: String,
    /// Cargo description
    #[serde(rename = "cargoDetails")]
    pub cargo_details: String,
}

impl ContactSubmission {
    /// Submission with the given values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        cargo_details: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            cargo_details: cargo_details.into(),
        }
    }

    /// Parse an `application/x-www-form-urlencoded` body.
    ///
    /// Unknown keys are ignored; a repeated key keeps its last value.
    pub fn from_urlencoded(body: &str) -> Self {
        let mut submission = Self::default();
        for pair in body.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if let Some(field) = FormField::from_wire_name(&decode_form_component(key)) {
                submission.set(field, decode_form_component(value));
            }
        }
        submission
    }

    /// Current value of `field`.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::CargoDetails => &self.cargo_details,
        }
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::CargoDetails => self.cargo_details = value,
        }
    }

    /// Name and email are required; cargo details are optional.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: FormField::Name,
                message: "Please enter your name",
            });
        }
        if self.email.trim().is_empty() {
            errors.push(FieldError {
                field: FormField::Email,
                message: "Please enter an email address",
            });
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn decode_form_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// What a transport did with an accepted submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Receipt {
    /// Captured and dropped; no delivery target is configured.
    Discarded,
    /// A `mailto:` URI the user can open to send the request.
    MailtoDraft(String),
    /// Delivered by an external collaborator, with its reference.
    Delivered(String),
}

/// External collaborator that receives validated submissions.
#[allow(async_fn_in_trait)]
pub trait SubmissionTransport {
    /// Deliver one validated submission.
    async fn send(&self, submission: &ContactSubmission) -> Result<Receipt, TransportError>;
}

/// Accepts every submission and delivers it nowhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardTransport;

impl SubmissionTransport for DiscardTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<Receipt, TransportError> {
        info!(
            name = %submission.name,
            email = %submission.email,
            details_len = submission.cargo_details.len(),
            "contact request captured; no delivery target configured"
        );
        Ok(Receipt::Discarded)
    }
}

/// Builds a prefilled `mailto:` draft addressed to the operations mailbox.
#[derive(Clone, Debug)]
pub struct MailtoTransport {
    /// Recipient mailbox
    pub to: String,
}

impl MailtoTransport {
    /// Drafts addressed to `to`.
    pub fn new(to: impl Into<String>) -> Self {
        Self { to: to.into() }
    }

    /// The `mailto:` URI for `submission`, subject and body percent-encoded.
    pub fn draft_uri(&self, submission: &ContactSubmission) -> String {
        let subject = format!("Survey request from {}", submission.name.trim());
        let body = format!(
            "Name: {}\nEmail: {}\n\nCargo details:\n{}",
            submission.name.trim(),
            submission.email.trim(),
            submission.cargo_details.trim()
        );
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

impl SubmissionTransport for MailtoTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<Receipt, TransportError> {
        let uri = self.draft_uri(submission);
        debug!(to = %self.to, "prepared mailto draft");
        Ok(Receipt::MailtoDraft(uri))
    }
}

/// What the rendered form shows: prefilled values, field errors, status line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormView {
    /// Prefilled input values
    pub values: ContactSubmission,
    /// Messages shown under their fields
    pub errors: Vec<FieldError>,
    /// Render the submit control disabled
    pub submitting: bool,
    /// Line under the submit button
    pub status: Option<String>,
}

impl FormView {
    /// Form state after a submit attempt.
    pub fn after_submit(values: ContactSubmission, result: &Result<SubmitOutcome, SubmissionError>) -> Self {
        match result {
            Ok(_) => Self {
                status: Some("Thanks, your request has been captured.".into()),
                ..Self::default()
            },
            Err(SubmissionError::Invalid(errors)) => Self {
                values,
                errors: errors.clone(),
                ..Self::default()
            },
            Err(SubmissionError::InFlight) => Self {
                values,
                submitting: true,
                ..Self::default()
            },
            Err(err) => Self {
                values,
                status: Some(err.to_string()),
                ..Self::default()
            },
        }
    }

    /// Message for `field`, if it failed validation.
    pub fn error_for(&self, field: FormField) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

/// Result of a successful submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Values that were sent
    pub submission: ContactSubmission,
    /// What the transport did with them
    pub receipt: Receipt,
}

/// Owns the contact form state and drives submissions.
pub struct ContactFormHandler<T> {
    transport: T,
    timeout: Duration,
    fields: Mutex<ContactSubmission>,
    in_flight: AtomicBool,
    attempts: AtomicUsize,
}

impl<T: SubmissionTransport> ContactFormHandler<T> {
    /// Handler with the default 10 s timeout.
    pub fn new(transport: T) -> Self {
        Self::with_timeout(transport, DEFAULT_SUBMIT_TIMEOUT)
    }

    /// Handler with a custom transport timeout.
    pub fn with_timeout(transport: T, timeout: Duration) -> Self {
        Self {
            transport,
            timeout,
            fields: Mutex::new(ContactSubmission::default()),
            in_flight: AtomicBool::new(false),
            attempts: AtomicUsize::new(0),
        }
    }

    /// Capture one field's value.
    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        self.lock_fields().set(field, value.into());
    }

    /// Snapshot of the current field values.
    pub fn capture(&self) -> ContactSubmission {
        self.lock_fields().clone()
    }

    /// False while a submission is in flight.
    pub fn submit_enabled(&self) -> bool {
        !self.in_flight.load(Ordering::Acquire)
    }

    /// Transport attempts made so far.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::Acquire)
    }

    /// Validate the captured fields and hand them to the transport.
    ///
    /// Invalid input and a submission already in flight are refused without
    /// a transport attempt. Transport failures and timeouts keep the fields
    /// so the same request can be retried; success clears them.
    pub async fn submit(&self) -> Result<SubmitOutcome, SubmissionError> {
        let submission = self.capture();
        if let Err(errors) = submission.validate() {
            debug!(count = errors.len(), "contact request rejected locally");
            return Err(SubmissionError::Invalid(errors));
        }

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            debug!("duplicate submit ignored while a request is in flight");
            return Err(SubmissionError::InFlight);
        };
        self.attempts.fetch_add(1, Ordering::AcqRel);

        let receipt = match tokio::time::timeout(self.timeout, self.transport.send(&submission)).await {
            Ok(Ok(receipt)) => receipt,
            Ok(Err(err)) => {
                warn!(error = %err, "contact request delivery failed");
                return Err(SubmissionError::Transport(err));
            }
            Err(_) => {
                warn!(timeout = ?self.timeout, "contact request timed out");
                return Err(SubmissionError::TimedOut(self.timeout));
            }
        };

        *self.lock_fields() = ContactSubmission::default();
        Ok(SubmitOutcome {
            submission,
            receipt,
        })
    }

    fn lock_fields(&self) -> std::sync::MutexGuard<'_, ContactSubmission> {
        self.fields.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Holds the submit control disabled until dropped.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
