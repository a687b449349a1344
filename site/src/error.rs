//! Error types for content loading and contact-request submission.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::contact::FieldError;

/// A single invariant violation found in a [`crate::types::SiteContent`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentProblem {
    /// An in-page link whose target is not a rendered section
    #[error("link `{label}` points at #{anchor}, which is not a section on this page")]
    BrokenAnchor {
        /// Link text
        label: String,
        /// Fragment the link targets
        anchor: String,
    },

    /// A nav anchor stored with its leading `#`
    #[error("nav item `{label}` must use a bare anchor (got `{anchor}`)")]
    PrefixedAnchor {
        /// Link text
        label: String,
        /// Anchor as written
        anchor: String,
    },

    /// Sorted step orders do not read 1, 2, .., n
    #[error("process step order must run 1..={count} without gaps; expected {expected}, found {found}")]
    StepOrder {
        /// Number of steps
        count: usize,
        /// First order that was missing
        expected: usize,
        /// Order found in its place
        found: u8,
    },

    /// A fixed-size sequence has the wrong number of entries
    #[error("expected {expected} {what}, found {found}")]
    Count {
        /// Sequence name
        what: &'static str,
        /// Required length
        expected: usize,
        /// Actual length
        found: usize,
    },

    /// A process step numbered outside the page's step range
    #[error("process step `{label}` has order {order}, outside 1..={max}")]
    StepOutOfRange {
        /// Step label
        label: String,
        /// Offending order
        order: u8,
        /// Highest allowed order
        max: usize,
    },

    /// An emphasised hero phrase that never occurs in the lead
    #[error("hero emphasis `{0}` does not occur in the lead")]
    MissingEmphasis(String),

    /// Blank copy where text is required
    #[error("{what} must not be empty")]
    Empty {
        /// Which piece of copy
        what: String,
    },

    /// Phone number that is not `+` and 7 to 15 digits
    #[error("contact phone `{0}` is not a dialable number")]
    InvalidPhone(String),

    /// Email that is not `local@domain.tld`
    #[error("contact email `{0}` is not a valid address")]
    InvalidEmail(String),
}

/// Errors raised while building or loading site content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Service icon kind outside the known transport modes
    #[error("unknown icon kind `{0}` (expected HeavyVehicle, Aircraft or Marine)")]
    UnknownIconKind(String),

    /// Content file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Content file is not valid TOML for the content model
    #[error("invalid TOML content in {path}: {source}")]
    Toml {
        /// File that was parsed
        path: PathBuf,
        /// Parser error
        #[source]
        source: toml::de::Error,
    },

    /// Content file is not valid JSON for the content model
    #[error("invalid JSON content in {path}: {source}")]
    Json {
        /// File that was parsed
        path: PathBuf,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// Content parsed but breaks one or more invariants
    #[error("content failed validation with {} problem(s)", .0.len())]
    Invalid(Vec<ContentProblem>),
}

/// Failure of the transport a validated submission was handed to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("delivery failed: {0}")]
pub struct TransportError(pub String);

/// Errors surfaced to the user when a contact request is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Required fields are blank; nothing was sent
    #[error("please fix {} field(s) before sending", .0.len())]
    Invalid(Vec<FieldError>),

    /// Another submission is still in flight; nothing was sent
    #[error("a request is already being sent")]
    InFlight,

    /// The transport did not answer within the timeout
    #[error("no response within {}s, please try again", .0.as_secs_f32())]
    TimedOut(Duration),

    /// The transport reported a failure
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SubmissionError {
    /// Whether the same submission can be retried as-is.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::TimedOut(_) | Self::Transport(_))
    }
}
