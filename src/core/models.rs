// src/core/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// --- Finding Classification ---

// An enumeration representing the severity level of a knowledge-base entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

// --- Fetch Models ---

/// Classification key for a fetch failure, used for the diagnostic log.
/// This is the closed set of failure kinds; every transport problem maps
/// onto exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FetchErrorKind {
    Connection,
    Timeout,
    TooManyRedirects,
    Request,
    Unexpected,
}

/// A classified fetch failure.
///
/// `Display` renders the exact human-readable report line for the kind,
/// while `detail` keeps the underlying error text for the diagnostic log.
/// Failures are converted into this set at the fetch boundary and never
/// rethrown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Connection error: Could not connect to the URL.")]
    Connection { detail: String },
    #[error("Timeout error: Server took too long to respond.")]
    Timeout { detail: String },
    #[error("Error: Too many redirects.")]
    TooManyRedirects { detail: String },
    #[error("Request error: {detail}")]
    Request { detail: String },
    #[error("Unexpected error: {detail}")]
    Unexpected { detail: String },
}

impl FetchError {
    pub fn request(detail: impl Into<String>) -> Self {
        Self::Request { detail: detail.into() }
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Connection { .. } => FetchErrorKind::Connection,
            Self::Timeout { .. } => FetchErrorKind::Timeout,
            Self::TooManyRedirects { .. } => FetchErrorKind::TooManyRedirects,
            Self::Request { .. } => FetchErrorKind::Request,
            Self::Unexpected { .. } => FetchErrorKind::Unexpected,
        }
    }

    /// Raw underlying error text, suitable for logging.
    pub fn detail(&self) -> &str {
        match self {
            Self::Connection { detail }
            | Self::Timeout { detail }
            | Self::TooManyRedirects { detail }
            | Self::Request { detail }
            | Self::Unexpected { detail } => detail,
        }
    }
}

/// One retrieved page. The status code is preserved so the scanner can
/// apply its 200-only gate independently of the reachability stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    /// True for a 2xx/3xx terminal status.
    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.status)
    }
}

// --- Scan Models ---

/// The result of one scan: whether a threat was found, the knowledge-base
/// code of the detector that fired (positive findings only), and the
/// human-readable message that becomes a report line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    pub threat: bool,
    pub code: Option<String>,
    pub message: String,
}

impl Finding {
    /// A positive finding from the detector identified by `code`.
    pub fn threat(code: &str, message: impl Into<String>) -> Self {
        Self {
            threat: true,
            code: Some(code.to_string()),
            message: message.into(),
        }
    }

    /// A negative finding. Covers the all-clear message as well as the
    /// content-unavailable cases, which are findings rather than errors.
    pub fn clear(message: impl Into<String>) -> Self {
        Self {
            threat: false,
            code: None,
            message: message.into(),
        }
    }
}

// --- Report ---

/// The ordered report returned to the caller.
///
/// Lines are append-only; they are never reordered or deduplicated, and
/// their order exactly mirrors the pipeline stages that produced them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Serializable envelope for one finished assessment, used by the JSON
/// output mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssessmentRecord {
    pub url: String,
    pub generated_at: DateTime<Utc>,
    pub report: Report,
}

impl AssessmentRecord {
    pub fn new(url: &str, report: Report) -> Self {
        Self {
            url: url.to_string(),
            generated_at: Utc::now(),
            report,
        }
    }
}
