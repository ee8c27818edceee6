use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Message used whenever failure detail must not reach the client
pub const GENERIC_MESSAGE: &str = "Internal server error";

/// Machine label paired with [`GENERIC_MESSAGE`]
pub const GENERIC_LABEL: &str = "InternalServerError";

/// One or more human-readable failure messages
///
/// Validation produces several messages at once; everything else produces
/// one. The wire shape is preserved in both directions — an array stays an
/// array, a string stays a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FaultMessage {
    /// A single message
    One(String),
    /// An ordered sequence of messages (e.g. per-field validation output)
    Many(Vec<String>),
}

impl FaultMessage {
    /// Whether there is no usable text at all
    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(text) => text.is_empty(),
            Self::Many(items) => items.iter().all(String::is_empty),
        }
    }
}

impl From<&str> for FaultMessage {
    fn from(text: &str) -> Self {
        Self::One(text.to_owned())
    }
}

impl From<String> for FaultMessage {
    fn from(text: String) -> Self {
        Self::One(text)
    }
}

impl From<Vec<String>> for FaultMessage {
    fn from(items: Vec<String>) -> Self {
        Self::Many(items)
    }
}

/// The single normalized representation of a failure crossing the boundary
///
/// Built once on the service side when a handler fails, serialized by the
/// transport, and recovered on the gateway side. Field names follow the
/// wire contract (`statusCode`), not Rust convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalFault {
    /// HTTP status code, always in [100, 599]
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Human-readable detail, never empty
    pub message: FaultMessage,
    /// Short machine-readable label for the status
    pub error: String,
}

impl CanonicalFault {
    /// Build a fault, enforcing the field invariants
    ///
    /// An out-of-range status collapses to 500, an empty message to the
    /// generic message, and a missing label to the reason phrase derived
    /// from the status.
    pub fn new(status_code: u16, message: FaultMessage, error: Option<String>) -> Self {
        let status_code = if (100..=599).contains(&status_code) {
            status_code
        } else {
            500
        };

        let message = if message.is_empty() {
            FaultMessage::One(GENERIC_MESSAGE.to_owned())
        } else {
            message
        };

        let error = match error {
            Some(label) if !label.is_empty() => label,
            _ => reason_label(status_code),
        };

        Self {
            status_code,
            message,
            error,
        }
    }

    /// The generic fault emitted when failure detail must be withheld
    pub fn internal() -> Self {
        Self {
            status_code: 500,
            message: FaultMessage::One(GENERIC_MESSAGE.to_owned()),
            error: GENERIC_LABEL.to_owned(),
        }
    }
}

/// Derive the machine label for a status code
///
/// The label is the standard HTTP reason phrase with spaces removed
/// (404 → `NotFound`, 500 → `InternalServerError`). Unknown codes fall
/// back to the generic label.
pub fn reason_label(status_code: u16) -> String {
    StatusCode::from_u16(status_code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .map_or_else(|| GENERIC_LABEL.to_owned(), |phrase| phrase.replace(' ', ""))
}
