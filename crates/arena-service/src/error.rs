use arena_core::FaultMessage;
use thiserror::Error;

/// An error raised while handling one RPC request
///
/// Modeled as a tagged sum rather than an exception hierarchy: a failure
/// is either an intentional, operator-authored response (`Domain`) or an
/// infrastructure fault whose detail must stay server-side (`Unexpected`).
#[derive(Debug, Error)]
pub enum RaisedError {
    /// Expected failure — validation, auth, not-found, conflict
    #[error("domain fault ({})", .0.status_code)]
    Domain(DomainFault),

    /// Anything else: programming bugs, downstream I/O failures, panics
    #[error("unexpected fault: {0}")]
    Unexpected(#[from] anyhow::Error),
}

/// An intentional failure with a chosen status and payload
#[derive(Debug, Clone)]
pub struct DomainFault {
    /// HTTP status the caller should see
    pub status_code: u16,
    /// What the handler attached to the failure
    pub payload: DomainPayload,
}

/// Payload of a domain fault
///
/// Handlers either raise a bare message or a structured detail with an
/// optional explicit machine label.
#[derive(Debug, Clone)]
pub enum DomainPayload {
    /// The payload itself is the message
    Text(String),
    /// Structured payload with explicit message(s) and optional label
    Detail {
        message: FaultMessage,
        error: Option<String>,
    },
}

impl RaisedError {
    /// Raise a domain fault with an arbitrary status and bare message
    pub fn domain(status_code: u16, message: impl Into<String>) -> Self {
        Self::Domain(DomainFault {
            status_code,
            payload: DomainPayload::Text(message.into()),
        })
    }

    /// Raise a domain fault with structured detail
    pub fn domain_detail(status_code: u16, message: impl Into<FaultMessage>, error: Option<String>) -> Self {
        Self::Domain(DomainFault {
            status_code,
            payload: DomainPayload::Detail {
                message: message.into(),
                error,
            },
        })
    }

    /// 400 with a single message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::domain(400, message)
    }

    /// 400 carrying per-field validation messages, preserved as an array
    pub fn validation(messages: Vec<String>) -> Self {
        Self::domain_detail(400, messages, None)
    }

    /// 401
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::domain(401, message)
    }

    /// 403
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::domain(403, message)
    }

    /// 404
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::domain(404, message)
    }

    /// 409
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::domain(409, message)
    }

    /// Whether this failure is safe to describe to the caller
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}
