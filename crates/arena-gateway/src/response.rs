use arena_core::{CanonicalFault, DiagnosticSink};
use axum::response::{IntoResponse, Json, Response};
use http::StatusCode;
use serde_json::Value;

use crate::classify::{WireFault, classify};

/// An HTTP-style failure raised inside the gateway itself
///
/// Never crossed the wire, so status and body are trusted as-is — the
/// closest equivalent of a framework exception with `getStatus()` /
/// `getResponse()` accessors.
#[derive(Debug, thiserror::Error)]
#[error("http {status}")]
pub struct HttpException {
    status: StatusCode,
    body: Value,
}

impl HttpException {
    /// Raise with an explicit status and response body
    pub const fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// Raise with the standard `{statusCode, message, error}` envelope
    pub fn envelope(status: StatusCode, message: impl Into<String>) -> Self {
        let message: String = message.into();
        let fault = CanonicalFault::new(status.as_u16(), message.into(), None);
        let body = serde_json::to_value(&fault).unwrap_or(Value::Null);
        Self::new(status, body)
    }

    /// Status this exception will respond with
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Response body, emitted verbatim
    pub const fn body(&self) -> &Value {
        &self.body
    }
}

impl IntoResponse for HttpException {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Everything a gateway request can fail with
#[derive(Debug)]
pub enum GatewayFailure {
    /// Locally raised exception; status and body pass through directly
    Local(HttpException),
    /// Failure surfaced by the RPC layer; must be classified first
    Wire(WireFault),
}

impl From<HttpException> for GatewayFailure {
    fn from(exception: HttpException) -> Self {
        Self::Local(exception)
    }
}

/// Turn any gateway failure into its one HTTP response
pub fn respond(failure: GatewayFailure, sink: &dyn DiagnosticSink) -> Response {
    match failure {
        GatewayFailure::Local(exception) => exception.into_response(),
        GatewayFailure::Wire(wire) => fault_response(classify(&wire, sink)),
    }
}

/// Emit a classified fault as an HTTP response
///
/// Any resolved 500 — explicit, downstream-authored, or the no-match
/// default — is replaced with the generic triple so arbitrary text can
/// never ride out on a 500. Everything else passes through verbatim;
/// 4xx detail is operator-authored and safe.
pub fn fault_response(fault: CanonicalFault) -> Response {
    let fault = if fault.status_code == 500 {
        CanonicalFault::internal()
    } else {
        fault
    };
    let status = StatusCode::from_u16(fault.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(fault)).into_response()
}
