use arena_core::{CanonicalFault, DiagnosticSink, FaultMessage, reason_label};

use crate::error::{DomainPayload, RaisedError};

/// Convert a raised error into the canonical fault the transport will
/// serialize
///
/// Lossless for domain faults; unexpected faults collapse to the generic
/// 500 triple with the full cause reported to the sink, which is the only
/// place raw detail survives. Total: never panics, never errors.
pub fn translate(error: &RaisedError, sink: &dyn DiagnosticSink) -> CanonicalFault {
    match error {
        RaisedError::Domain(fault) => {
            let (message, label) = match &fault.payload {
                DomainPayload::Text(text) => (FaultMessage::One(text.clone()), None),
                DomainPayload::Detail { message, error } => (message.clone(), error.clone()),
            };
            let label = label.or_else(|| Some(reason_label(fault.status_code)));
            CanonicalFault::new(fault.status_code, message, label)
        }
        RaisedError::Unexpected(cause) => {
            sink.unexpected("handler failure", &format!("{cause:?}"));
            CanonicalFault::internal()
        }
    }
}
