use arena_core::{CanonicalFault, DiagnosticSink, FaultMessage};
use serde_json::Value;

/// A failed call as observed by the gateway
///
/// Either the remote service handed back a fault payload, or the call
/// itself died locally and only an error message survives. Neither form
/// is trustworthy — the payload's shape depends on which transport
/// version and serializer touched it last.
#[derive(Debug)]
pub enum WireFault {
    /// Raw value the RPC layer yielded for a failed call
    Payload(Value),
    /// Message text of a native error that never carried a payload
    Message(String),
}

/// Recover the canonical fault from whatever the RPC layer produced
///
/// Runs an ordered cascade of structural probes, first match wins. When
/// nothing matches, the original value is reported to the sink with full
/// detail — an unclassifiable fault is either a bug or a wire shape this
/// cascade does not know yet — and the generic 500 fault is returned.
///
/// Pure in its input: classifying the same value twice yields the same
/// fault; the sink write on the default branch is the only side effect.
pub fn classify(fault: &WireFault, sink: &dyn DiagnosticSink) -> CanonicalFault {
    match fault {
        WireFault::Payload(value) => probe_all(value).unwrap_or_else(|| {
            sink.unexpected("unclassified wire fault", &value.to_string());
            CanonicalFault::internal()
        }),
        WireFault::Message(text) => parse_embedded(text).unwrap_or_else(|| {
            sink.unexpected("unclassified transport failure", text);
            CanonicalFault::internal()
        }),
    }
}

/// The probe cascade, in wire-format-archaeology order
///
/// Best-effort heuristics over an adversarial input, not a closed
/// specification of the wire format: a future transport upgrade can
/// still produce a shape none of these recognize.
fn probe_all(value: &Value) -> Option<CanonicalFault> {
    const PROBES: &[fn(&Value) -> Option<CanonicalFault>] = &[
        probe_embedded_message,
        probe_status_code,
        probe_nested_error,
        probe_status_field,
    ];
    PROBES.iter().find_map(|probe| probe(value))
}

/// A fault record stringified into a `message` field
///
/// Covers both carriers the original transport produced — an Error whose
/// `.message` holds the JSON, and a bare object with a top-level
/// `message` — since both arrive here as the same JSON value.
fn probe_embedded_message(value: &Value) -> Option<CanonicalFault> {
    parse_embedded(value.get("message")?.as_str()?)
}

/// A direct `statusCode` field in the error range
fn probe_status_code(value: &Value) -> Option<CanonicalFault> {
    let status = numeric_field(value, "statusCode")?;
    (status >= 400).then(|| extract(value, status))
}

/// The record nested one level down under `error`
fn probe_nested_error(value: &Value) -> Option<CanonicalFault> {
    let nested = value.get("error")?;
    let status = numeric_field(nested, "statusCode")?;
    nested.is_object().then(|| extract(nested, status))
}

/// Legacy transport versions spell the code `status`
fn probe_status_field(value: &Value) -> Option<CanonicalFault> {
    let status = numeric_field(value, "status")?;
    (400..=599).contains(&status).then(|| extract(value, status))
}

/// Parse a string as a stringified fault record
fn parse_embedded(text: &str) -> Option<CanonicalFault> {
    let parsed: Value = serde_json::from_str(text).ok()?;
    let status = numeric_field(&parsed, "statusCode")?;
    Some(extract(&parsed, status))
}

/// Build the fault from an object that carried `status`
///
/// Missing or malformed `message`/`error` fall back to the constructor's
/// defaults (generic message, derived reason phrase).
fn extract(value: &Value, status: u16) -> CanonicalFault {
    let message = match value.get("message") {
        Some(Value::String(text)) => FaultMessage::One(text.clone()),
        Some(Value::Array(items)) => FaultMessage::Many(
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect(),
        ),
        _ => FaultMessage::One(String::new()),
    };
    let label = value.get("error").and_then(Value::as_str).map(str::to_owned);
    CanonicalFault::new(status, message, label)
}

fn numeric_field(value: &Value, field: &str) -> Option<u16> {
    u16::try_from(value.get(field)?.as_u64()?).ok()
}
