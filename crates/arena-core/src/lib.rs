//! Shared fault vocabulary for the arena platform
//!
//! Defines the canonical fault record that crosses the RPC boundary
//! between the gateway and backend services, and the diagnostic sink
//! used to keep raw failure detail out of client responses.

mod fault;
mod sink;

pub use fault::{CanonicalFault, FaultMessage, GENERIC_LABEL, GENERIC_MESSAGE, reason_label};
pub use sink::{DiagnosticSink, TracingSink};
