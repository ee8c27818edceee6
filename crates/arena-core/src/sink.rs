/// Destination for raw failure detail
///
/// Unexpected and unclassifiable faults carry diagnostic text that must
/// reach operators but never clients. The sink is an injected capability
/// rather than a global so tests can capture and assert on what was
/// reported.
pub trait DiagnosticSink: Send + Sync {
    /// Report a failure that will be surfaced to the client as a generic
    /// 500; `detail` is the full original cause, preserved only here
    fn unexpected(&self, context: &str, detail: &str);
}

/// Production sink that forwards to the `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn unexpected(&self, context: &str, detail: &str) {
        tracing::error!(context, detail, "unexpected fault");
    }
}
