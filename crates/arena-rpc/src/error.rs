use serde_json::Value;

/// Ways an RPC call can fail
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The remote service returned a fault payload
    ///
    /// The payload's shape is not guaranteed — different transport
    /// versions and serialization paths mangle it differently, so it is
    /// carried as raw JSON for the gateway to classify.
    #[error("remote fault")]
    Remote(Value),

    /// The call never completed: connect failure, timeout, cancellation
    ///
    /// Nothing crossed the wire; only the local error text is available.
    #[error("transport failure: {0}")]
    Transport(#[from] anyhow::Error),
}
