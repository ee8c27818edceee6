use async_trait::async_trait;
use serde_json::Value;

use crate::error::CallError;

/// One request/response RPC call to a named backend service
///
/// The concrete transport is an external collaborator; the gateway only
/// needs at-most-once call semantics and a raw payload on failure.
#[async_trait]
pub trait RpcClient: Send + Sync {
    /// Invoke `method` on `service` with a JSON payload
    async fn call(&self, service: &str, method: &str, payload: Value) -> Result<Value, CallError>;

    /// Whether `service` is reachable through this transport
    ///
    /// Lets the gateway reject unknown services locally instead of
    /// manufacturing a transport failure.
    fn has_service(&self, service: &str) -> bool;
}
