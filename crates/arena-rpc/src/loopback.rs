use std::collections::HashMap;
use std::sync::Arc;

use arena_core::CanonicalFault;
use arena_service::Dispatcher;
use async_trait::async_trait;
use serde_json::{Value, json};

use crate::client::RpcClient;
use crate::error::CallError;

/// How a fault record is laid onto the simulated wire
///
/// Real deployments have shipped every one of these, depending on
/// transport library version and which serializer touched the record
/// last. The loopback transport can reproduce each so the gateway's
/// classifier stays honest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultEncoding {
    /// `{"statusCode": 403, "message": "...", "error": "Forbidden"}`
    Direct,
    /// `{"error": {"statusCode": 409, ...}}`
    Nested,
    /// `{"message": "{\"statusCode\":401,...}"}` — record stringified into
    /// a message field
    EmbeddedMessage,
    /// `{"status": 404, "message": "...", "error": "NotFound"}` — legacy
    /// field name
    StatusField,
}

impl FaultEncoding {
    /// Serialize a fault the way this wire variant would
    pub fn encode(self, fault: &CanonicalFault) -> Value {
        let direct = serde_json::to_value(fault).unwrap_or_else(|_| json!({ "statusCode": 500 }));
        match self {
            Self::Direct => direct,
            Self::Nested => json!({ "error": direct }),
            Self::EmbeddedMessage => json!({ "message": direct.to_string() }),
            Self::StatusField => json!({
                "status": fault.status_code,
                "message": fault.message,
                "error": fault.error,
            }),
        }
    }
}

/// In-process transport for embedded deployments and tests
///
/// Holds the dispatchers of every service directly; a fault is encoded
/// with the configured [`FaultEncoding`] so callers see exactly what the
/// wire would have produced.
pub struct LoopbackRpc {
    services: HashMap<String, Arc<Dispatcher>>,
    encoding: FaultEncoding,
}

impl LoopbackRpc {
    /// Create an empty loopback using the modern direct encoding
    pub fn new() -> Self {
        Self::with_encoding(FaultEncoding::Direct)
    }

    /// Create an empty loopback producing the given wire variant
    pub fn with_encoding(encoding: FaultEncoding) -> Self {
        Self {
            services: HashMap::new(),
            encoding,
        }
    }

    /// Attach a service's dispatcher
    #[must_use]
    pub fn with_service(mut self, dispatcher: Arc<Dispatcher>) -> Self {
        self.services.insert(dispatcher.service().to_owned(), dispatcher);
        self
    }
}

impl Default for LoopbackRpc {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RpcClient for LoopbackRpc {
    async fn call(&self, service: &str, method: &str, payload: Value) -> Result<Value, CallError> {
        let Some(dispatcher) = self.services.get(service) else {
            return Err(CallError::Transport(anyhow::anyhow!("service not configured: {service}")));
        };

        match dispatcher.dispatch(method, payload).await {
            Ok(value) => Ok(value),
            Err(fault) => Err(CallError::Remote(self.encoding.encode(&fault))),
        }
    }

    fn has_service(&self, service: &str) -> bool {
        self.services.contains_key(service)
    }
}
