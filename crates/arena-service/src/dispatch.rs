use std::collections::HashMap;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use arena_core::{CanonicalFault, DiagnosticSink};
use async_trait::async_trait;
use futures::FutureExt;
use serde_json::Value;

use crate::error::RaisedError;
use crate::translate::translate;

/// One RPC method implementation
#[async_trait]
pub trait RpcHandler: Send + Sync {
    /// Handle one request payload
    async fn handle(&self, payload: Value) -> Result<Value, RaisedError>;
}

/// Method registry for one backend service
///
/// Runs handlers and guarantees that every failure leaving them — raised,
/// panicked, or unroutable — has been translated into a [`CanonicalFault`]
/// before the transport sees it.
pub struct Dispatcher {
    service: String,
    handlers: HashMap<String, Arc<dyn RpcHandler>>,
    sink: Arc<dyn DiagnosticSink>,
}

impl Dispatcher {
    /// Create an empty registry for the named service
    pub fn new(service: impl Into<String>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            service: service.into(),
            handlers: HashMap::new(),
            sink,
        }
    }

    /// Register a handler under a method name, replacing any previous one
    pub fn register(&mut self, method: impl Into<String>, handler: Arc<dyn RpcHandler>) -> &mut Self {
        self.handlers.insert(method.into(), handler);
        self
    }

    /// Name of the service this registry belongs to
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Run the handler for `method`, translating any failure
    ///
    /// A missing handler is a deployment bug, not an operator-authored
    /// response, so it surfaces as an infrastructure fault. Handler panics
    /// are contained here; translation is the last line of defense and
    /// must not unwind past it.
    pub async fn dispatch(&self, method: &str, payload: Value) -> Result<Value, CanonicalFault> {
        let Some(handler) = self.handlers.get(method) else {
            let raised = RaisedError::from(anyhow::anyhow!(
                "no handler registered for {}.{method}",
                self.service
            ));
            return Err(translate(&raised, self.sink.as_ref()));
        };

        match AssertUnwindSafe(handler.handle(payload)).catch_unwind().await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(raised)) => Err(translate(&raised, self.sink.as_ref())),
            Err(panic) => {
                let raised = RaisedError::from(anyhow::anyhow!(
                    "handler {}.{method} panicked: {}",
                    self.service,
                    panic_text(panic.as_ref())
                ));
                Err(translate(&raised, self.sink.as_ref()))
            }
        }
    }
}

/// Wrap an async function as an [`RpcHandler`]
pub fn handler_fn<F, Fut>(function: F) -> Arc<dyn RpcHandler>
where
    F: Fn(Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, RaisedError>> + Send + 'static,
{
    struct FnHandler<F>(F);

    #[async_trait]
    impl<F, Fut> RpcHandler for FnHandler<F>
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, RaisedError>> + Send + 'static,
    {
        async fn handle(&self, payload: Value) -> Result<Value, RaisedError> {
            (self.0)(payload).await
        }
    }

    Arc::new(FnHandler(function))
}

fn panic_text(panic: &(dyn std::any::Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|text| (*text).to_owned())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "opaque panic payload".to_owned())
}
