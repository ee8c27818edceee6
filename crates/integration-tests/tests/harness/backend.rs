//! Backend service instances for end-to-end tests
//!
//! Two kinds: a real arena-service backend running actual handlers, and
//! a "legacy" mock that answers with whatever raw bytes a misbehaving
//! transport might have produced.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use arena_service::{Dispatcher, rpc_router};
use axum::Router;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// A running backend, real or mock
pub struct TestBackend {
    addr: SocketAddr,
    shutdown: CancellationToken,
}

impl TestBackend {
    /// Start a real backend service from a dispatcher
    pub async fn start(dispatcher: Dispatcher) -> anyhow::Result<Self> {
        Self::serve(rpc_router(Arc::new(dispatcher))).await
    }

    /// Start a mock backend answering each method with canned bytes
    ///
    /// Responses are `(status, body)` pairs emitted verbatim, letting
    /// tests reproduce legacy wire shapes no current service produces.
    pub async fn start_canned(responses: HashMap<String, (u16, Value)>) -> anyhow::Result<Self> {
        let responses = Arc::new(responses);
        let router = Router::new()
            .route("/rpc/{method}", axum::routing::post(canned_handler))
            .with_state(responses);
        Self::serve(router).await
    }

    async fn serve(router: Router) -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown })
    }

    /// Base URL of this backend
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop the backend immediately
    pub fn stop(&self) {
        self.shutdown.cancel();
    }
}

impl Drop for TestBackend {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn canned_handler(
    State(responses): State<Arc<HashMap<String, (u16, Value)>>>,
    Path(method): Path<String>,
) -> Response {
    match responses.get(&method) {
        Some((status, body)) => {
            let status = http::StatusCode::from_u16(*status).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
            (status, axum::Json(body.clone())).into_response()
        }
        None => http::StatusCode::NOT_IMPLEMENTED.into_response(),
    }
}
