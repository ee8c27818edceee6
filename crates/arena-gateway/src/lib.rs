//! Gateway-side half of the arena fault pipeline
//!
//! Proxies RPC calls to backend services and reconstructs whatever the
//! transport yields for a failed call into a well-formed HTTP error
//! response. The classification cascade in [`classify`] is the core;
//! everything else is assembly.

mod classify;
mod health;
mod proxy;
mod response;

use std::net::SocketAddr;
use std::sync::Arc;

use arena_config::Config;
use arena_core::{DiagnosticSink, TracingSink};
use arena_rpc::RpcClient;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use classify::{WireFault, classify};
pub use proxy::GatewayState;
pub use response::{GatewayFailure, HttpException, fault_response, respond};

/// Assembled gateway with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the gateway from configuration and a transport
    pub fn new(config: &Config, rpc: Arc<dyn RpcClient>) -> Self {
        Self::with_sink(config, rpc, Arc::new(TracingSink))
    }

    /// Build with an explicit diagnostic sink (tests capture it)
    pub fn with_sink(config: &Config, rpc: Arc<dyn RpcClient>, sink: Arc<dyn DiagnosticSink>) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 4000)));

        let mut app = proxy::proxy_router(GatewayState { rpc, sink });

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        app = app.layer(TraceLayer::new_for_http());

        Self { router: app, listen_address }
    }

    /// Consume the server, returning its router (for in-process testing)
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "gateway listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
