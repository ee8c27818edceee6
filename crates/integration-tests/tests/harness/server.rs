//! Test gateway wrapper that serves on a random port

use std::net::SocketAddr;
use std::sync::Arc;

use arena_config::Config;
use arena_gateway::Server;
use arena_rpc::RpcClient;
use tokio_util::sync::CancellationToken;

/// A running gateway instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a gateway with the given configuration and transport
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(config: &Config, rpc: Arc<dyn RpcClient>) -> anyhow::Result<Self> {
        let server = Server::new(config, rpc);
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        // Bind the listener here so we know the actual port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// Full URL for a path on the running gateway
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
