use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::client::RpcClient;
use crate::error::CallError;

/// HTTP bridge to backend services
///
/// Each service exposes `POST {base}/rpc/{method}` via
/// `arena_service::rpc_router`. A non-success response carries the
/// service's fault payload; it is handed back raw for classification,
/// since intermediate proxies and older bridge versions reshape it.
pub struct HttpRpc {
    client: reqwest::Client,
    services: HashMap<String, Url>,
}

impl HttpRpc {
    /// Build a bridge over the given service base URLs
    pub fn new(services: HashMap<String, Url>) -> Self {
        Self {
            client: reqwest::Client::new(),
            services,
        }
    }

    fn endpoint(base: &Url, method: &str) -> String {
        format!("{}/rpc/{method}", base.as_str().trim_end_matches('/'))
    }
}

#[async_trait]
impl RpcClient for HttpRpc {
    async fn call(&self, service: &str, method: &str, payload: Value) -> Result<Value, CallError> {
        let Some(base) = self.services.get(service) else {
            return Err(CallError::Transport(anyhow::anyhow!("service not configured: {service}")));
        };

        let response = self
            .client
            .post(Self::endpoint(base, method))
            .json(&payload)
            .send()
            .await
            .map_err(|e| CallError::Transport(anyhow::Error::new(e)))?;

        if response.status().is_success() {
            let value = response
                .json::<Value>()
                .await
                .map_err(|e| CallError::Transport(anyhow::Error::new(e)))?;
            return Ok(value);
        }

        let text = response
            .text()
            .await
            .map_err(|e| CallError::Transport(anyhow::Error::new(e)))?;
        // Keep a non-JSON fault body as a plain string so the gateway can
        // still log it verbatim when classification fails
        let payload = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));
        Err(CallError::Remote(payload))
    }

    fn has_service(&self, service: &str) -> bool {
        self.services.contains_key(service)
    }
}
