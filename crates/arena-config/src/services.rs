use serde::Deserialize;
use url::Url;

/// One backend service reachable through the HTTP bridge
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Base URL of the service's bridge endpoint
    pub url: Url,
}
