use std::collections::HashMap;

use serde::Deserialize;

/// Telemetry configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Service name for telemetry metadata
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Additional resource attributes
    #[serde(default)]
    pub resource_attributes: HashMap<String, String>,
    /// OTLP trace exporter; when unset only local fmt logging is active
    #[serde(default)]
    pub exporter: Option<ExporterConfig>,
}

/// OTLP exporter configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    /// Collector endpoint, e.g. `http://otel.internal:4317`
    pub endpoint: String,
    /// Wire protocol to the collector
    #[serde(default)]
    pub protocol: ExporterProtocol,
    /// Export timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// OTLP wire protocol
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExporterProtocol {
    #[default]
    Grpc,
    HttpProtobuf,
}

fn default_service_name() -> String {
    "arena-gateway".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_timeout() -> u64 {
    10
}
