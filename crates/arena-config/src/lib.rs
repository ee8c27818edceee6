#![allow(clippy::must_use_candidate)]

//! Configuration for the arena gateway
//!
//! Loaded from TOML with `{{ env.VAR }}` expansion applied to the raw
//! text before deserialization.

mod env;
pub mod health;
mod loader;
pub mod server;
pub mod services;
pub mod telemetry;

use std::collections::BTreeMap;

use serde::Deserialize;

pub use health::HealthConfig;
pub use server::ServerConfig;
pub use services::ServiceConfig;
pub use telemetry::{ExporterConfig, ExporterProtocol, TelemetryConfig};

/// Top-level gateway configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Backend services reachable through the RPC bridge, by name
    #[serde(default)]
    pub services: BTreeMap<String, ServiceConfig>,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
