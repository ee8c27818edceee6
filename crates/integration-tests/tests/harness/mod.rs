//! Shared test harness: gateway + backend instances on random ports

pub mod backend;
pub mod server;

use arena_config::Config;

/// Build a gateway config pointing at the given named backends
pub fn gateway_config(backends: &[(&str, &str)]) -> Config {
    let mut toml = String::from("[server]\nlisten_address = \"127.0.0.1:0\"\n");
    for (name, url) in backends {
        toml.push_str(&format!("\n[services.{name}]\nurl = \"{url}\"\n"));
    }
    toml::from_str(&toml).expect("valid test config")
}
