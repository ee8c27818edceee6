use std::path::PathBuf;

use clap::Parser;

/// Arena API gateway
#[derive(Debug, Parser)]
#[command(name = "arena", about = "API gateway for the arena platform services")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "arena.toml", env = "ARENA_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "ARENA_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
