//! Command-line arguments for the BrewQL server
//!
//! This module defines the CLI arguments structure using clap.

use clap::Parser;
use std::path::PathBuf;

use super::defaults::*;

/// Command-line arguments for the BrewQL server
#[derive(Parser, Debug, Clone)]
#[command(name = "brewql")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "GraphQL gateway for the Punk API beer catalog")]
pub struct ServerArgs {
    /// Path to configuration file (TOML format)
    /// If not specified, looks for brewql.toml in current directory,
    /// /etc/brewql/, or ~/.config/brewql/
    #[arg(short, long, env = "BREWQL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Generate example configuration file and exit
    #[arg(long)]
    pub generate_config: bool,

    /// Address to listen on for the HTTP API
    #[arg(long, env = "BREWQL_HTTP_ADDR", default_value = DEFAULT_HTTP_ADDR)]
    pub http_addr: String,

    /// Base URL of the upstream beer catalog REST API
    #[arg(long, env = "BREWQL_UPSTREAM_BASE_URL", default_value = DEFAULT_UPSTREAM_BASE_URL)]
    pub upstream_base_url: String,

    /// Upstream request timeout in seconds
    #[arg(long, env = "BREWQL_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "BREWQL_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}
