//! Configuration module for BrewQL
//!
//! This module is organized into submodules:
//! - `defaults` - Default constants and values
//! - `args` - CLI argument definitions
//! - `file` - TOML configuration file support
//! - `merge` - Merging file values with CLI arguments

mod args;
mod defaults;
pub mod file;
mod merge;

pub use args::ServerArgs;
pub use defaults::*;
pub use file::ConfigFile;
pub use merge::merge_config_with_args;

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{BrewError, Result};

/// Complete server configuration for BrewQL.
///
/// Configuration is loaded from multiple sources with this precedence:
/// 1. Command-line arguments
/// 2. Environment variables (`BREWQL_*` prefix)
/// 3. Config file (TOML)
/// 4. Built-in defaults
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP API listen address
    pub http_addr: SocketAddr,

    /// Base URL of the upstream beer catalog, without a trailing slash
    pub upstream_base_url: String,

    /// Upstream request timeout
    pub request_timeout: Duration,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl ServerConfig {
    /// Create a new server configuration from command-line arguments
    pub fn from_args(args: ServerArgs) -> Result<Self> {
        let http_addr: SocketAddr = args
            .http_addr
            .parse()
            .map_err(|e| BrewError::Config(format!("Invalid HTTP address: {}", e)))?;

        let upstream_base_url = args.upstream_base_url.trim_end_matches('/').to_string();

        Ok(Self {
            http_addr,
            upstream_base_url,
            request_timeout: Duration::from_secs(args.request_timeout_secs),
            log_level: args.log_level,
        })
    }

    /// Validate the configuration, returning an error describing the first
    /// problem found. Call this at startup, after `from_args`.
    pub fn validate(&self) -> Result<()> {
        if self.http_addr.port() == 0 {
            return Err(BrewError::Config(
                "HTTP listen port must be between 1 and 65535".to_string(),
            ));
        }

        if self.upstream_base_url.is_empty() {
            return Err(BrewError::Config(
                "Upstream base URL must not be empty".to_string(),
            ));
        }

        if !self.upstream_base_url.starts_with("http://")
            && !self.upstream_base_url.starts_with("https://")
        {
            return Err(BrewError::Config(format!(
                "Upstream base URL must use http:// or https://, got '{}'",
                self.upstream_base_url
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(BrewError::Config(
                "Request timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
