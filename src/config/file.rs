//! Configuration file support for BrewQL
//!
//! This module provides TOML configuration file parsing and merging with CLI arguments.
//!
//! ## Priority Order
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values
//!
//! ## Example Configuration
//!
//! ```toml
//! # brewql.toml
//!
//! [server]
//! http_addr = "0.0.0.0:8080"
//! log_level = "info"
//!
//! [upstream]
//! base_url = "https://api.punkapi.com/v2"
//! request_timeout_secs = 30
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{BrewError, Result};

/// Root configuration structure for TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Server configuration
    pub server: ServerSection,

    /// Upstream catalog configuration
    pub upstream: UpstreamSection,
}

/// Server section configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// HTTP API listen address
    pub http_addr: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: Option<String>,
}

/// Upstream section configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamSection {
    /// Base URL of the upstream beer catalog REST API
    pub base_url: Option<String>,

    /// Upstream request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            BrewError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        toml::from_str(&contents).map_err(|e| {
            BrewError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })
    }

    /// Try to load configuration from default locations
    ///
    /// Searches in order:
    /// 1. ./brewql.toml
    /// 2. /etc/brewql/brewql.toml
    /// 3. ~/.config/brewql/brewql.toml
    pub fn load_default() -> Option<Self> {
        let default_paths = [
            PathBuf::from("brewql.toml"),
            PathBuf::from("/etc/brewql/brewql.toml"),
            dirs::config_dir()
                .map(|p| p.join("brewql/brewql.toml"))
                .unwrap_or_default(),
        ];

        for path in default_paths.iter().filter(|p| !p.as_os_str().is_empty()) {
            if path.exists() {
                match Self::load(path) {
                    Ok(config) => {
                        tracing::info!("Loaded configuration from {:?}", path);
                        return Some(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        None
    }

    /// Generate an example configuration file
    pub fn generate_example() -> String {
        r#"# BrewQL Configuration File
# Copy to brewql.toml and customize as needed
#
# Configuration priority (highest to lowest):
# 1. Command-line arguments
# 2. Environment variables
# 3. This configuration file
# 4. Default values

[server]
# HTTP API listen address
http_addr = "0.0.0.0:8080"

# Log level (trace, debug, info, warn, error)
log_level = "info"

[upstream]
# Base URL of the upstream beer catalog REST API
base_url = "https://api.punkapi.com/v2"

# Upstream request timeout in seconds
request_timeout_secs = 30
"#
        .to_string()
    }
}
