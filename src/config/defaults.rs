//! Default constants for BrewQL configuration
//!
//! These constants define the default values used throughout the configuration
//! system when no explicit value is provided.

/// Default listen address for the HTTP API
pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

/// Default base URL of the upstream beer catalog
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.punkapi.com/v2";

/// Default upstream request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
