//! Error types for BrewQL
//!
//! This module defines the main error type used throughout BrewQL. Resolver
//! call sites convert these into GraphQL field errors with the message
//! preserved, so upstream failures reach the client unaltered.

use thiserror::Error;

/// Result type alias for BrewQL operations
pub type Result<T> = std::result::Result<T, BrewError>;

/// Main error type for BrewQL
#[derive(Error, Debug)]
pub enum BrewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}
