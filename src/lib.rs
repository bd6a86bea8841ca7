#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

//! # BrewQL
//!
//! BrewQL exposes the Punk API beer catalog through a GraphQL query
//! interface. It declares a typed schema mirroring the upstream REST
//! response shapes and a single resolver that translates GraphQL arguments
//! into upstream query-string parameters, forwards one HTTP request per
//! query, and returns the parsed response unmodified.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run with defaults (listens on 0.0.0.0:8080)
//! $ ./brewql
//!
//! # Point at a different upstream
//! $ ./brewql --upstream-base-url http://localhost:9999/v2
//! ```
//!
//! Then open <http://localhost:8080/graphql> for the playground, or POST
//! queries to the same path:
//!
//! ```graphql
//! query {
//!   beers(name: "Punk IPA") {
//!     name
//!     tagline
//!     abv
//!   }
//! }
//! ```
//!
//! ## Library Usage
//!
//! The schema can be built and executed in-process without a server, which
//! is how the test suite drives it:
//!
//! ```no_run
//! use brewql::upstream::CatalogClient;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # fn main() -> brewql::Result<()> {
//! let client = Arc::new(CatalogClient::new(
//!     "https://api.punkapi.com/v2",
//!     Duration::from_secs(30),
//! )?);
//! let schema = brewql::graphql::build_schema(client);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod graphql;
pub mod server;
pub mod upstream;

pub use config::{merge_config_with_args, ConfigFile, ServerArgs, ServerConfig};
pub use error::{BrewError, Result};
