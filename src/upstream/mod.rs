//! Upstream beer catalog access
//!
//! This module owns the single outward-facing dependency of BrewQL: the
//! REST beer catalog. `params` builds its query strings, `client` issues
//! the requests.

mod client;
mod params;

pub use client::CatalogClient;
pub use params::{ParamValue, QueryParams};
