//! HTTP client for the upstream beer catalog.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{BrewError, Result};
use crate::graphql::types::Beer;

use super::params::QueryParams;

/// Maximum upstream body length included in error messages
const ERROR_BODY_SNIPPET_LEN: usize = 200;

/// HTTP client for the upstream beer catalog REST API.
///
/// Owns a pooled `reqwest::Client` constructed once at startup; each call
/// issues exactly one GET and surfaces any failure to the caller unchanged.
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
}

/// The upstream serves a by-id lookup as either a one-element array or a
/// bare object depending on deployment; accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum BeerLookup {
    Many(Vec<Beer>),
    One(Box<Beer>),
}

impl CatalogClient {
    /// Create a new catalog client with the given base URL and request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BrewError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch a single beer by id, normalized to a one-element list.
    pub async fn beer_by_id(&self, id: &str) -> Result<Vec<Beer>> {
        let url = format!("{}/beers/{}", self.base_url, id);
        let body = self.fetch(&url).await?;

        let lookup: BeerLookup = serde_json::from_str(&body)
            .map_err(|e| BrewError::Decode(format!("GET {}: {}", url, e)))?;

        Ok(match lookup {
            BeerLookup::Many(beers) => beers,
            BeerLookup::One(beer) => vec![*beer],
        })
    }

    /// Search the catalog with the given filter parameters.
    pub async fn search(&self, params: &QueryParams) -> Result<Vec<Beer>> {
        let url = format!("{}/beers?{}", self.base_url, params.to_query_string());
        let body = self.fetch(&url).await?;

        serde_json::from_str(&body).map_err(|e| BrewError::Decode(format!("GET {}: {}", url, e)))
    }

    /// Issue a GET and return the body of a successful response.
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!(%url, "fetching upstream");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(%url, error = %e, "upstream request failed");
            BrewError::Network(format!("GET {}: {}", url, e))
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BrewError::Network(format!("GET {}: {}", url, e)))?;

        if !status.is_success() {
            warn!(%url, %status, "upstream returned error status");
            return Err(BrewError::Upstream(format!(
                "GET {}: HTTP {}: {}",
                url,
                status,
                body_snippet(&body)
            )));
        }

        Ok(body)
    }
}

fn body_snippet(body: &str) -> &str {
    let end = body
        .char_indices()
        .nth(ERROR_BODY_SNIPPET_LEN)
        .map(|(i, _)| i)
        .unwrap_or(body.len());
    &body[..end]
}
