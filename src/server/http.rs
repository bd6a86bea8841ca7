//! HTTP server for the GraphQL API and health checks
//!
//! Endpoints:
//! - `POST /graphql` - GraphQL query endpoint
//! - `GET /graphql` - GraphQL Playground
//! - `GET /health` - Liveness probe

use axum::{routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::{BrewError, Result};
use crate::upstream::CatalogClient;

use super::graphql_routes::{create_graphql_router, GraphQLState};

/// Build the application router from shared GraphQL state.
pub fn create_router(state: GraphQLState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(create_graphql_router(state))
}

/// Run the HTTP server until it fails or is shut down.
pub async fn run(config: ServerConfig) -> Result<()> {
    let client = Arc::new(CatalogClient::new(
        &config.upstream_base_url,
        config.request_timeout,
    )?);
    let schema = crate::graphql::build_schema(client);
    let app = create_router(GraphQLState { schema });

    let listener = tokio::net::TcpListener::bind(config.http_addr)
        .await
        .map_err(|e| BrewError::Server(format!("Failed to bind {}: {}", config.http_addr, e)))?;
    let addr = listener
        .local_addr()
        .map_err(|e| BrewError::Server(format!("Failed to read local address: {}", e)))?;

    info!(
        addr = %addr,
        upstream = %config.upstream_base_url,
        "GraphQL API listening (POST /graphql queries, GET /graphql playground)"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Liveness probe
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
