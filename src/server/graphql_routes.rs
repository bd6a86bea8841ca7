//! GraphQL Axum routes
//!
//! Provides the HTTP endpoints for the GraphQL API:
//!
//! - `POST /graphql` - Query endpoint
//! - `GET /graphql` - GraphQL Playground (interactive IDE)

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::graphql::BrewSchema;

/// Shared state for GraphQL routes
#[derive(Clone)]
pub struct GraphQLState {
    pub schema: BrewSchema,
}

/// Create the GraphQL router with all endpoints
pub fn create_graphql_router(state: GraphQLState) -> Router {
    Router::new()
        .route(
            "/graphql",
            get(graphql_playground_handler).post(graphql_handler),
        )
        .with_state(state)
}

/// Handle GraphQL queries via POST
async fn graphql_handler(
    State(state): State<GraphQLState>,
    Json(request): Json<async_graphql::Request>,
) -> Response {
    let response = state.schema.execute(request).await;
    let body = serde_json::to_string(&response).unwrap_or_default();
    (
        StatusCode::OK,
        [("content-type", "application/json")],
        body,
    )
        .into_response()
}

/// Serve the GraphQL Playground IDE via GET
async fn graphql_playground_handler() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}
