//! API Integration Tests
//!
//! These tests exercise the HTTP layer via `tower::ServiceExt::oneshot`
//! against the real application router. Queries that reach the upstream are
//! served by a stub catalog bound to an ephemeral port.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use brewql::server::{create_router, GraphQLState};
use brewql::upstream::CatalogClient;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build the application router with its upstream pointed at `base_url`.
fn create_test_app(base_url: &str) -> Router {
    let client = CatalogClient::new(base_url, Duration::from_secs(5))
        .expect("failed to create catalog client");
    let schema = brewql::graphql::build_schema(Arc::new(client));
    create_router(GraphQLState { schema })
}

/// Start a stub catalog serving `body` for every request, returning its base URL.
async fn spawn_stub(body: &'static str) -> String {
    let app = Router::new().fallback(move || async move {
        ([("content-type", "application/json")], body)
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub upstream");
    let addr = listener.local_addr().expect("failed to read stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });
    format!("http://{addr}/v2")
}

/// Send a request and return (status, body string).
async fn send(app: Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = app.oneshot(req).await.expect("request failed");
    let status = resp.status();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app("http://localhost:1/v2");

    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("failed to build request");
    let (status, body) = send(app, req).await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).expect("body should be JSON");
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_playground_served_on_get() {
    let app = create_test_app("http://localhost:1/v2");

    let req = Request::builder()
        .uri("/graphql")
        .body(Body::empty())
        .expect("failed to build request");
    let (status, body) = send(app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("GraphQL Playground"), "unexpected playground body");
    assert!(body.contains("/graphql"));
}

#[tokio::test]
async fn test_graphql_query_over_http() {
    let base_url = spawn_stub(r#"[{"id": 192, "name": "Punk IPA 2007 - 2010", "abv": 6.0}]"#).await;
    let app = create_test_app(&base_url);

    let req = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"query": "{ beers(name: \"Punk IPA\") { id name abv } }"}"#,
        ))
        .expect("failed to build request");
    let (status, body) = send(app, req).await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).expect("body should be JSON");
    assert!(json["errors"].is_null(), "Errors: {}", json["errors"]);
    assert_eq!(json["data"]["beers"][0]["id"], "192");
    assert_eq!(json["data"]["beers"][0]["name"], "Punk IPA 2007 - 2010");
    assert_eq!(json["data"]["beers"][0]["abv"], 6.0);
}

#[tokio::test]
async fn test_unknown_field_returns_graphql_error() {
    let app = create_test_app("http://localhost:1/v2");

    let req = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"query": "{ ales { name } }"}"#))
        .expect("failed to build request");
    let (status, body) = send(app, req).await;

    // GraphQL errors ride in the response body, not the HTTP status
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).expect("body should be JSON");
    let has_errors = json["errors"].as_array().is_some_and(|e| !e.is_empty());
    assert!(has_errors, "expected GraphQL errors in body: {body}");
}
