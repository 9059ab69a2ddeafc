#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use mealbridge_api::config::ServerConfig;
use mealbridge_api::router::build_app_router;
use mealbridge_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through [`build_app_router`] so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to `uri`.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with an empty body (transition endpoints).
pub async fn put(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request to `uri`.
pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers (drive the API itself, never the database directly)
// ---------------------------------------------------------------------------

/// Register a user through the API and return its id.
pub async fn seed_user(app: &Router, email: &str, role: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/users",
        serde_json::json!({
            "email": email,
            "name": format!("Test {email}"),
            "role": role,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// A valid listing body expiring tomorrow.
pub fn listing_body() -> serde_json::Value {
    let expiry = chrono::Utc::now() + chrono::Duration::days(1);
    serde_json::json!({
        "food_type": "Vegetable biryani",
        "quantity": 12,
        "unit": "servings",
        "category": "COOKED_MEALS",
        "description": "Leftover from catering",
        "latitude": 12.9716,
        "longitude": 77.5946,
        "location": "Community kitchen, 4th block",
        "expiry_time": expiry.to_rfc3339(),
    })
}

/// Publish a listing through the API and return its id.
pub async fn seed_listing(app: &Router, donor_id: i64) -> i64 {
    let response = post_json(
        app.clone(),
        &format!("/api/v1/listings?donorId={donor_id}"),
        listing_body(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a PENDING claim through the API and return its id.
pub async fn seed_claim(app: &Router, listing_id: i64, claimant_id: i64) -> i64 {
    let response = post_json(
        app.clone(),
        &format!("/api/v1/claims?listingId={listing_id}&claimantId={claimant_id}"),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
