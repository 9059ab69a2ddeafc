//! Integration tests for the `/api/v1/listings` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, listing_body, post_json, put, put_json, seed_listing, seed_user};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_listing_returns_201_available(pool: PgPool) {
    let app = common::build_test_app(pool);
    let donor_id = seed_user(&app, "donor@example.org", "DONOR").await;

    let response = post_json(
        app.clone(),
        &format!("/api/v1/listings?donorId={donor_id}"),
        listing_body(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["donor_id"], donor_id);
    assert_eq!(json["data"]["food_type"], "Vegetable biryani");
    assert_eq!(json["data"]["status_id"], 1); // AVAILABLE
    assert_eq!(json["data"]["category_id"], 1); // COOKED_MEALS
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_listing_with_unknown_category_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let donor_id = seed_user(&app, "donor@example.org", "DONOR").await;

    let mut body = listing_body();
    body["category"] = serde_json::json!("NOT_A_CATEGORY");

    let response = post_json(
        app.clone(),
        &format!("/api/v1/listings?donorId={donor_id}"),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_listing_for_missing_donor_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/listings?donorId=999999", listing_body()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_listing_by_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let donor_id = seed_user(&app, "donor@example.org", "DONOR").await;
    let listing_id = seed_listing(&app, donor_id).await;

    let response = get(app.clone(), &format!("/api/v1/listings/{listing_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], listing_id);

    // Missing id -> 404, malformed id -> 400 (path rejection).
    let response = get(app.clone(), "/api/v1/listings/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, "/api/v1/listings/not-a-number").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_listings_with_filters(pool: PgPool) {
    let app = common::build_test_app(pool);
    let donor_id = seed_user(&app, "donor@example.org", "DONOR").await;
    seed_listing(&app, donor_id).await;
    let second = seed_listing(&app, donor_id).await;

    let response = get(app.clone(), "/api/v1/listings").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // Expire one; AVAILABLE filter drops it.
    let response = put(
        app.clone(),
        &format!("/api/v1/listings/{second}/status?status=EXPIRED"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app.clone(), "/api/v1/listings?status=AVAILABLE").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let response = get(app.clone(), "/api/v1/listings/available").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let response = get(app.clone(), "/api/v1/listings?category=BAKERY").await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    // Unknown filter value -> 400, never an empty 200.
    let response = get(app, "/api/v1/listings?status=BOGUS").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_listings_by_donor(pool: PgPool) {
    let app = common::build_test_app(pool);
    let donor_a = seed_user(&app, "a@example.org", "DONOR").await;
    let donor_b = seed_user(&app, "b@example.org", "DONOR").await;
    seed_listing(&app, donor_a).await;
    seed_listing(&app, donor_a).await;
    seed_listing(&app, donor_b).await;

    let response = get(app, &format!("/api/v1/listings/donor/{donor_a}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Content edit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_listing_applies_partial_edit(pool: PgPool) {
    let app = common::build_test_app(pool);
    let donor_id = seed_user(&app, "donor@example.org", "DONOR").await;
    let listing_id = seed_listing(&app, donor_id).await;

    let response = put_json(
        app.clone(),
        &format!("/api/v1/listings/{listing_id}"),
        serde_json::json!({ "quantity": 5, "category": "BAKERY" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["quantity"], 5);
    assert_eq!(json["data"]["category_id"], 3); // BAKERY
    // Untouched fields survive the merge.
    assert_eq!(json["data"]["food_type"], "Vegetable biryani");

    let response = put_json(
        app,
        "/api/v1/listings/999999",
        serde_json::json!({ "quantity": 5 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_update_enforces_the_machine(pool: PgPool) {
    let app = common::build_test_app(pool);
    let donor_id = seed_user(&app, "donor@example.org", "DONOR").await;
    let listing_id = seed_listing(&app, donor_id).await;

    // CLAIMED is only reachable through claim approval.
    let response = put(
        app.clone(),
        &format!("/api/v1/listings/{listing_id}/status?status=CLAIMED"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put(
        app.clone(),
        &format!("/api/v1/listings/{listing_id}/status?status=BOGUS"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put(
        app.clone(),
        &format!("/api/v1/listings/{listing_id}/status?status=CANCELLED"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status_id"], 4); // CANCELLED

    // Terminal states admit nothing.
    let response = put(
        app.clone(),
        &format!("/api/v1/listings/{listing_id}/status?status=EXPIRED"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");

    let response = put(app, "/api/v1/listings/999999/status?status=EXPIRED").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_listing_paths(pool: PgPool) {
    let app = common::build_test_app(pool);
    let donor_id = seed_user(&app, "donor@example.org", "DONOR").await;
    let recipient_id = seed_user(&app, "recipient@example.org", "RECIPIENT").await;

    // Claim-free listing deletes with 204, then 404s.
    let listing_id = seed_listing(&app, donor_id).await;
    let response = delete(app.clone(), &format!("/api/v1/listings/{listing_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &format!("/api/v1/listings/{listing_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app.clone(), &format!("/api/v1/listings/{listing_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A listing with claim history is an audit anchor and cannot go away.
    let listing_id = seed_listing(&app, donor_id).await;
    common::seed_claim(&app, listing_id, recipient_id).await;

    let response = delete(app.clone(), &format!("/api/v1/listings/{listing_id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = get(app, &format!("/api/v1/listings/{listing_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
