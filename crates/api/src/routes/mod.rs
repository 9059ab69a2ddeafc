pub mod claims;
pub mod health;
pub mod listings;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /listings                    list (filtered), create
/// /listings/available          available listings, newest first
/// /listings/donor/{id}         a donor's listings
/// /listings/{id}               get, partial update, delete
/// /listings/{id}/status        administrative status transition (PUT)
///
/// /claims                      create (PENDING)
/// /claims/{id}                 get
/// /claims/{id}/approve         PENDING -> APPROVED, listing -> CLAIMED
/// /claims/{id}/complete        APPROVED -> COMPLETED + reputation
/// /claims/{id}/reject          PENDING -> REJECTED
/// /claims/{id}/cancel          PENDING/APPROVED -> CANCELLED
/// /claims/claimant/{id}        a claimant's claims
/// /claims/listing/{id}         claims against a listing
///
/// /users                       create
/// /users/{id}                  get, partial profile update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/listings", listings::router())
        .nest("/claims", claims::router())
        .nest("/users", users::router())
}
