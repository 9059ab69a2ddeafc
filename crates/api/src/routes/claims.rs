//! Route definitions for the `/claims` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::claims;
use crate::state::AppState;

/// Routes mounted at `/claims`.
///
/// ```text
/// POST   /                 -> create_claim
/// GET    /{id}             -> get_claim
/// PUT    /{id}/approve     -> approve_claim
/// PUT    /{id}/complete    -> complete_claim
/// PUT    /{id}/reject      -> reject_claim
/// PUT    /{id}/cancel      -> cancel_claim
/// GET    /claimant/{id}    -> list_by_claimant
/// GET    /listing/{id}     -> list_by_listing
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(claims::create_claim))
        .route("/{id}", get(claims::get_claim))
        .route("/{id}/approve", put(claims::approve_claim))
        .route("/{id}/complete", put(claims::complete_claim))
        .route("/{id}/reject", put(claims::reject_claim))
        .route("/{id}/cancel", put(claims::cancel_claim))
        .route("/claimant/{id}", get(claims::list_by_claimant))
        .route("/listing/{id}", get(claims::list_by_listing))
}
