//! Route definitions for the `/listings` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::listings;
use crate::state::AppState;

/// Routes mounted at `/listings`.
///
/// ```text
/// GET    /                -> list_listings
/// POST   /                -> create_listing
/// GET    /available       -> list_available
/// GET    /donor/{id}      -> list_by_donor
/// GET    /{id}            -> get_listing
/// PUT    /{id}            -> update_listing
/// DELETE /{id}            -> delete_listing
/// PUT    /{id}/status     -> update_listing_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(listings::list_listings).post(listings::create_listing),
        )
        .route("/available", get(listings::list_available))
        .route("/donor/{id}", get(listings::list_by_donor))
        .route(
            "/{id}",
            get(listings::get_listing)
                .put(listings::update_listing)
                .delete(listings::delete_listing),
        )
        .route("/{id}/status", put(listings::update_listing_status))
}
