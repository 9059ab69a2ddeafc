//! Handlers for the `/listings` resource.
//!
//! Content edits are plain repository merges; status changes and deletes
//! go through the lifecycle coordinator.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mealbridge_core::error::CoreError;
use mealbridge_core::status::{FoodCategory, ListingStatus};
use mealbridge_core::types::DbId;
use mealbridge_db::coordinator::LifecycleCoordinator;
use mealbridge_db::models::listing::{CreateListing, ListingListQuery, UpdateListing};
use mealbridge_db::repositories::{ListingRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameter for `POST /api/v1/listings`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorParam {
    pub donor_id: DbId,
}

/// Query parameter for `PUT /api/v1/listings/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct StatusParam {
    pub status: String,
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// POST /api/v1/listings?donorId=
///
/// Publish a new listing for a donor. New listings start AVAILABLE.
/// Returns 201, 404 if the donor does not exist, 400 on an unknown
/// category value.
pub async fn create_listing(
    State(state): State<AppState>,
    Query(donor): Query<DonorParam>,
    Json(input): Json<CreateListing>,
) -> AppResult<impl IntoResponse> {
    let category: FoodCategory = input.category.parse().map_err(AppError::Core)?;

    UserRepo::find_by_id(&state.pool, donor.donor_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: donor.donor_id,
        }))?;

    let listing = ListingRepo::create(&state.pool, donor.donor_id, category, &input).await?;

    tracing::info!(
        listing_id = listing.id,
        donor_id = donor.donor_id,
        "Listing published",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: listing })))
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// GET /api/v1/listings
///
/// List listings with optional `status` and `category` filters (API
/// spellings). 400 on an unknown filter value.
pub async fn list_listings(
    State(state): State<AppState>,
    Query(params): Query<ListingListQuery>,
) -> AppResult<impl IntoResponse> {
    let status: Option<ListingStatus> = params
        .status
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(AppError::Core)?;
    let category: Option<FoodCategory> = params
        .category
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(AppError::Core)?;

    let listings = ListingRepo::list(&state.pool, status, category).await?;
    Ok(Json(DataResponse { data: listings }))
}

/// GET /api/v1/listings/available
pub async fn list_available(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let listings = ListingRepo::list_available(&state.pool).await?;
    Ok(Json(DataResponse { data: listings }))
}

/// GET /api/v1/listings/donor/{id}
pub async fn list_by_donor(
    State(state): State<AppState>,
    Path(donor_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let listings = ListingRepo::list_by_donor(&state.pool, donor_id).await?;
    Ok(Json(DataResponse { data: listings }))
}

/// GET /api/v1/listings/{id}
pub async fn get_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let listing = ListingRepo::find_by_id(&state.pool, listing_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Listing",
            id: listing_id,
        }))?;
    Ok(Json(DataResponse { data: listing }))
}

// ---------------------------------------------------------------------------
// Content edit
// ---------------------------------------------------------------------------

/// PUT /api/v1/listings/{id}
///
/// Partial content edit: only fields present in the body are applied,
/// `updated_at` is always refreshed. Not a state transition. 404 on a
/// missing listing, 400 on an unknown category value.
pub async fn update_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<DbId>,
    Json(input): Json<UpdateListing>,
) -> AppResult<impl IntoResponse> {
    let category: Option<FoodCategory> = input
        .category
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(AppError::Core)?;

    let listing = ListingRepo::update(&state.pool, listing_id, category, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Listing",
            id: listing_id,
        }))?;
    Ok(Json(DataResponse { data: listing }))
}

// ---------------------------------------------------------------------------
// Status transitions / delete (coordinator paths)
// ---------------------------------------------------------------------------

/// PUT /api/v1/listings/{id}/status?status=ENUM
///
/// Administrative status transition. 400 on an unknown enum value or a
/// CLAIMED target (only approval may set CLAIMED), 404 on a missing
/// listing, 409 on an illegal transition. No partial write in any
/// failure case.
pub async fn update_listing_status(
    State(state): State<AppState>,
    Path(listing_id): Path<DbId>,
    Query(param): Query<StatusParam>,
) -> AppResult<impl IntoResponse> {
    let target: ListingStatus = param.status.parse().map_err(AppError::Core)?;
    let listing =
        LifecycleCoordinator::update_listing_status(&state.pool, listing_id, target).await?;
    Ok(Json(DataResponse { data: listing }))
}

/// DELETE /api/v1/listings/{id}
///
/// Returns 204, 404 if absent, 409 if any claim still references the
/// listing.
pub async fn delete_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    LifecycleCoordinator::delete_listing(&state.pool, listing_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
