//! Handlers for the `/claims` resource.
//!
//! Claims move through the lifecycle coordinator only; no handler writes
//! a claim row directly.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mealbridge_core::error::CoreError;
use mealbridge_core::types::DbId;
use mealbridge_db::coordinator::LifecycleCoordinator;
use mealbridge_db::models::claim::CreateClaimParams;
use mealbridge_db::repositories::ClaimRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// POST /api/v1/claims?listingId=&claimantId=
///
/// Create a PENDING claim against an AVAILABLE listing. Returns 201 with
/// the claim, 404 if the listing or claimant does not exist, 409 if the
/// listing is not AVAILABLE.
pub async fn create_claim(
    State(state): State<AppState>,
    Query(params): Query<CreateClaimParams>,
) -> AppResult<impl IntoResponse> {
    let claim = LifecycleCoordinator::create_claim(&state.pool, &params).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: claim })))
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// PUT /api/v1/claims/{id}/approve
///
/// Approve a PENDING claim; its listing becomes CLAIMED in the same
/// atomic unit. 404 if absent, 409 if the claim is not PENDING or the
/// listing is no longer AVAILABLE (a competing claim won).
pub async fn approve_claim(
    State(state): State<AppState>,
    Path(claim_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let claim = LifecycleCoordinator::approve_claim(&state.pool, claim_id).await?;
    Ok(Json(DataResponse { data: claim }))
}

/// PUT /api/v1/claims/{id}/complete
///
/// Complete an APPROVED claim and credit donor/claimant reputation.
/// 404 if absent, 409 for any other status (so a retried completion
/// never double-counts).
pub async fn complete_claim(
    State(state): State<AppState>,
    Path(claim_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let claim = LifecycleCoordinator::complete_claim(&state.pool, claim_id).await?;
    Ok(Json(DataResponse { data: claim }))
}

/// PUT /api/v1/claims/{id}/reject
///
/// Reject a PENDING claim. 404 if absent, 409 if not PENDING.
pub async fn reject_claim(
    State(state): State<AppState>,
    Path(claim_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let claim = LifecycleCoordinator::reject_claim(&state.pool, claim_id).await?;
    Ok(Json(DataResponse { data: claim }))
}

/// PUT /api/v1/claims/{id}/cancel
///
/// Cancel a PENDING or APPROVED claim. Cancelling an APPROVED claim
/// re-opens its listing. 404 if absent, 409 if terminal.
pub async fn cancel_claim(
    State(state): State<AppState>,
    Path(claim_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let claim = LifecycleCoordinator::cancel_claim(&state.pool, claim_id).await?;
    Ok(Json(DataResponse { data: claim }))
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// GET /api/v1/claims/{id}
pub async fn get_claim(
    State(state): State<AppState>,
    Path(claim_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let claim = ClaimRepo::find_by_id(&state.pool, claim_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Claim",
            id: claim_id,
        }))?;
    Ok(Json(DataResponse { data: claim }))
}

/// GET /api/v1/claims/claimant/{id}
pub async fn list_by_claimant(
    State(state): State<AppState>,
    Path(claimant_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let claims = ClaimRepo::list_by_claimant(&state.pool, claimant_id).await?;
    Ok(Json(DataResponse { data: claims }))
}

/// GET /api/v1/claims/listing/{id}
pub async fn list_by_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let claims = ClaimRepo::list_by_listing(&state.pool, listing_id).await?;
    Ok(Json(DataResponse { data: claims }))
}
