//! Claim entity models and DTOs.

use mealbridge_core::status::StatusId;
use mealbridge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `claims` table.
///
/// `listing_id` and `claimant_id` are immutable after insert; `status_id`
/// is owned by the lifecycle coordinator.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Claim {
    pub id: DbId,
    pub listing_id: DbId,
    pub claimant_id: DbId,
    pub status_id: StatusId,
    pub notes: Option<String>,
    pub claimed_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Query parameters for `POST /api/v1/claims`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimParams {
    pub listing_id: DbId,
    pub claimant_id: DbId,
    pub notes: Option<String>,
}
