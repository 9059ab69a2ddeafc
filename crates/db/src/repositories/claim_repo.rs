//! Read-side repository for the `claims` table.
//!
//! All claim writes go through the lifecycle coordinator; this repo only
//! serves the query facade.

use mealbridge_core::status::ClaimStatus;
use mealbridge_core::types::DbId;
use sqlx::PgPool;

use crate::models::claim::Claim;

/// Column list for `claims` queries.
pub(crate) const COLUMNS: &str = "\
    id, listing_id, claimant_id, status_id, notes, \
    claimed_at, completed_at, created_at, updated_at";

/// Provides read operations for claims.
pub struct ClaimRepo;

impl ClaimRepo {
    /// Find a claim by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Claim>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM claims WHERE id = $1");
        sqlx::query_as::<_, Claim>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a claimant's claims, newest first.
    pub async fn list_by_claimant(
        pool: &PgPool,
        claimant_id: DbId,
    ) -> Result<Vec<Claim>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM claims
             WHERE claimant_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Claim>(&query)
            .bind(claimant_id)
            .fetch_all(pool)
            .await
    }

    /// List all claims against a listing, oldest first (reservation
    /// queue order).
    pub async fn list_by_listing(
        pool: &PgPool,
        listing_id: DbId,
    ) -> Result<Vec<Claim>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM claims
             WHERE listing_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Claim>(&query)
            .bind(listing_id)
            .fetch_all(pool)
            .await
    }

    /// List claims in a given status, newest first.
    pub async fn list_by_status(
        pool: &PgPool,
        status: ClaimStatus,
    ) -> Result<Vec<Claim>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM claims
             WHERE status_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Claim>(&query)
            .bind(status.id())
            .fetch_all(pool)
            .await
    }
}
