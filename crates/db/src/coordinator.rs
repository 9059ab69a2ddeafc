//! Lifecycle coordinator for listings and claims.
//!
//! Owns every status transition on both entities and keeps them mutually
//! consistent: a listing must never be double-claimed, a claim must not
//! outlive its listing, and reputation counters must reflect exactly the
//! completed transactions.
//!
//! Every transition that touches more than one row runs inside a single
//! Postgres transaction. Racing approvals on one listing are serialized
//! by a `FOR UPDATE` lock on the claim row plus a status-guarded `UPDATE`
//! on the listing row: the second transaction blocks on the listing row,
//! re-evaluates the guard after the first commits, matches zero rows and
//! surfaces a `Conflict`. Nothing is ever retried internally.

use mealbridge_core::error::CoreError;
use mealbridge_core::lifecycle::{
    claim_transition_allowed, listing_transition_allowed, COMPLETION_IMPACT_DELTA,
};
use mealbridge_core::status::{ClaimStatus, ListingStatus};
use mealbridge_core::types::DbId;
use sqlx::PgPool;

use crate::models::claim::{Claim, CreateClaimParams};
use crate::models::listing::Listing;
use crate::repositories::{claim_repo, listing_repo, ListingRepo, UserRepo};

/// Error type for coordinator operations: either a domain rule was
/// violated or the store itself failed.
#[derive(Debug, thiserror::Error)]
pub enum CoordinatorError {
    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

/// Convenience alias for coordinator return values.
pub type CoordResult<T> = Result<T, CoordinatorError>;

/// Stateless entry point for all lifecycle transitions.
pub struct LifecycleCoordinator;

impl LifecycleCoordinator {
    /// Create a PENDING claim against an AVAILABLE listing.
    ///
    /// The listing is left untouched: multiple concurrent PENDING claims
    /// form a reservation queue and are serialized at approval time.
    pub async fn create_claim(pool: &PgPool, params: &CreateClaimParams) -> CoordResult<Claim> {
        let listing = ListingRepo::find_by_id(pool, params.listing_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Listing",
                id: params.listing_id,
            })?;

        UserRepo::find_by_id(pool, params.claimant_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "User",
                id: params.claimant_id,
            })?;

        if listing_status(&listing)? != ListingStatus::Available {
            return Err(CoreError::Conflict(format!(
                "Listing {} is not AVAILABLE and cannot be claimed",
                listing.id
            ))
            .into());
        }

        let query = format!(
            "INSERT INTO claims (listing_id, claimant_id, status_id, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {columns}",
            columns = claim_repo::COLUMNS
        );
        let claim = sqlx::query_as::<_, Claim>(&query)
            .bind(params.listing_id)
            .bind(params.claimant_id)
            .bind(ClaimStatus::Pending.id())
            .bind(&params.notes)
            .fetch_one(pool)
            .await?;

        tracing::info!(
            claim_id = claim.id,
            listing_id = claim.listing_id,
            claimant_id = claim.claimant_id,
            "Claim created",
        );
        Ok(claim)
    }

    /// Approve a PENDING claim, flipping its listing AVAILABLE -> CLAIMED
    /// in the same transaction.
    ///
    /// Of two concurrent approvals on competing claims for one listing,
    /// exactly one commits; the loser gets `Conflict`. Other PENDING
    /// claims on the listing stay PENDING (their later approval attempts
    /// fail the same guard); auto-rejecting them is a cleanup job's
    /// business, not ours.
    pub async fn approve_claim(pool: &PgPool, claim_id: DbId) -> CoordResult<Claim> {
        let mut tx = pool.begin().await?;

        let claim = lock_claim(&mut tx, claim_id).await?;
        if claim_status(&claim)? != ClaimStatus::Pending {
            return Err(CoreError::Conflict(format!(
                "Claim {claim_id} is not PENDING and cannot be approved"
            ))
            .into());
        }

        // Status guard: zero rows means a competing approval got there
        // first (or an admin moved the listing), so this approval loses.
        let flipped = sqlx::query(
            "UPDATE food_listings SET status_id = $2, updated_at = NOW()
             WHERE id = $1 AND status_id = $3",
        )
        .bind(claim.listing_id)
        .bind(ListingStatus::Claimed.id())
        .bind(ListingStatus::Available.id())
        .execute(&mut *tx)
        .await?;

        if flipped.rows_affected() == 0 {
            return Err(CoreError::Conflict(format!(
                "Listing {} is not AVAILABLE; claim {claim_id} cannot be approved",
                claim.listing_id
            ))
            .into());
        }

        let query = format!(
            "UPDATE claims SET status_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {columns}",
            columns = claim_repo::COLUMNS
        );
        let claim = sqlx::query_as::<_, Claim>(&query)
            .bind(claim_id)
            .bind(ClaimStatus::Approved.id())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            claim_id,
            listing_id = claim.listing_id,
            "Claim approved, listing claimed",
        );
        Ok(claim)
    }

    /// Complete an APPROVED claim and credit both parties' reputation in
    /// the same transaction.
    ///
    /// Completing an already-COMPLETED claim fails with `Conflict`, so a
    /// retried completion can never double-increment the counters.
    pub async fn complete_claim(pool: &PgPool, claim_id: DbId) -> CoordResult<Claim> {
        let mut tx = pool.begin().await?;

        let claim = lock_claim(&mut tx, claim_id).await?;
        if claim_status(&claim)? != ClaimStatus::Approved {
            return Err(CoreError::Conflict(format!(
                "Claim {claim_id} is not APPROVED and cannot be completed"
            ))
            .into());
        }

        let query = format!(
            "UPDATE claims
             SET status_id = $2, completed_at = NOW(), updated_at = NOW()
             WHERE id = $1
             RETURNING {columns}",
            columns = claim_repo::COLUMNS
        );
        let claim = sqlx::query_as::<_, Claim>(&query)
            .bind(claim_id)
            .bind(ClaimStatus::Completed.id())
            .fetch_one(&mut *tx)
            .await?;

        let (donor_id,): (DbId,) =
            sqlx::query_as("SELECT donor_id FROM food_listings WHERE id = $1")
                .bind(claim.listing_id)
                .fetch_one(&mut *tx)
                .await?;

        UserRepo::increment_donations(&mut *tx, donor_id).await?;
        UserRepo::increment_claims(&mut *tx, claim.claimant_id).await?;
        UserRepo::adjust_impact_score(&mut *tx, donor_id, COMPLETION_IMPACT_DELTA).await?;
        UserRepo::adjust_impact_score(&mut *tx, claim.claimant_id, COMPLETION_IMPACT_DELTA)
            .await?;

        tx.commit().await?;

        tracing::info!(
            claim_id,
            listing_id = claim.listing_id,
            donor_id,
            claimant_id = claim.claimant_id,
            "Claim completed, reputation credited",
        );
        Ok(claim)
    }

    /// Reject a PENDING claim. Terminal; the listing is untouched.
    pub async fn reject_claim(pool: &PgPool, claim_id: DbId) -> CoordResult<Claim> {
        Self::terminate_claim(pool, claim_id, ClaimStatus::Rejected).await
    }

    /// Cancel a PENDING or APPROVED claim. Cancelling an APPROVED claim
    /// re-opens its listing (CLAIMED -> AVAILABLE) in the same
    /// transaction so it can be claimed again.
    pub async fn cancel_claim(pool: &PgPool, claim_id: DbId) -> CoordResult<Claim> {
        Self::terminate_claim(pool, claim_id, ClaimStatus::Cancelled).await
    }

    async fn terminate_claim(
        pool: &PgPool,
        claim_id: DbId,
        target: ClaimStatus,
    ) -> CoordResult<Claim> {
        let mut tx = pool.begin().await?;

        let claim = lock_claim(&mut tx, claim_id).await?;
        let from = claim_status(&claim)?;
        if !claim_transition_allowed(from, target) {
            return Err(CoreError::Conflict(format!(
                "Claim {claim_id} is {from} and cannot move to {target}"
            ))
            .into());
        }

        let query = format!(
            "UPDATE claims SET status_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {columns}",
            columns = claim_repo::COLUMNS
        );
        let claim = sqlx::query_as::<_, Claim>(&query)
            .bind(claim_id)
            .bind(target.id())
            .fetch_one(&mut *tx)
            .await?;

        // An approved claim held the listing; give it back. The guard
        // leaves terminal listings (an admin may have expired the
        // listing in the meantime) alone.
        if from == ClaimStatus::Approved {
            sqlx::query(
                "UPDATE food_listings SET status_id = $2, updated_at = NOW()
                 WHERE id = $1 AND status_id = $3",
            )
            .bind(claim.listing_id)
            .bind(ListingStatus::Available.id())
            .bind(ListingStatus::Claimed.id())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            claim_id,
            listing_id = claim.listing_id,
            status = %target,
            "Claim terminated",
        );
        Ok(claim)
    }

    /// Administrative listing status update, validated against the
    /// listing state machine.
    ///
    /// CLAIMED is rejected outright on this path: it is reachable only
    /// through claim approval, which protects the single-approved-claim
    /// invariant.
    pub async fn update_listing_status(
        pool: &PgPool,
        listing_id: DbId,
        target: ListingStatus,
    ) -> CoordResult<Listing> {
        if target == ListingStatus::Claimed {
            return Err(CoreError::Validation(
                "CLAIMED can only be reached by approving a claim".into(),
            )
            .into());
        }

        let mut tx = pool.begin().await?;

        let listing = lock_listing(&mut tx, listing_id).await?;
        let from = listing_status(&listing)?;
        if !listing_transition_allowed(from, target) {
            return Err(CoreError::Conflict(format!(
                "Listing {listing_id} is {from} and cannot move to {target}"
            ))
            .into());
        }

        let query = format!(
            "UPDATE food_listings SET status_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {columns}",
            columns = listing_repo::COLUMNS
        );
        let listing = sqlx::query_as::<_, Listing>(&query)
            .bind(listing_id)
            .bind(target.id())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(listing_id, status = %target, "Listing status updated");
        Ok(listing)
    }

    /// Delete a listing outright.
    ///
    /// Claims are audit records and are never deleted, so a listing any
    /// claim still references cannot go away; the FK RESTRICT violation
    /// surfaces as a `Conflict`.
    pub async fn delete_listing(pool: &PgPool, listing_id: DbId) -> CoordResult<()> {
        let result = sqlx::query("DELETE FROM food_listings WHERE id = $1")
            .bind(listing_id)
            .execute(pool)
            .await;

        match result {
            Ok(done) if done.rows_affected() == 0 => Err(CoreError::NotFound {
                entity: "Listing",
                id: listing_id,
            }
            .into()),
            Ok(_) => {
                tracing::info!(listing_id, "Listing deleted");
                Ok(())
            }
            Err(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some("23503") =>
            {
                Err(CoreError::Conflict(format!(
                    "Listing {listing_id} has claims and cannot be deleted"
                ))
                .into())
            }
            Err(other) => Err(other.into()),
        }
    }
}

/// Fetch a claim and lock its row for the rest of the transaction.
async fn lock_claim(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    claim_id: DbId,
) -> CoordResult<Claim> {
    let query = format!(
        "SELECT {columns} FROM claims WHERE id = $1 FOR UPDATE",
        columns = claim_repo::COLUMNS
    );
    sqlx::query_as::<_, Claim>(&query)
        .bind(claim_id)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "Claim",
                id: claim_id,
            }
            .into()
        })
}

/// Fetch a listing and lock its row for the rest of the transaction.
async fn lock_listing(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    listing_id: DbId,
) -> CoordResult<Listing> {
    let query = format!(
        "SELECT {columns} FROM food_listings WHERE id = $1 FOR UPDATE",
        columns = listing_repo::COLUMNS
    );
    sqlx::query_as::<_, Listing>(&query)
        .bind(listing_id)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "Listing",
                id: listing_id,
            }
            .into()
        })
}

fn claim_status(claim: &Claim) -> Result<ClaimStatus, CoordinatorError> {
    ClaimStatus::from_id(claim.status_id).ok_or_else(|| {
        CoreError::Internal(format!(
            "Claim {} has unknown status id {}",
            claim.id, claim.status_id
        ))
        .into()
    })
}

fn listing_status(listing: &Listing) -> Result<ListingStatus, CoordinatorError> {
    ListingStatus::from_id(listing.status_id).ok_or_else(|| {
        CoreError::Internal(format!(
            "Listing {} has unknown status id {}",
            listing.id, listing.status_id
        ))
        .into()
    })
}
