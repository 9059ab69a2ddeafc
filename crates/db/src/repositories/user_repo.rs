//! Repository for the `users` table.
//!
//! Reputation updates are atomic SQL increments, never read-modify-write
//! from an application-side copy; they take any executor so the
//! coordinator can run them inside its completing transaction.

use mealbridge_core::status::UserRole;
use mealbridge_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list for `users` queries.
pub(crate) const COLUMNS: &str = "\
    id, email, name, phone, address, role_id, impact_score, \
    total_donations, total_claims, is_active, created_at, updated_at";

/// Provides CRUD and reputation operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with zeroed reputation counters.
    pub async fn create(
        pool: &PgPool,
        role: UserRole,
        input: &CreateUser,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, name, phone, address, role_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(role.id())
            .fetch_one(pool)
            .await
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial profile edit. Only non-`None` fields in `input`
    /// are applied; `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                address = COALESCE($4, address),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }

    /// Atomically bump a donor's completed-donation counter.
    pub async fn increment_donations<'e>(
        executor: impl PgExecutor<'e>,
        user_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET total_donations = total_donations + 1, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(user_id)
        .execute(executor)
        .await?;
        Ok(())
    }

    /// Atomically bump a claimant's completed-claim counter.
    pub async fn increment_claims<'e>(
        executor: impl PgExecutor<'e>,
        user_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET total_claims = total_claims + 1, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(user_id)
        .execute(executor)
        .await?;
        Ok(())
    }

    /// Atomically adjust a user's impact score by `delta`.
    pub async fn adjust_impact_score<'e>(
        executor: impl PgExecutor<'e>,
        user_id: DbId,
        delta: f64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET impact_score = impact_score + $2, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(user_id)
        .bind(delta)
        .execute(executor)
        .await?;
        Ok(())
    }
}
