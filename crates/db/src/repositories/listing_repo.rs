//! Repository for the `food_listings` table.
//!
//! Status transitions are deliberately absent here: they belong to the
//! lifecycle coordinator, which guards them transactionally.

use mealbridge_core::status::{FoodCategory, ListingStatus};
use mealbridge_core::types::DbId;
use sqlx::PgPool;

use crate::models::listing::{CreateListing, Listing, UpdateListing};

/// Column list for `food_listings` queries.
pub(crate) const COLUMNS: &str = "\
    id, donor_id, food_type, quantity, unit, category_id, description, \
    latitude, longitude, location, status_id, expiry_time, \
    created_at, updated_at";

/// Provides CRUD operations for food listings.
pub struct ListingRepo;

impl ListingRepo {
    /// Insert a new listing for `donor_id`. New listings always start
    /// AVAILABLE.
    pub async fn create(
        pool: &PgPool,
        donor_id: DbId,
        category: FoodCategory,
        input: &CreateListing,
    ) -> Result<Listing, sqlx::Error> {
        let query = format!(
            "INSERT INTO food_listings
                (donor_id, food_type, quantity, unit, category_id, description,
                 latitude, longitude, location, status_id, expiry_time)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(donor_id)
            .bind(&input.food_type)
            .bind(input.quantity)
            .bind(&input.unit)
            .bind(category.id())
            .bind(&input.description)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.location)
            .bind(ListingStatus::Available.id())
            .bind(input.expiry_time)
            .fetch_one(pool)
            .await
    }

    /// Find a listing by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Listing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM food_listings WHERE id = $1");
        sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List AVAILABLE listings, newest first.
    pub async fn list_available(pool: &PgPool) -> Result<Vec<Listing>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM food_listings
             WHERE status_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(ListingStatus::Available.id())
            .fetch_all(pool)
            .await
    }

    /// List a donor's listings, newest first.
    pub async fn list_by_donor(pool: &PgPool, donor_id: DbId) -> Result<Vec<Listing>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM food_listings
             WHERE donor_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(donor_id)
            .fetch_all(pool)
            .await
    }

    /// List listings with optional status and category filters, newest
    /// first.
    pub async fn list(
        pool: &PgPool,
        status: Option<ListingStatus>,
        category: Option<FoodCategory>,
    ) -> Result<Vec<Listing>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM food_listings
             WHERE ($1::smallint IS NULL OR status_id = $1)
               AND ($2::smallint IS NULL OR category_id = $2)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(status.map(|s| s.id()))
            .bind(category.map(|c| c.id()))
            .fetch_all(pool)
            .await
    }

    /// Apply a partial content edit. Only non-`None` fields in `input`
    /// are applied; `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        category: Option<FoodCategory>,
        input: &UpdateListing,
    ) -> Result<Option<Listing>, sqlx::Error> {
        let query = format!(
            "UPDATE food_listings SET
                food_type = COALESCE($2, food_type),
                quantity = COALESCE($3, quantity),
                unit = COALESCE($4, unit),
                category_id = COALESCE($5, category_id),
                description = COALESCE($6, description),
                latitude = COALESCE($7, latitude),
                longitude = COALESCE($8, longitude),
                location = COALESCE($9, location),
                expiry_time = COALESCE($10, expiry_time),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .bind(&input.food_type)
            .bind(input.quantity)
            .bind(&input.unit)
            .bind(category.map(|c| c.id()))
            .bind(&input.description)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.location)
            .bind(input.expiry_time)
            .fetch_optional(pool)
            .await
    }
}
