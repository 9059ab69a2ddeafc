//! Food listing entity models and DTOs.

use mealbridge_core::status::StatusId;
use mealbridge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `food_listings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Listing {
    pub id: DbId,
    pub donor_id: DbId,
    pub food_type: String,
    pub quantity: i32,
    pub unit: String,
    pub category_id: StatusId,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub location: String,
    pub status_id: StatusId,
    pub expiry_time: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for publishing a new listing via `POST /api/v1/listings`.
///
/// `category` carries the API spelling (e.g. `BAKERY`); the handler
/// validates it against [`mealbridge_core::status::FoodCategory`] before
/// anything touches the database.
#[derive(Debug, Deserialize)]
pub struct CreateListing {
    pub food_type: String,
    pub quantity: i32,
    pub unit: String,
    pub category: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub location: String,
    pub expiry_time: Timestamp,
}

/// DTO for partial content edits via `PUT /api/v1/listings/{id}`.
///
/// Only non-`None` fields are applied; the listing's status is not
/// editable here (that is the coordinator's job).
#[derive(Debug, Deserialize)]
pub struct UpdateListing {
    pub food_type: Option<String>,
    pub quantity: Option<i32>,
    pub unit: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location: Option<String>,
    pub expiry_time: Option<Timestamp>,
}

/// Query parameters for `GET /api/v1/listings`.
#[derive(Debug, Deserialize)]
pub struct ListingListQuery {
    /// Filter by status (API spelling, e.g. `AVAILABLE`).
    pub status: Option<String>,
    /// Filter by category (API spelling, e.g. `BAKERY`).
    pub category: Option<String>,
}
