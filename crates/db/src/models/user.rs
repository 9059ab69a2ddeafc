//! User entity models and DTOs.
//!
//! Only profile and reputation fields live here; credentials are an
//! external identity service's concern.

use mealbridge_core::status::StatusId;
use mealbridge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role_id: StatusId,
    pub impact_score: f64,
    pub total_donations: i32,
    pub total_claims: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a user via `POST /api/v1/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Role in API spelling (e.g. `DONOR`), validated at the boundary.
    pub role: String,
}

/// DTO for profile edits via `PUT /api/v1/users/{id}`.
///
/// Only non-`None` fields are applied. Reputation counters are never
/// editable through this path.
#[derive(Debug, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
