//! Handlers for the `/users` resource.
//!
//! Profile and reputation fields only; credentials live elsewhere.
//! Reputation counters are written exclusively by the lifecycle
//! coordinator on claim completion.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mealbridge_core::error::CoreError;
use mealbridge_core::status::UserRole;
use mealbridge_core::types::DbId;
use mealbridge_db::models::user::{CreateUser, UpdateUser};
use mealbridge_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/users
///
/// Register a user with zeroed reputation counters. 400 on an unknown
/// role value, 409 on a duplicate email or phone.
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    let role: UserRole = input.role.parse().map_err(AppError::Core)?;
    let user = UserRepo::create(&state.pool, role, &input).await?;

    tracing::info!(user_id = user.id, role = %role, "User registered");

    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;
    Ok(Json(DataResponse { data: user }))
}

/// PUT /api/v1/users/{id}
///
/// Partial profile edit: only fields present in the body are applied.
/// 404 on a missing user.
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::update(&state.pool, user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;
    Ok(Json(DataResponse { data: user }))
}
