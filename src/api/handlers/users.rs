//! User CRUD request handlers.
//!
//! Provides HTTP handlers for user account operations.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::api::dto::{UserRequest, UserResponse};
use crate::api::extract::JsonBody;
use crate::api::handlers::parse_id;
use crate::error::AppError;
use crate::state::AppState;

/// Creates user-related routes.
///
/// Routes:
/// - POST /user         - Create a user (also `/user/`)
/// - GET /user/{id}     - Get user by ID
/// - PUT /user/{id}     - Overwrite user by ID
/// - DELETE /user/{id}  - Delete user by ID
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(create_user))
        .route("/user/", post(create_user))
        .route(
            "/user/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// POST /user - Create new user
///
/// Returns 201 Created with the stored user data.
async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state
        .services
        .users
        .create_user(payload.to_new_user())
        .await?;
    tracing::info!(user_id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /user/{id} - Get user by ID
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_id(&id, "user")?;
    let user = state.services.users.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// PUT /user/{id} - Overwrite user
///
/// Echoes the request body whether or not a user with this id exists.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UserRequest>,
) -> Result<Json<UserRequest>, AppError> {
    let id = parse_id(&id, "user")?;
    state
        .services
        .users
        .update_user(id, payload.to_update_user())
        .await?;
    Ok(Json(payload))
}

/// DELETE /user/{id} - Delete user
///
/// Returns 204 No Content whether or not the user existed.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id, "user")?;
    state.services.users.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
