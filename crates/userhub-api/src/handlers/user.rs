//! `/users` resource handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use userhub_entity::user::User;

use crate::dto::{ApiResponse, CreateUserRequest, UpdateUserRequest};
use crate::error::ApiError;
use crate::extractors::{JsonBody, UserIdPath};
use crate::state::AppState;

type UserResponse = Json<ApiResponse<User>>;

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(ApiResponse::success(
        "User retrieved successfully",
        users,
    )))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<UserResponse, ApiError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(ApiResponse::success("User retrieved successfully", user)))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, UserResponse), ApiError> {
    let user = state.user_service.create_user(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("User created successfully", user)),
    ))
}

/// PUT /users/{id}, PATCH /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
    JsonBody(req): JsonBody<UpdateUserRequest>,
) -> Result<UserResponse, ApiError> {
    let user = state.user_service.update_user(id, req).await?;
    Ok(Json(ApiResponse::success("User updated successfully", user)))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<UserResponse, ApiError> {
    let user = state.user_service.delete_user(id).await?;
    Ok(Json(ApiResponse::success("User deleted successfully", user)))
}
