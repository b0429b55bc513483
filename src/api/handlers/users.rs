//! User CRUD handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use tracing::{info, instrument};

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::user::{CreateUserRequest, UpdateUserRequest, User};

/// Success envelope carrying a payload.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

/// Success envelope carrying only a confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// List all users.
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Json<DataResponse<Vec<User>>> {
    let users = state.users.list_users();
    info!(count = users.len(), "Listed users");
    Json(DataResponse {
        success: true,
        data: users,
    })
}

/// Get a specific user by id.
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DataResponse<User>>> {
    let id = parse_user_id(&id)?;
    let user = state.users.get_user(id)?;
    Ok(Json(DataResponse {
        success: true,
        data: user,
    }))
}

/// Create a new user.
#[instrument(skip(state, request))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<DataResponse<User>>)> {
    let user = state.users.create_user(request)?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            success: true,
            data: user,
        }),
    ))
}

/// Update an existing user.
#[instrument(skip(state, request))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<DataResponse<User>>> {
    let id = parse_user_id(&id)?;
    let user = state.users.update_user(id, request)?;
    Ok(Json(DataResponse {
        success: true,
        data: user,
    }))
}

/// Delete a user by id.
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_user_id(&id)?;
    state.users.delete_user(id)?;
    Ok(Json(MessageResponse {
        success: true,
        message: "User deleted successfully".to_string(),
    }))
}

/// Parse a path segment as a user id.
///
/// Values that are not positive integers cannot match any record, so they
/// surface as not found rather than a parse error.
fn parse_user_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>()
        .map_err(|_| ApiError::not_found("User not found"))
}
