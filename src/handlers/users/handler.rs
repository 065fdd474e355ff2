//! User account handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::UserService,
    state::AppState,
};

use super::{
    request::{CreateUserRequest, UpdateUserRequest},
    response::{DeletedResponse, UserResponse},
};

/// List all accounts
pub async fn list_users(
    State(state): State<AppState>,
    AuthenticatedUser(requester): AuthenticatedUser,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserService::list_users(state.store(), &requester).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create an account
pub async fn create_user(
    State(state): State<AppState>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    payload.validate()?;

    let user = UserService::create_user(state.store(), &requester, payload).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Get an account
pub async fn get_user(
    State(state): State<AppState>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    let user = UserService::get_user(state.store(), &id, &requester).await?;
    Ok(Json(user.into()))
}

/// Update an account
pub async fn update_user(
    State(state): State<AppState>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    payload.validate()?;

    let user = UserService::update_user(state.store(), &id, &requester, payload).await?;
    Ok(Json(user.into()))
}

/// Delete an account
pub async fn delete_user(
    State(state): State<AppState>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeletedResponse>> {
    UserService::delete_user(state.store(), &id, &requester).await?;
    Ok(Json(DeletedResponse { success: true }))
}
