//! Court handler implementations

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
    models::Court,
    services::CourtService,
    state::AppState,
};

use super::{
    request::{CreateCourtRequest, UpdateCourtRequest},
    response::DeletedResponse,
};

/// List all courts
pub async fn list_courts(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> AppResult<Json<Vec<Court>>> {
    let courts = CourtService::list_courts(state.store()).await?;
    Ok(Json(courts))
}

/// Create a court
pub async fn create_court(
    State(state): State<AppState>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Json(payload): Json<CreateCourtRequest>,
) -> AppResult<(StatusCode, Json<Court>)> {
    payload.validate()?;

    let court = CourtService::create_court(state.store(), &requester, payload).await?;
    Ok((StatusCode::CREATED, Json(court)))
}

/// Get a court
pub async fn get_court(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Court>> {
    let court = CourtService::get_court(state.store(), &id).await?;
    Ok(Json(court))
}

/// Update a court
pub async fn update_court(
    State(state): State<AppState>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCourtRequest>,
) -> AppResult<Json<Court>> {
    payload.validate()?;

    let court = CourtService::update_court(state.store(), &id, &requester, payload).await?;
    Ok(Json(court))
}

/// Delete a court
pub async fn delete_court(
    State(state): State<AppState>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeletedResponse>> {
    CourtService::delete_court(state.store(), &id, &requester).await?;
    Ok(Json(DeletedResponse { success: true }))
}
