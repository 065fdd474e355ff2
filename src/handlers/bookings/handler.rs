//! Booking handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::Booking,
    services::BookingService,
    state::AppState,
};

use super::{
    request::{CreateBookingRequest, ListBookingsQuery, UpdateBookingRequest},
    response::DeletedResponse,
};

/// List bookings visible to the requester
pub async fn list_bookings(
    State(state): State<AppState>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Query(query): Query<ListBookingsQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings =
        BookingService::list_bookings(state.store(), &requester, query.user_id, query.court_id)
            .await?;
    Ok(Json(bookings))
}

/// Create a booking
pub async fn create_booking(
    State(state): State<AppState>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    payload.validate()?;

    let booking = BookingService::create_booking(state.store(), &requester, payload).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Get a booking
pub async fn get_booking(
    State(state): State<AppState>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Booking>> {
    let booking = BookingService::get_booking(state.store(), &id, &requester).await?;
    Ok(Json(booking))
}

/// Update a booking
pub async fn update_booking(
    State(state): State<AppState>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBookingRequest>,
) -> AppResult<Json<Booking>> {
    payload.validate()?;

    let booking = BookingService::update_booking(state.store(), &id, &requester, payload).await?;
    Ok(Json(booking))
}

/// Delete a booking
pub async fn delete_booking(
    State(state): State<AppState>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeletedResponse>> {
    BookingService::delete_booking(state.store(), &id, &requester).await?;
    Ok(Json(DeletedResponse { success: true }))
}
