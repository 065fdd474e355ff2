//! Booking service

use uuid::Uuid;

use crate::{
    constants::{MIN_BOOKING_HOURS, booking_status, payment_status},
    error::{AppError, AppResult},
    handlers::bookings::request::{CreateBookingRequest, UpdateBookingRequest},
    models::{Booking, BookingPatch, NewBooking, User},
    rbac,
    store::Store,
    utils::{booking_hours, time::parse_time, validation},
};

/// Booking service for business logic
pub struct BookingService;

impl BookingService {
    /// List bookings visible to the requester, optionally narrowed to a
    /// user or a court. Visibility follows the booking access rules: super
    /// admins see everything, field owners see bookings on their courts,
    /// regular users see their own.
    pub async fn list_bookings(
        store: &dyn Store,
        requester: &User,
        user_id: Option<Uuid>,
        court_id: Option<Uuid>,
    ) -> AppResult<Vec<Booking>> {
        let bookings = match (user_id, court_id) {
            (Some(user_id), _) => store.bookings_by_user(&user_id).await?,
            (None, Some(court_id)) => store.bookings_by_court(&court_id).await?,
            (None, None) => store.list_bookings().await?,
        };

        let courts = store.list_courts().await?;
        Ok(bookings
            .into_iter()
            .filter(|b| rbac::can_access_booking(Some(requester), Some(b), &courts))
            .collect())
    }

    /// Get booking by ID
    pub async fn get_booking(store: &dyn Store, id: &Uuid, requester: &User) -> AppResult<Booking> {
        let booking = store
            .find_booking(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let courts = store.list_courts().await?;
        if !rbac::can_access_booking(Some(requester), Some(&booking), &courts) {
            return Err(AppError::Forbidden("Cannot access this booking".to_string()));
        }

        Ok(booking)
    }

    /// Create a booking
    ///
    /// The total price is computed server-side from the court's hourly price
    /// and the slot duration. Overlapping slots are not rejected; the system
    /// has no double-booking prevention.
    pub async fn create_booking(
        store: &dyn Store,
        requester: &User,
        payload: CreateBookingRequest,
    ) -> AppResult<Booking> {
        let court = store
            .find_court(&payload.court_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Court not found".to_string()))?;

        if !court.is_active {
            return Err(AppError::InvalidInput(
                "Court is not available for booking".to_string(),
            ));
        }

        let start_time = parse_time(&payload.start_time)
            .ok_or_else(|| AppError::InvalidInput("Invalid start time".to_string()))?;
        let end_time = parse_time(&payload.end_time)
            .ok_or_else(|| AppError::InvalidInput("Invalid end time".to_string()))?;

        let hours = booking_hours(start_time, end_time)
            .ok_or_else(|| AppError::InvalidInput("End time must be after start time".to_string()))?;
        if hours < MIN_BOOKING_HOURS {
            return Err(AppError::InvalidInput(
                "Minimum booking duration is 1 hour".to_string(),
            ));
        }

        // Super admins may book on behalf of another user
        let user_id = match payload.user_id {
            Some(user_id) if requester.is_super_admin() => user_id,
            _ => requester.id,
        };

        store
            .create_booking(NewBooking {
                court_id: court.id,
                user_id,
                date: payload.date,
                start_time,
                end_time,
                total_price: hours * court.price_per_hour,
                status: booking_status::PENDING.to_string(),
                payment_status: payment_status::PENDING.to_string(),
                notes: payload.notes,
            })
            .await
    }

    /// Update a booking (status changes, payment marking, notes)
    pub async fn update_booking(
        store: &dyn Store,
        id: &Uuid,
        requester: &User,
        payload: UpdateBookingRequest,
    ) -> AppResult<Booking> {
        let booking = store
            .find_booking(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let courts = store.list_courts().await?;
        if !rbac::can_access_booking(Some(requester), Some(&booking), &courts) {
            return Err(AppError::Forbidden("Cannot access this booking".to_string()));
        }

        if let Some(status) = payload.status.as_deref() {
            validation::validate_booking_status(status)
                .map_err(|e| AppError::InvalidInput(e.to_string()))?;
        }
        if let Some(status) = payload.payment_status.as_deref() {
            validation::validate_payment_status(status)
                .map_err(|e| AppError::InvalidInput(e.to_string()))?;
        }

        let start_time = payload
            .start_time
            .as_deref()
            .map(|s| parse_time(s).ok_or_else(|| AppError::InvalidInput("Invalid start time".to_string())))
            .transpose()?;
        let end_time = payload
            .end_time
            .as_deref()
            .map(|s| parse_time(s).ok_or_else(|| AppError::InvalidInput("Invalid end time".to_string())))
            .transpose()?;

        store
            .update_booking(
                id,
                BookingPatch {
                    date: payload.date,
                    start_time,
                    end_time,
                    status: payload.status,
                    payment_status: payload.payment_status,
                    notes: payload.notes,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }

    /// Delete a booking
    pub async fn delete_booking(store: &dyn Store, id: &Uuid, requester: &User) -> AppResult<()> {
        let booking = store
            .find_booking(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let courts = store.list_courts().await?;
        if !rbac::can_access_booking(Some(requester), Some(&booking), &courts) {
            return Err(AppError::Forbidden("Cannot access this booking".to_string()));
        }

        if !store.delete_booking(id).await? {
            return Err(AppError::NotFound("Booking not found".to_string()));
        }

        Ok(())
    }
}
