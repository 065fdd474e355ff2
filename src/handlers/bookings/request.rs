//! Booking request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Booking list filters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBookingsQuery {
    pub user_id: Option<Uuid>,
    pub court_id: Option<Uuid>,
}

/// Booking creation request
///
/// Times are `HH:MM` strings. `user_id` is honored only when the requester
/// is a super admin; everyone else books for themselves.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub court_id: Uuid,

    pub user_id: Option<Uuid>,

    pub date: NaiveDate,

    #[validate(length(min = 1))]
    pub start_time: String,

    #[validate(length(min = 1))]
    pub end_time: String,

    pub notes: Option<String>,
}

/// Partial booking update request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub date: Option<NaiveDate>,

    pub start_time: Option<String>,

    pub end_time: Option<String>,

    pub status: Option<String>,

    pub payment_status: Option<String>,

    pub notes: Option<String>,
}
