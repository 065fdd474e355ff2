//! Booking model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::booking_status;

/// Court booking made by a user
///
/// References a court and a user by id. Integrity is not enforced: deleting a
/// court leaves its bookings in place and readers must tolerate dangling ids.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub court_id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub total_price: f64,
    pub status: String,
    pub payment_status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Check whether the booking is confirmed and scheduled after `today`
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date > today && self.status == booking_status::CONFIRMED
    }
}

/// Fields required to create a booking
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub court_id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub total_price: f64,
    pub status: String,
    pub payment_status: String,
    pub notes: Option<String>,
}

/// Partial update applied to a booking by id. `None` fields are left
/// unchanged. The merge is shallow: changing times does not recompute the
/// stored total price.
#[derive(Debug, Clone, Default)]
pub struct BookingPatch {
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub status: Option<String>,
    pub payment_status: Option<String>,
    pub notes: Option<String>,
}
