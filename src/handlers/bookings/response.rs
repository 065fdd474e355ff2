//! Booking response DTOs

use serde::Serialize;

/// Booking deletion acknowledgement
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
}
