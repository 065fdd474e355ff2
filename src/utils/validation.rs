//! Input validation utilities

use crate::constants;

/// Validate a user role
pub fn validate_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err("Invalid role")
    }
}

/// Validate a role chosen at self-registration
pub fn validate_registrable_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::REGISTRABLE.contains(&role) {
        Ok(())
    } else {
        Err("Account type must be field_owner or regular_user")
    }
}

/// Validate a booking lifecycle status
pub fn validate_booking_status(status: &str) -> Result<(), &'static str> {
    if constants::booking_status::ALL.contains(&status) {
        Ok(())
    } else {
        Err("Invalid booking status")
    }
}

/// Validate a booking payment status
pub fn validate_payment_status(status: &str) -> Result<(), &'static str> {
    if constants::payment_status::ALL.contains(&status) {
        Ok(())
    } else {
        Err("Invalid payment status")
    }
}
