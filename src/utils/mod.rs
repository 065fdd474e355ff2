//! Utility functions

pub mod crypto;
pub mod time;
pub mod validation;

pub use crypto::{hash_password, verify_password};
pub use time::booking_hours;
pub use validation::{validate_registrable_role, validate_role};
