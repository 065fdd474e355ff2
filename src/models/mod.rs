//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod booking;
pub mod court;
pub mod user;

pub use booking::*;
pub use court::*;
pub use user::*;
