//! Dribble - Futsal Court Booking System
//!
//! This library provides the backend for Dribble, a role-based booking
//! platform for futsal courts.
//!
//! # Features
//!
//! - Three roles (super admin, field owner, regular user) with a central
//!   permission and route table
//! - Court catalogue management scoped to the owning field owner
//! - Bookings with server-side pricing from the court's hourly rate
//! - Role-scoped dashboard statistics
//! - Interchangeable in-memory and Postgres data stores
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Store**: Data access behind a single trait
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod rbac;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
