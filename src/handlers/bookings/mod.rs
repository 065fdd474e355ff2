//! Booking handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

/// Booking routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_bookings))
        .route("/", post(handler::create_booking))
        .route("/{id}", get(handler::get_booking))
        .route("/{id}", patch(handler::update_booking))
        .route("/{id}", delete(handler::delete_booking))
}
