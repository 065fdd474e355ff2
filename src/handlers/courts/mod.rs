//! Court handlers

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

/// Court routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_courts))
        .route("/", post(handler::create_court))
        .route("/{id}", get(handler::get_court))
        .route("/{id}", patch(handler::update_court))
        .route("/{id}", delete(handler::delete_court))
}
