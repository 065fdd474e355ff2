//! User account handlers

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

/// User account routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_users))
        .route("/", post(handler::create_user))
        .route("/{id}", get(handler::get_user))
        .route("/{id}", patch(handler::update_user))
        .route("/{id}", delete(handler::delete_user))
}
