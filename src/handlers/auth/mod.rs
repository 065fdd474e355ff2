//! Authentication handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Public authentication routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
}

/// Authentication routes that require a valid token
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(handler::get_current_user))
        .route("/auth/logout", post(handler::logout))
}
