//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod bookings;
pub mod courts;
pub mod dashboard;
pub mod health;
pub mod users;

use axum::{Router, middleware};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Create all API routes
///
/// Everything except health and the auth endpoints sits behind the bearer
/// token middleware.
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/users", users::routes())
        .nest("/courts", courts::routes())
        .nest("/bookings", bookings::routes())
        .nest("/dashboard", dashboard::routes())
        .merge(auth::protected_routes())
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .merge(protected)
}
