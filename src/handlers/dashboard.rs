//! Dashboard statistics handler

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::Booking,
    services::DashboardService,
    state::AppState,
};

/// Role-scoped dashboard figures
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_bookings: i64,
    pub total_revenue: f64,
    pub active_courts: i64,
    pub total_users: i64,
    pub recent_bookings: Vec<Booking>,
    pub upcoming_bookings: Vec<Booking>,
}

/// Compute statistics for the requester's dashboard
pub async fn stats(
    State(state): State<AppState>,
    AuthenticatedUser(requester): AuthenticatedUser,
) -> AppResult<Json<DashboardStats>> {
    let stats = DashboardService::stats(state.store(), &requester).await?;
    Ok(Json(stats))
}

/// Dashboard routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/stats", get(stats))
}
