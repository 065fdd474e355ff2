//! Authentication handler implementations

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::AuthService,
    state::AppState,
};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{AuthResponse, CurrentUserResponse, LogoutResponse},
};

/// Register a new account and log it in
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    payload.validate()?;

    let (user, token, expires_in) = AuthService::register(
        state.store(),
        state.config(),
        &payload.email,
        &payload.password,
        &payload.name,
        &payload.role,
        payload.phone.as_deref(),
    )
    .await?;

    let response = AuthResponse {
        token,
        expires_in,
        user: user.into(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let (user, token, expires_in) =
        AuthService::login(state.store(), state.config(), &payload.email, &payload.password)
            .await?;

    Ok(Json(AuthResponse {
        token,
        expires_in,
        user: user.into(),
    }))
}

/// Get current authenticated user, refreshed from the store
pub async fn get_current_user(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> AppResult<Json<CurrentUserResponse>> {
    let user = AuthService::get_user_by_id(state.store(), &user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(CurrentUserResponse { user: user.into() }))
}

/// Logout
///
/// Sessions are stateless bearer tokens; the server simply acknowledges and
/// the client discards its token.
pub async fn logout(
    AuthenticatedUser(_user): AuthenticatedUser,
) -> AppResult<Json<LogoutResponse>> {
    Ok(Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}
