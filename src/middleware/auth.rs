//! Authentication middleware
//!
//! Restores the current user from the bearer token on every request: the
//! token is verified, then the user record is refreshed from the data store
//! so that handlers always see current role and active status.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;

use crate::{error::AppError, models::User, services::AuthService, state::AppState};

/// Current user restored from the bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(auth_header) = auth_header else {
        debug!(path = %path, "Auth failed: No Authorization header");
        return Err(AppError::Unauthorized);
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        debug!(path = %path, "Auth failed: Invalid Authorization format (expected 'Bearer <token>')");
        return Err(AppError::Unauthorized);
    };

    let claims = AuthService::verify_token(token, &state.config().jwt.secret).map_err(|e| {
        debug!(path = %path, error = ?e, "Auth failed: Token verification failed");
        e
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        debug!(path = %path, sub = %claims.sub, "Auth failed: Invalid user ID in token");
        AppError::InvalidToken
    })?;

    // Refresh the user from the store so role and active flag are current
    let user = state
        .store()
        .find_user(&user_id)
        .await?
        .ok_or(AppError::InvalidToken)?;

    if !user.is_active {
        debug!(path = %path, user_id = %user_id, "Auth failed: Account deactivated");
        return Err(AppError::Unauthorized);
    }

    debug!(path = %path, user_id = %user_id, role = %user.role, "User authenticated");

    request.extensions_mut().insert(AuthenticatedUser(user));
    Ok(next.run(request).await)
}
