//! Authentication service

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{NewUser, User},
    store::Store,
    utils::{hash_password, validate_registrable_role, verify_password},
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new account
    ///
    /// Self-registration may only create field-owner or regular-user
    /// accounts. On success the caller is logged in immediately.
    pub async fn register(
        store: &dyn Store,
        config: &Config,
        email: &str,
        password: &str,
        name: &str,
        role: &str,
        phone: Option<&str>,
    ) -> AppResult<(User, String, i64)> {
        validate_registrable_role(role).map_err(|e| AppError::InvalidInput(e.to_string()))?;

        if store.find_user_by_email(email).await?.is_some() {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let password_hash = hash_password(password)?;

        let user = store
            .create_user(NewUser {
                email: email.to_string(),
                name: name.to_string(),
                phone: phone.map(str::to_string),
                avatar: None,
                role: role.to_string(),
                password_hash,
            })
            .await?;

        let (token, expires_in) = Self::generate_access_token(&user, config)?;
        Ok((user, token, expires_in))
    }

    /// Login with email and password
    pub async fn login(
        store: &dyn Store,
        config: &Config,
        email: &str,
        password: &str,
    ) -> AppResult<(User, String, i64)> {
        let user = store
            .find_user_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !user.is_active {
            return Err(AppError::Forbidden("Account is deactivated".to_string()));
        }

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let (token, expires_in) = Self::generate_access_token(&user, config)?;
        Ok((user, token, expires_in))
    }

    /// Get user by ID
    pub async fn get_user_by_id(store: &dyn Store, user_id: &uuid::Uuid) -> AppResult<Option<User>> {
        store.find_user(user_id).await
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Generate access token
    fn generate_access_token(user: &User, config: &Config) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(config.jwt.expiry_hours);
        let expires_in = config.jwt.expiry_hours * 3600;

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{JwtConfig, ServerConfig, StoreBackend, StoreConfig};
    use crate::constants::roles;
    use crate::store::MemoryStore;

    fn test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
            store: StoreConfig {
                backend: StoreBackend::Memory,
                database_url: None,
                max_connections: 1,
                seed_demo_data: false,
            },
            jwt: JwtConfig {
                secret: "test-secret".to_string(),
                expiry_hours: 1,
            },
        }
    }

    #[tokio::test]
    async fn register_then_login() {
        let store = MemoryStore::new();
        let config = test_config();

        let (user, token, _) = AuthService::register(
            &store,
            &config,
            "user@futsal.com",
            "user123",
            "Regular User",
            roles::REGULAR_USER,
            None,
        )
        .await
        .unwrap();

        assert_eq!(user.role, roles::REGULAR_USER);
        assert!(user.is_active);

        let claims = AuthService::verify_token(&token, &config.jwt.secret).unwrap();
        assert_eq!(claims.sub, user.id.to_string());

        let (logged_in, _, _) = AuthService::login(&store, &config, "user@futsal.com", "user123")
            .await
            .unwrap();
        assert_eq!(logged_in.id, user.id);
    }

    #[tokio::test]
    async fn login_with_wrong_password_fails() {
        let store = MemoryStore::new();
        let config = test_config();

        AuthService::register(
            &store,
            &config,
            "user@futsal.com",
            "user123",
            "Regular User",
            roles::REGULAR_USER,
            None,
        )
        .await
        .unwrap();

        let result = AuthService::login(&store, &config, "user@futsal.com", "nope").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn register_rejects_super_admin_role() {
        let store = MemoryStore::new();
        let config = test_config();

        let result = AuthService::register(
            &store,
            &config,
            "sneaky@futsal.com",
            "secret1",
            "Sneaky",
            roles::SUPER_ADMIN,
            None,
        )
        .await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn duplicate_registration_rejected() {
        let store = MemoryStore::new();
        let config = test_config();

        AuthService::register(
            &store,
            &config,
            "user@futsal.com",
            "user123",
            "Regular User",
            roles::REGULAR_USER,
            None,
        )
        .await
        .unwrap();

        let result = AuthService::register(
            &store,
            &config,
            "user@futsal.com",
            "other99",
            "Someone Else",
            roles::REGULAR_USER,
            None,
        )
        .await;
        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    }
}
