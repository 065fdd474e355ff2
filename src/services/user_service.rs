//! User service

use uuid::Uuid;

use crate::{
    constants::permissions,
    error::{AppError, AppResult},
    handlers::users::request::{CreateUserRequest, UpdateUserRequest},
    models::{NewUser, User, UserPatch},
    rbac,
    store::Store,
    utils::{hash_password, validate_role},
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// List all accounts. Restricted to user managers.
    pub async fn list_users(store: &dyn Store, requester: &User) -> AppResult<Vec<User>> {
        if !rbac::has_permission(Some(requester), permissions::MANAGE_USERS) {
            return Err(AppError::Forbidden("Cannot list accounts".to_string()));
        }

        store.list_users().await
    }

    /// Get an account by ID. Users may read their own record.
    pub async fn get_user(store: &dyn Store, id: &Uuid, requester: &User) -> AppResult<User> {
        if requester.id != *id
            && !rbac::has_permission(Some(requester), permissions::MANAGE_USERS)
        {
            return Err(AppError::Forbidden("Cannot access this account".to_string()));
        }

        store
            .find_user(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Create an account with an administrator-chosen role
    pub async fn create_user(
        store: &dyn Store,
        requester: &User,
        payload: CreateUserRequest,
    ) -> AppResult<User> {
        if !rbac::has_permission(Some(requester), permissions::MANAGE_USERS) {
            return Err(AppError::Forbidden("Cannot create accounts".to_string()));
        }

        validate_role(&payload.role).map_err(|e| AppError::InvalidInput(e.to_string()))?;

        if store.find_user_by_email(&payload.email).await?.is_some() {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let password_hash = hash_password(&payload.password)?;

        store
            .create_user(NewUser {
                email: payload.email,
                name: payload.name,
                phone: payload.phone,
                avatar: None,
                role: payload.role,
                password_hash,
            })
            .await
    }

    /// Update an account. Users may edit their own profile; only user
    /// managers may change the active flag. The role is never patched.
    pub async fn update_user(
        store: &dyn Store,
        id: &Uuid,
        requester: &User,
        payload: UpdateUserRequest,
    ) -> AppResult<User> {
        let is_manager = rbac::has_permission(Some(requester), permissions::MANAGE_USERS);
        if requester.id != *id && !is_manager {
            return Err(AppError::Forbidden("Cannot edit this account".to_string()));
        }
        if payload.is_active.is_some() && !is_manager {
            return Err(AppError::Forbidden(
                "Cannot change account active status".to_string(),
            ));
        }

        let password_hash = payload.password.as_deref().map(hash_password).transpose()?;

        store
            .update_user(
                id,
                UserPatch {
                    email: payload.email,
                    name: payload.name,
                    phone: payload.phone,
                    avatar: payload.avatar,
                    password_hash,
                    is_active: payload.is_active,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Delete an account. Owned courts and bookings are left in place.
    pub async fn delete_user(store: &dyn Store, id: &Uuid, requester: &User) -> AppResult<()> {
        if !rbac::has_permission(Some(requester), permissions::MANAGE_USERS) {
            return Err(AppError::Forbidden("Cannot delete accounts".to_string()));
        }

        if !store.delete_user(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
