//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::roles;

/// User account
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub role: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has unrestricted admin privileges
    pub fn is_super_admin(&self) -> bool {
        self.role == roles::SUPER_ADMIN
    }

    /// Check if user owns courts
    pub fn is_field_owner(&self) -> bool {
        self.role == roles::FIELD_OWNER
    }
}

/// Fields required to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub role: String,
    pub password_hash: String,
}

/// Partial update applied to a user by id. `None` fields are left unchanged.
///
/// The role is a fixed business classification and cannot be patched.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub password_hash: Option<String>,
    pub is_active: Option<bool>,
}
