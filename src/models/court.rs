//! Court model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Futsal court owned by a field-owner user
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price_per_hour: f64,
    pub owner_id: Uuid,
    pub facilities: Vec<String>,
    pub location: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a court
#[derive(Debug, Clone)]
pub struct NewCourt {
    pub name: String,
    pub description: String,
    pub image: String,
    pub price_per_hour: f64,
    pub owner_id: Uuid,
    pub facilities: Vec<String>,
    pub location: String,
    pub is_active: bool,
}

/// Partial update applied to a court by id. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct CourtPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price_per_hour: Option<f64>,
    pub facilities: Option<Vec<String>>,
    pub location: Option<String>,
    pub is_active: Option<bool>,
}
