//! Court request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{MAX_NAME_LENGTH, MIN_NAME_LENGTH},
    models::CourtPatch,
};

/// Court creation request
///
/// `owner_id` is honored only when the requester is a super admin; field
/// owners always create courts for themselves.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourtRequest {
    #[validate(length(min = MIN_NAME_LENGTH, max = MAX_NAME_LENGTH))]
    pub name: String,

    pub description: String,

    pub image: Option<String>,

    #[validate(range(min = 0.0))]
    pub price_per_hour: f64,

    pub owner_id: Option<Uuid>,

    pub facilities: Option<Vec<String>>,

    pub location: String,

    pub is_active: Option<bool>,
}

/// Partial court update request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourtRequest {
    #[validate(length(min = MIN_NAME_LENGTH, max = MAX_NAME_LENGTH))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub image: Option<String>,

    #[validate(range(min = 0.0))]
    pub price_per_hour: Option<f64>,

    pub facilities: Option<Vec<String>>,

    pub location: Option<String>,

    pub is_active: Option<bool>,
}

impl From<UpdateCourtRequest> for CourtPatch {
    fn from(payload: UpdateCourtRequest) -> Self {
        Self {
            name: payload.name,
            description: payload.description,
            image: payload.image,
            price_per_hour: payload.price_per_hour,
            facilities: payload.facilities,
            location: payload.location,
            is_active: payload.is_active,
        }
    }
}
