//! Court service

use uuid::Uuid;

use crate::{
    constants::permissions,
    error::{AppError, AppResult},
    handlers::courts::request::{CreateCourtRequest, UpdateCourtRequest},
    models::{Court, CourtPatch, NewCourt, User},
    rbac,
    store::Store,
};

/// Court service for business logic
pub struct CourtService;

impl CourtService {
    /// List courts. Every role may browse the catalogue.
    pub async fn list_courts(store: &dyn Store) -> AppResult<Vec<Court>> {
        store.list_courts().await
    }

    /// Get court by ID
    pub async fn get_court(store: &dyn Store, id: &Uuid) -> AppResult<Court> {
        store
            .find_court(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Court not found".to_string()))
    }

    /// Create a new court
    ///
    /// Field owners create courts for themselves; super admins may create a
    /// court on behalf of any owner by supplying `owner_id`.
    pub async fn create_court(
        store: &dyn Store,
        requester: &User,
        payload: CreateCourtRequest,
    ) -> AppResult<Court> {
        let allowed = rbac::has_permission(Some(requester), permissions::MANAGE_COURTS)
            || rbac::has_permission(Some(requester), permissions::MANAGE_OWN_COURTS);
        if !allowed {
            return Err(AppError::Forbidden(
                "Only field owners can create courts".to_string(),
            ));
        }

        let owner_id = match payload.owner_id {
            Some(owner_id) if requester.is_super_admin() => owner_id,
            _ => requester.id,
        };

        store
            .create_court(NewCourt {
                name: payload.name,
                description: payload.description,
                image: payload.image.unwrap_or_default(),
                price_per_hour: payload.price_per_hour,
                owner_id,
                facilities: payload.facilities.unwrap_or_default(),
                location: payload.location,
                is_active: payload.is_active.unwrap_or(true),
            })
            .await
    }

    /// Update a court
    pub async fn update_court(
        store: &dyn Store,
        id: &Uuid,
        requester: &User,
        payload: UpdateCourtRequest,
    ) -> AppResult<Court> {
        let court = store
            .find_court(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Court not found".to_string()))?;

        if !rbac::can_manage_court(Some(requester), Some(&court)) {
            return Err(AppError::Forbidden(
                "Cannot manage other owners' courts".to_string(),
            ));
        }

        store
            .update_court(id, CourtPatch::from(payload))
            .await?
            .ok_or_else(|| AppError::NotFound("Court not found".to_string()))
    }

    /// Delete a court. Its bookings are left in place.
    pub async fn delete_court(store: &dyn Store, id: &Uuid, requester: &User) -> AppResult<()> {
        let court = store
            .find_court(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Court not found".to_string()))?;

        if !rbac::can_manage_court(Some(requester), Some(&court)) {
            return Err(AppError::Forbidden(
                "Cannot manage other owners' courts".to_string(),
            ));
        }

        if !store.delete_court(id).await? {
            return Err(AppError::NotFound("Court not found".to_string()));
        }

        Ok(())
    }
}
