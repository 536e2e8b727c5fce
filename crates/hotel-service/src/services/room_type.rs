//! Room type service
//!
//! Catalog management for room types. Reads are public; writes are staff only.
//! Changing a nightly price affects future quotes only, never existing bookings.

use chrono::Utc;
use hotel_core::entities::RoomType;
use hotel_core::{Actor, DomainError, RecordId};
use tracing::{info, instrument};

use crate::dto::{CreateRoomTypeRequest, RoomTypeResponse, UpdateRoomTypeRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Room type service
pub struct RoomTypeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RoomTypeService<'a> {
    /// Create a new RoomTypeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All room types ordered by name
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<RoomTypeResponse>> {
        let room_types = self.ctx.room_type_repo().list().await?;
        Ok(room_types.into_iter().map(RoomTypeResponse::from).collect())
    }

    /// Get room type by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: RecordId) -> ServiceResult<RoomTypeResponse> {
        Ok(RoomTypeResponse::from(self.get_entity(id).await?))
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: Actor,
        request: CreateRoomTypeRequest,
    ) -> ServiceResult<RoomTypeResponse> {
        actor.require_staff()?;

        let room_type = RoomType::new(
            request.name.trim().to_string(),
            request.capacity,
            request.price_night,
            request.location,
        );
        room_type.validate()?;

        let created = self.ctx.room_type_repo().create(&room_type).await?;

        info!(room_type_id = %created.id, name = %created.name, "Room type created");

        Ok(RoomTypeResponse::from(created))
    }

    /// Apply the fields present in `request`
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: Actor,
        id: RecordId,
        request: UpdateRoomTypeRequest,
    ) -> ServiceResult<RoomTypeResponse> {
        actor.require_staff()?;

        let mut room_type = self.get_entity(id).await?;
        if let Some(name) = request.name {
            room_type.name = name.trim().to_string();
        }
        if let Some(capacity) = request.capacity {
            room_type.capacity = capacity;
        }
        if let Some(price_night) = request.price_night {
            room_type.price_night = price_night;
        }
        if let Some(location) = request.location {
            room_type.location = location;
        }
        room_type.updated_at = Utc::now();
        room_type.validate()?;

        self.ctx.room_type_repo().update(&room_type).await?;

        info!(room_type_id = %id, price_night = %room_type.price_night, "Room type updated");

        Ok(RoomTypeResponse::from(room_type))
    }

    /// Delete a room type no room refers to
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: Actor, id: RecordId) -> ServiceResult<()> {
        actor.require_staff()?;

        self.get_entity(id).await?;
        self.ctx.room_type_repo().delete(id).await?;

        info!(room_type_id = %id, "Room type deleted");
        Ok(())
    }

    async fn get_entity(&self, id: RecordId) -> ServiceResult<RoomType> {
        Ok(self
            .ctx
            .room_type_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::RoomTypeNotFound(id))?)
    }
}
