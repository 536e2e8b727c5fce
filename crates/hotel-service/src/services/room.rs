//! Room service
//!
//! Room inventory: listing, staff edits, and manual status overrides. A manual
//! `maintenance` or `out_of_order` status takes the room off sale; bookings
//! overwrite the status again as they move through their lifecycle.

use chrono::Utc;
use hotel_core::entities::Room;
use hotel_core::traits::RoomFilter;
use hotel_core::{Actor, DomainError, RecordId, RoomStatus};
use tracing::{info, instrument};

use crate::dto::{
    CreateRoomRequest, RoomListQuery, RoomResponse, RoomStatsResponse, UpdateRoomRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Room service
pub struct RoomService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RoomService<'a> {
    /// Create a new RoomService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: RoomListQuery) -> ServiceResult<Vec<RoomResponse>> {
        let rooms = self
            .ctx
            .room_repo()
            .list(RoomFilter {
                room_type_id: query.room_type_id,
                status: query.status,
            })
            .await?;
        Ok(rooms.into_iter().map(RoomResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: RecordId) -> ServiceResult<RoomResponse> {
        Ok(RoomResponse::from(self.get_entity(id).await?))
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: Actor,
        request: CreateRoomRequest,
    ) -> ServiceResult<RoomResponse> {
        actor.require_staff()?;
        self.ensure_room_type(request.room_type_id).await?;

        let room = Room::new(
            request.number.trim().to_string(),
            request.floor,
            request.room_type_id,
        )
        .with_status(request.status.unwrap_or(RoomStatus::Available));
        room.validate()?;

        let created = self.ctx.room_repo().create(&room).await?;

        info!(room_id = %created.id, number = %created.number, "Room created");

        Ok(RoomResponse::from(created))
    }

    /// Apply the fields present in `request`
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: Actor,
        id: RecordId,
        request: UpdateRoomRequest,
    ) -> ServiceResult<RoomResponse> {
        actor.require_staff()?;

        let mut room = self.get_entity(id).await?;
        if let Some(number) = request.number {
            room.number = number.trim().to_string();
        }
        if let Some(floor) = request.floor {
            room.floor = floor;
        }
        if let Some(room_type_id) = request.room_type_id {
            self.ensure_room_type(room_type_id).await?;
            room.room_type_id = room_type_id;
        }
        if let Some(status) = request.status {
            room.status = status;
        }
        room.updated_at = Utc::now();
        room.validate()?;

        self.ctx.room_repo().update(&room).await?;

        info!(room_id = %id, "Room updated");

        Ok(RoomResponse::from(room))
    }

    /// Delete a room that has never been booked
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: Actor, id: RecordId) -> ServiceResult<()> {
        actor.require_staff()?;

        self.get_entity(id).await?;
        self.ctx.room_repo().delete(id).await?;

        info!(room_id = %id, "Room deleted");
        Ok(())
    }

    /// Manual status override, e.g. marking a room for maintenance
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        actor: Actor,
        id: RecordId,
        status: RoomStatus,
    ) -> ServiceResult<RoomResponse> {
        actor.require_staff()?;

        let mut room = self.get_entity(id).await?;
        let previous = room.status;
        self.ctx.room_repo().set_status(id, status).await?;
        room.status = status;
        room.updated_at = Utc::now();

        info!(room_id = %id, from = %previous, to = %status, "Room status set");

        Ok(RoomResponse::from(room))
    }

    /// Number of rooms in each status
    #[instrument(skip(self))]
    pub async fn stats(&self, actor: Actor) -> ServiceResult<RoomStatsResponse> {
        actor.require_staff()?;
        let counts = self.ctx.room_repo().status_counts().await?;
        Ok(RoomStatsResponse::from(counts))
    }

    async fn get_entity(&self, id: RecordId) -> ServiceResult<Room> {
        Ok(self
            .ctx
            .room_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::RoomNotFound(id))?)
    }

    async fn ensure_room_type(&self, id: RecordId) -> ServiceResult<()> {
        self.ctx
            .room_type_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::RoomTypeNotFound(id))?;
        Ok(())
    }
}
