//! Room entity <-> model mapper

use hotel_core::entities::{Room, RoomType};
use hotel_core::error::DomainError;
use hotel_core::value_objects::RecordId;

use crate::models::{RoomModel, RoomWithTypeModel};

use super::room_type::corrupt_column;

impl TryFrom<RoomModel> for Room {
    type Error = DomainError;

    fn try_from(model: RoomModel) -> Result<Self, Self::Error> {
        Ok(Room {
            id: RecordId::new(model.id),
            number: model.number,
            floor: model.floor,
            room_type_id: RecordId::new(model.room_type_id),
            status: model.status.parse().map_err(corrupt_column)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Split a joined row into the room and its type
pub fn room_with_type(model: RoomWithTypeModel) -> Result<(Room, RoomType), DomainError> {
    let room_type = RoomType {
        id: RecordId::new(model.room_type_id),
        name: model.rt_name,
        capacity: model.rt_capacity,
        price_night: model.rt_price_night,
        location: model.rt_location.parse().map_err(corrupt_column)?,
        created_at: model.rt_created_at,
        updated_at: model.rt_updated_at,
    };
    let room = Room {
        id: RecordId::new(model.id),
        number: model.number,
        floor: model.floor,
        room_type_id: room_type.id,
        status: model.status.parse().map_err(corrupt_column)?,
        created_at: model.created_at,
        updated_at: model.updated_at,
    };
    Ok((room, room_type))
}
