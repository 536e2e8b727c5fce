//! Room type entity <-> model mapper

use hotel_core::entities::RoomType;
use hotel_core::error::DomainError;
use hotel_core::value_objects::RecordId;

use crate::models::RoomTypeModel;

impl TryFrom<RoomTypeModel> for RoomType {
    type Error = DomainError;

    fn try_from(model: RoomTypeModel) -> Result<Self, Self::Error> {
        Ok(RoomType {
            id: RecordId::new(model.id),
            name: model.name,
            capacity: model.capacity,
            price_night: model.price_night,
            location: model.location.parse().map_err(corrupt_column)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// A stored enum value that no longer parses means the row is corrupt
pub(crate) fn corrupt_column(e: DomainError) -> DomainError {
    DomainError::InternalError(format!("corrupt column value: {e}"))
}
