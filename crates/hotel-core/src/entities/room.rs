//! Room entity - a physical room of some room type

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::entities::RoomType;
use crate::error::DomainError;
use crate::value_objects::{RecordId, RoomStatus};

/// Longest allowed room number
pub const MAX_ROOM_NUMBER_LEN: usize = 10;

/// Room entity
///
/// `status` is a cached operational flag. Whether the room is free for a
/// given night is answered by its bookings, not by this field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RecordId,
    pub number: String,
    pub floor: i32,
    pub room_type_id: RecordId,
    pub status: RoomStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Create a room that has not been persisted yet
    pub fn new(number: String, floor: i32, room_type_id: RecordId) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::default(),
            number,
            floor,
            room_type_id,
            status: RoomStatus::Available,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let len = self.number.trim().chars().count();
        if len == 0 || len > MAX_ROOM_NUMBER_LEN {
            return Err(DomainError::ValidationError(format!(
                "room number must be 1-{MAX_ROOM_NUMBER_LEN} characters"
            )));
        }
        Ok(())
    }

    /// Manual maintenance/out-of-order flags take the room off sale
    pub fn is_bookable(&self) -> bool {
        !self.status.blocks_availability()
    }
}

/// A room offered for a stay, with its type and price for that stay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSummary {
    pub room: Room,
    pub room_type: RoomType,
    pub nights: i64,
    pub total_price: Decimal,
}

/// Room counts per operational status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomStatusCounts {
    pub available: i64,
    pub occupied: i64,
    pub cleaning: i64,
    pub maintenance: i64,
    pub out_of_order: i64,
}

impl RoomStatusCounts {
    pub fn add(&mut self, status: RoomStatus, count: i64) {
        let slot = match status {
            RoomStatus::Available => &mut self.available,
            RoomStatus::Occupied => &mut self.occupied,
            RoomStatus::Cleaning => &mut self.cleaning,
            RoomStatus::Maintenance => &mut self.maintenance,
            RoomStatus::OutOfOrder => &mut self.out_of_order,
        };
        *slot += count;
    }

    pub fn total(&self) -> i64 {
        self.available + self.occupied + self.cleaning + self.maintenance + self.out_of_order
    }
}
