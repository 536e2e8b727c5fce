//! Room type entity - a sellable category of room with capacity and nightly price

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::DomainError;
use crate::value_objects::{Location, RecordId, StayDates};

/// Largest party a single room can host
pub const MAX_ROOM_CAPACITY: i32 = 4;

/// Longest allowed room type name
pub const MAX_ROOM_TYPE_NAME_LEN: usize = 100;

/// Room type entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomType {
    pub id: RecordId,
    pub name: String,
    pub capacity: i32,
    pub price_night: Decimal,
    pub location: Location,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RoomType {
    /// Create a room type that has not been persisted yet
    pub fn new(name: String, capacity: i32, price_night: Decimal, location: Location) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::default(),
            name,
            capacity,
            price_night,
            location,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check catalog invariants: name length, capacity 1-4, positive price
    pub fn validate(&self) -> Result<(), DomainError> {
        let name_len = self.name.trim().chars().count();
        if name_len == 0 || name_len > MAX_ROOM_TYPE_NAME_LEN {
            return Err(DomainError::ValidationError(format!(
                "room type name must be 1-{MAX_ROOM_TYPE_NAME_LEN} characters"
            )));
        }
        if !(1..=MAX_ROOM_CAPACITY).contains(&self.capacity) {
            return Err(DomainError::ValidationError(format!(
                "capacity must be between 1 and {MAX_ROOM_CAPACITY}"
            )));
        }
        if self.price_night <= Decimal::ZERO {
            return Err(DomainError::ValidationError(
                "price per night must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn fits(&self, guests: i32) -> bool {
        guests <= self.capacity
    }

    /// Fail with `CapacityExceeded` if the party is too large
    pub fn ensure_fits(&self, guests: i32) -> Result<(), DomainError> {
        if self.fits(guests) {
            Ok(())
        } else {
            Err(DomainError::CapacityExceeded {
                guests,
                capacity: self.capacity,
            })
        }
    }

    /// Price of a stay at the current nightly rate
    pub fn quote(&self, stay: &StayDates) -> Decimal {
        (self.price_night * Decimal::from(stay.nights())).round_dp(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn cabin(capacity: i32, price: Decimal) -> RoomType {
        RoomType::new("Forest Cabin".to_string(), capacity, price, Location::Cabin)
    }

    #[test]
    fn test_validate() {
        assert!(cabin(2, Decimal::new(10000, 2)).validate().is_ok());
        assert!(cabin(0, Decimal::new(10000, 2)).validate().is_err());
        assert!(cabin(5, Decimal::new(10000, 2)).validate().is_err());
        assert!(cabin(2, Decimal::ZERO).validate().is_err());

        let mut unnamed = cabin(2, Decimal::ONE);
        unnamed.name = "   ".to_string();
        assert!(unnamed.validate().is_err());
    }

    #[test]
    fn test_capacity() {
        let room_type = cabin(2, Decimal::ONE);
        assert!(room_type.ensure_fits(2).is_ok());
        assert!(matches!(
            room_type.ensure_fits(3),
            Err(DomainError::CapacityExceeded {
                guests: 3,
                capacity: 2
            })
        ));
    }

    #[test]
    fn test_quote() {
        let room_type = cabin(2, Decimal::new(10000, 2));
        let stay = StayDates::new(
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 5).unwrap(),
        )
        .unwrap();
        assert_eq!(room_type.quote(&stay), Decimal::new(40000, 2));
    }
}
