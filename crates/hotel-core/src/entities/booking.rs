//! Booking entity - a customer's hold on one room for a range of nights
//!
//! Bookings are created by the booking transaction, mutated only through
//! status transitions, and never deleted. `nights` and `total_amount` are
//! fixed when the booking is made.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::DomainError;
use crate::value_objects::{BookingStatus, RecordId, ReferenceCode, StayDates};

/// Smallest and largest party size accepted for a booking
pub const MIN_GUESTS: i32 = 1;
pub const MAX_GUESTS: i32 = 4;

/// Booking entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: RecordId,
    pub reference: ReferenceCode,
    pub customer_id: RecordId,
    pub room_id: RecordId,
    pub status: BookingStatus,
    pub stay: StayDates,
    pub guests: i32,
    pub nights: i32,
    pub total_amount: Decimal,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Whether the booking still holds its nights on the room
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn booked_stay(&self) -> BookedStay {
        BookedStay {
            booking_id: self.id,
            stay: self.stay,
        }
    }
}

/// Row to insert for a new booking, priced and validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub customer_id: RecordId,
    pub room_id: RecordId,
    pub stay: StayDates,
    pub guests: i32,
    pub nights: i32,
    pub total_amount: Decimal,
    pub special_requests: Option<String>,
}

impl NewBooking {
    /// Freeze the price of `stay` at `price_night`
    pub fn priced(
        customer_id: RecordId,
        room_id: RecordId,
        stay: StayDates,
        guests: i32,
        price_night: Decimal,
        special_requests: Option<String>,
    ) -> Result<Self, DomainError> {
        let nights = i32::try_from(stay.nights())
            .map_err(|_| DomainError::InvalidDateRange("stay is too long".to_string()))?;
        Ok(Self {
            customer_id,
            room_id,
            stay,
            guests,
            nights,
            total_amount: (price_night * Decimal::from(nights)).round_dp(2),
            special_requests,
        })
    }

    /// Status every new booking starts in
    pub fn initial_status(&self) -> BookingStatus {
        BookingStatus::Confirmed
    }
}

/// Interval held on a room by an active booking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedStay {
    pub booking_id: RecordId,
    pub stay: StayDates,
}

/// First active stay overlapping `candidate`, ignoring `exclude`
pub fn find_conflict<'a, I>(
    existing: I,
    candidate: &StayDates,
    exclude: Option<RecordId>,
) -> Option<&'a BookedStay>
where
    I: IntoIterator<Item = &'a BookedStay>,
{
    existing
        .into_iter()
        .filter(|held| Some(held.booking_id) != exclude)
        .find(|held| held.stay.overlaps(candidate))
}

/// A room is free when no active stay on it overlaps the candidate.
///
/// `existing` must contain only non-cancelled bookings for the room in question.
pub fn is_room_free<'a, I>(existing: I, candidate: &StayDates, exclude: Option<RecordId>) -> bool
where
    I: IntoIterator<Item = &'a BookedStay>,
{
    find_conflict(existing, candidate, exclude).is_none()
}

/// Count and revenue of bookings in one status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingStatusStats {
    pub status: BookingStatus,
    pub count: i64,
    pub revenue: Decimal,
}
