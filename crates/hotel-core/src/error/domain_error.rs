//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{BookingStatus, RecordId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Room not found: {0}")]
    RoomNotFound(RecordId),

    #[error("Room type not found: {0}")]
    RoomTypeNotFound(RecordId),

    #[error("Booking not found: {0}")]
    BookingNotFound(String),

    #[error("Customer not found: {0}")]
    CustomerNotFound(RecordId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Room capacity is {capacity} guests, requested {guests}")]
    CapacityExceeded { guests: i32, capacity: i32 },

    #[error("Stay of {nights} nights exceeds the maximum of {max}")]
    StayTooLong { nights: i64, max: i64 },

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Cannot change booking status from {from} to {to}")]
    InvalidTransition { from: BookingStatus, to: BookingStatus },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Forbidden: {0}")]
    Forbidden(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Room {0} is not available for the selected dates")]
    RoomUnavailable(RecordId),

    #[error("Room type {0} is still assigned to rooms")]
    RoomTypeInUse(RecordId),

    #[error("Room number already exists: {0}")]
    RoomNumberExists(String),

    #[error("Room {0} has bookings and cannot be deleted")]
    RoomHasBookings(RecordId),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::RoomNotFound(_) => "UNKNOWN_ROOM",
            Self::RoomTypeNotFound(_) => "UNKNOWN_ROOM_TYPE",
            Self::BookingNotFound(_) => "UNKNOWN_BOOKING",
            Self::CustomerNotFound(_) => "UNKNOWN_CUSTOMER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidDateRange(_) => "INVALID_DATE_RANGE",
            Self::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            Self::StayTooLong { .. } => "STAY_TOO_LONG",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",

            // Authorization
            Self::Forbidden(_) => "FORBIDDEN",

            // Conflict
            Self::RoomUnavailable(_) => "ROOM_UNAVAILABLE",
            Self::RoomTypeInUse(_) => "ROOM_TYPE_IN_USE",
            Self::RoomNumberExists(_) => "ROOM_NUMBER_EXISTS",
            Self::RoomHasBookings(_) => "ROOM_HAS_BOOKINGS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RoomNotFound(_)
                | Self::RoomTypeNotFound(_)
                | Self::BookingNotFound(_)
                | Self::CustomerNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidDateRange(_)
                | Self::CapacityExceeded { .. }
                | Self::StayTooLong { .. }
                | Self::InvalidStatus(_)
                | Self::InvalidTransition { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::RoomUnavailable(_)
                | Self::RoomTypeInUse(_)
                | Self::RoomNumberExists(_)
                | Self::RoomHasBookings(_)
        )
    }

    /// Infrastructure failures; the transaction was rolled back and the
    /// operation may be retried
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::InternalError(_))
    }
}
