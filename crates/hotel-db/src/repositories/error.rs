//! Error handling utilities for repositories

use hotel_core::error::DomainError;
use hotel_core::value_objects::RecordId;
use sqlx::Error as SqlxError;

/// PostgreSQL SQLSTATE for `exclusion_violation`
const EXCLUSION_VIOLATION: &str = "23P01";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Check for foreign key violation and return appropriate error or fallback
pub fn map_foreign_key_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk();
        }
    }
    map_db_error(e)
}

/// The `bookings_no_overlap` exclusion constraint fired: another active stay
/// on the room overlaps this one
pub fn map_overlap_violation(e: SqlxError, room_id: RecordId) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.code().as_deref() == Some(EXCLUSION_VIOLATION) {
            return DomainError::RoomUnavailable(room_id);
        }
        if db_err.is_foreign_key_violation() {
            return DomainError::ValidationError(
                "booking references a missing customer or room".to_string(),
            );
        }
    }
    map_db_error(e)
}

pub fn room_not_found(id: RecordId) -> DomainError {
    DomainError::RoomNotFound(id)
}

pub fn room_type_not_found(id: RecordId) -> DomainError {
    DomainError::RoomTypeNotFound(id)
}

pub fn booking_not_found(id: RecordId) -> DomainError {
    DomainError::BookingNotFound(id.to_string())
}
