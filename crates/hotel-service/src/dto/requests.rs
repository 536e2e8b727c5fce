//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Query-string DTOs accept ids as strings or numbers.

use chrono::NaiveDate;
use hotel_core::{BookingStatus, Location, RecordId, RoomStatus};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

fn default_guests() -> i32 {
    1
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

fn default_floor() -> i32 {
    1
}

// ============================================================================
// Availability Requests
// ============================================================================

/// Availability search query
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AvailabilityQuery {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,

    #[serde(default = "default_guests")]
    #[validate(range(min = 1, max = 4, message = "Guests must be between 1 and 4"))]
    pub guests: i32,

    pub room_type_id: Option<RecordId>,
}

/// Availability counts query
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilitySummaryQuery {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type_id: Option<RecordId>,
}

/// Single-room availability query
#[derive(Debug, Clone, Deserialize)]
pub struct RoomAvailabilityQuery {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Ignore this booking when checking, e.g. while moving its dates
    pub exclude_booking_id: Option<RecordId>,
}

// ============================================================================
// Booking Requests
// ============================================================================

/// Create booking request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub room_id: RecordId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,

    #[validate(range(min = 1, max = 4, message = "Guests must be between 1 and 4"))]
    pub guests: i32,

    #[validate(length(max = 500, message = "Special requests must be at most 500 characters"))]
    pub special_requests: Option<String>,

    /// Customer to book for; staff only, customers always book for themselves
    pub customer_id: Option<RecordId>,
}

/// Booking status change request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

/// Booking list filters and paging
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookingListQuery {
    pub customer_id: Option<RecordId>,
    pub room_id: Option<RecordId>,
    pub status: Option<BookingStatus>,
    pub check_in_from: Option<NaiveDate>,
    pub check_in_to: Option<NaiveDate>,

    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: i64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: i64,
}

impl Default for BookingListQuery {
    fn default() -> Self {
        Self {
            customer_id: None,
            room_id: None,
            status: None,
            check_in_from: None,
            check_in_to: None,
            page: default_page(),
            limit: default_limit(),
        }
    }
}

// ============================================================================
// Room Type Requests
// ============================================================================

/// Create room type request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoomTypeRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(range(min = 1, max = 4, message = "Capacity must be between 1 and 4"))]
    pub capacity: i32,

    pub price_night: Decimal,

    pub location: Location,
}

/// Update room type request; absent fields are left unchanged
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRoomTypeRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(range(min = 1, max = 4, message = "Capacity must be between 1 and 4"))]
    pub capacity: Option<i32>,

    pub price_night: Option<Decimal>,

    pub location: Option<Location>,
}

// ============================================================================
// Room Requests
// ============================================================================

/// Create room request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, max = 10, message = "Room number must be 1-10 characters"))]
    pub number: String,

    #[serde(default = "default_floor")]
    pub floor: i32,

    pub room_type_id: RecordId,

    pub status: Option<RoomStatus>,
}

/// Update room request; absent fields are left unchanged
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRoomRequest {
    #[validate(length(min = 1, max = 10, message = "Room number must be 1-10 characters"))]
    pub number: Option<String>,

    pub floor: Option<i32>,

    pub room_type_id: Option<RecordId>,

    pub status: Option<RoomStatus>,
}

/// Manual room status change
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoomStatusRequest {
    pub status: RoomStatus,
}

/// Room list filters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomListQuery {
    pub room_type_id: Option<RecordId>,
    pub status: Option<RoomStatus>,
}
