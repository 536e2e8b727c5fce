//! Test fixtures and data generators
//!
//! Provides reusable request bodies and typed views of API responses.

use chrono::NaiveDate;
use hotel_core::{BookingStatus, Location, RecordId, RoomStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// `{"data": ...}` wrapper used for plain lists
#[derive(Debug, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Paginated list wrapper
#[derive(Debug, Deserialize)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_more: bool,
}

/// Create room type request
#[derive(Debug, Serialize)]
pub struct CreateRoomTypeRequest {
    pub name: String,
    pub capacity: i32,
    pub price_night: Decimal,
    pub location: Location,
}

impl CreateRoomTypeRequest {
    /// A hotel room type at the given nightly price
    pub fn unique(capacity: i32, price_night: Decimal) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Type {suffix}"),
            capacity,
            price_night,
            location: Location::Hotel,
        }
    }
}

/// Room type response
#[derive(Debug, Deserialize)]
pub struct RoomTypeResponse {
    pub id: RecordId,
    pub name: String,
    pub capacity: i32,
    pub price_night: Decimal,
    pub location: Location,
}

/// Create room request
#[derive(Debug, Serialize)]
pub struct CreateRoomRequest {
    pub number: String,
    pub floor: i32,
    pub room_type_id: RecordId,
}

impl CreateRoomRequest {
    pub fn unique(room_type_id: RecordId) -> Self {
        let suffix = unique_suffix();
        Self {
            number: format!("R{suffix}"),
            floor: 1,
            room_type_id,
        }
    }
}

/// Room response
#[derive(Debug, Deserialize)]
pub struct RoomResponse {
    pub id: RecordId,
    pub number: String,
    pub floor: i32,
    pub room_type_id: RecordId,
    pub status: RoomStatus,
}

/// Room status counts
#[derive(Debug, Deserialize)]
pub struct RoomStatsResponse {
    pub available: i64,
    pub occupied: i64,
    pub cleaning: i64,
    pub maintenance: i64,
    pub out_of_order: i64,
    pub total: i64,
}

/// Available room in a search result
#[derive(Debug, Deserialize)]
pub struct RoomSummaryResponse {
    pub room_id: RecordId,
    pub number: String,
    pub nights: i64,
    pub total_price: Decimal,
}

/// Free-room counts for a date range
#[derive(Debug, Deserialize)]
pub struct AvailabilitySummaryResponse {
    pub nights: i64,
    pub available_rooms: i64,
    pub total_rooms: i64,
}

/// Availability of one room
#[derive(Debug, Deserialize)]
pub struct RoomAvailabilityResponse {
    pub room_id: RecordId,
    pub free: bool,
    pub available: bool,
}

/// Create booking request
#[derive(Debug, Clone, Serialize)]
pub struct CreateBookingRequest {
    pub room_id: RecordId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<RecordId>,
}

impl CreateBookingRequest {
    /// Two guests, no extras
    pub fn stay(room_id: RecordId, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            room_id,
            check_in,
            check_out,
            guests: 2,
            special_requests: None,
            customer_id: None,
        }
    }
}

/// Status change request
#[derive(Debug, Serialize)]
pub struct StatusRequest<S> {
    pub status: S,
}

/// Booking response
#[derive(Debug, Deserialize)]
pub struct BookingResponse {
    pub id: RecordId,
    pub reference: String,
    pub customer_id: RecordId,
    pub room_id: RecordId,
    pub status: BookingStatus,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub nights: i32,
    pub total_amount: Decimal,
    pub special_requests: Option<String>,
}

/// Per-status booking figures
#[derive(Debug, Deserialize)]
pub struct BookingStatusStats {
    pub status: BookingStatus,
    pub count: i64,
    pub revenue: Decimal,
}

/// Booking statistics
#[derive(Debug, Deserialize)]
pub struct BookingStatsResponse {
    pub by_status: Vec<BookingStatusStats>,
    pub total_bookings: i64,
    pub total_revenue: Decimal,
}
