//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Money is serialized as a decimal string (`"400.00"`) so no precision is lost.

use chrono::{DateTime, NaiveDate, Utc};
use hotel_core::{BookingStatus, Location, RecordId, ReferenceCode, RoomStatus};
use rust_decimal::Decimal;
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Paginated response with page/limit pagination
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if limit > 0 { (total + limit - 1) / limit } else { 0 };
        Self {
            data,
            pagination: PaginationMeta {
                page,
                limit,
                total,
                total_pages,
                has_more: page < total_pages,
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    /// Number of matching records across all pages
    pub total: i64,
    pub total_pages: i64,
    pub has_more: bool,
}

// ============================================================================
// Catalog Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RoomTypeResponse {
    pub id: RecordId,
    pub name: String,
    pub capacity: i32,
    pub price_night: Decimal,
    pub location: Location,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomResponse {
    pub id: RecordId,
    pub number: String,
    pub floor: i32,
    pub room_type_id: RecordId,
    pub status: RoomStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Room counts per status
#[derive(Debug, Clone, Serialize)]
pub struct RoomStatsResponse {
    pub available: i64,
    pub occupied: i64,
    pub cleaning: i64,
    pub maintenance: i64,
    pub out_of_order: i64,
    pub total: i64,
}

// ============================================================================
// Availability Responses
// ============================================================================

/// A room offered for the searched stay
#[derive(Debug, Clone, Serialize)]
pub struct RoomSummaryResponse {
    pub room_id: RecordId,
    pub number: String,
    pub floor: i32,
    pub status: RoomStatus,
    pub room_type: RoomTypeResponse,
    pub nights: i64,
    pub total_price: Decimal,
}

/// Whether one room can be booked for a stay
#[derive(Debug, Clone, Serialize)]
pub struct RoomAvailabilityResponse {
    pub room_id: RecordId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// No active booking overlaps the stay
    pub free: bool,
    pub status: RoomStatus,
    /// Free and not flagged maintenance or out of order
    pub available: bool,
}

/// Available and total room counts for a stay
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilitySummaryResponse {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type_id: Option<RecordId>,
    pub available_rooms: i64,
    pub total_rooms: i64,
}

// ============================================================================
// Booking Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub id: RecordId,
    pub reference: ReferenceCode,
    pub customer_id: RecordId,
    pub room_id: RecordId,
    pub status: BookingStatus,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub nights: i32,
    pub total_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingStatusStatsResponse {
    pub status: BookingStatus,
    pub count: i64,
    pub revenue: Decimal,
}

/// Booking counts and revenue per status
#[derive(Debug, Clone, Serialize)]
pub struct BookingStatsResponse {
    pub by_status: Vec<BookingStatusStatsResponse>,
    pub total_bookings: i64,
    /// Revenue of every booking that was not cancelled
    pub total_revenue: Decimal,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
