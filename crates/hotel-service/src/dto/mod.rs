//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AvailabilityQuery, AvailabilitySummaryQuery, BookingListQuery, CreateBookingRequest,
    CreateRoomRequest, CreateRoomTypeRequest, RoomAvailabilityQuery, RoomListQuery,
    UpdateBookingStatusRequest, UpdateRoomRequest, UpdateRoomStatusRequest, UpdateRoomTypeRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, AvailabilitySummaryResponse, BookingResponse, BookingStatsResponse,
    BookingStatusStatsResponse, HealthChecks, HealthResponse, PaginatedResponse, PaginationMeta,
    ReadinessResponse, RoomAvailabilityResponse, RoomResponse, RoomStatsResponse,
    RoomSummaryResponse, RoomTypeResponse,
};
