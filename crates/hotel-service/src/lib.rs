//! # hotel-service
//!
//! Application layer: availability search, the booking transaction and
//! status machine, and catalog management, plus the request/response DTOs
//! the API serves.

pub mod dto;
pub mod services;

pub use services::{
    AvailabilityService, BookingPolicy, BookingService, RoomService, RoomTypeService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
