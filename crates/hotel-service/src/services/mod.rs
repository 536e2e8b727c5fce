//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for one operation,
//! checks the caller's role, and orchestrates repositories and the booking
//! transaction.

pub mod availability;
pub mod booking;
pub mod context;
pub mod error;
pub mod room;
pub mod room_type;

#[cfg(test)]
mod testing;

// Re-export all services for convenience
pub use availability::AvailabilityService;
pub use booking::{BookingService, MAX_SPECIAL_REQUESTS_LEN};
pub use context::{BookingPolicy, ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use room::RoomService;
pub use room_type::RoomTypeService;
