//! # hotel-core
//!
//! Domain layer for the hotel reservation platform: entities, value objects,
//! the interval overlap rule, the booking status machine, and the repository
//! traits the infrastructure layer implements.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    find_conflict, is_room_free, BookedStay, Booking, BookingStatusStats, NewBooking, Room,
    RoomStatusCounts, RoomSummary, RoomType, User, MAX_GUESTS, MAX_ROOM_CAPACITY, MIN_GUESTS,
};
pub use error::DomainError;
pub use traits::{
    BookingQuery, BookingRepository, BookingStore, BookingTransaction, RepoResult, RoomFilter,
    RoomRepository, RoomTypeRepository, UserRepository,
};
pub use value_objects::{
    Actor, BookingStatus, Clock, FixedClock, Location, RecordId, RecordIdParseError,
    ReferenceCode, Role, RoomStatus, StayDates, SystemClock,
};
