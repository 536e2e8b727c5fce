//! Ports implemented by the infrastructure layer

mod booking_store;
mod repositories;

pub use booking_store::{BookingStore, BookingTransaction};
pub use repositories::{
    BookingQuery, BookingRepository, RepoResult, RoomFilter, RoomRepository, RoomTypeRepository,
    UserRepository,
};
