//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in hotel-core.

mod booking;
mod booking_store;
mod error;
mod room;
mod room_type;
mod user;

pub use booking::PgBookingRepository;
pub use booking_store::{PgBookingStore, PgBookingTransaction};
pub use room::PgRoomRepository;
pub use room_type::PgRoomTypeRepository;
pub use user::PgUserRepository;
