//! Domain entities - core business objects

mod booking;
mod room;
mod room_type;
mod user;

pub use booking::{
    find_conflict, is_room_free, BookedStay, Booking, BookingStatusStats, NewBooking, MAX_GUESTS,
    MIN_GUESTS,
};
pub use room::{Room, RoomStatusCounts, RoomSummary, MAX_ROOM_NUMBER_LEN};
pub use room_type::{RoomType, MAX_ROOM_CAPACITY, MAX_ROOM_TYPE_NAME_LEN};
pub use user::User;
