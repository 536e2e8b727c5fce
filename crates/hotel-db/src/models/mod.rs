//! Database models - SQLx-compatible structs for PostgreSQL tables

mod booking;
mod room;
mod room_type;
mod user;

pub use booking::{BookedStayModel, BookingModel, BookingStatsModel};
pub use room::{RoomModel, RoomStatusCountModel, RoomWithTypeModel};
pub use room_type::RoomTypeModel;
pub use user::UserModel;
