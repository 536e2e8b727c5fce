//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod availability;
pub mod bookings;
pub mod health;
pub mod room_types;
pub mod rooms;
