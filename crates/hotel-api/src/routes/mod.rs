//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{availability, bookings, health, room_types, rooms};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately to bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(availability_routes())
        .merge(booking_routes())
        .merge(room_type_routes())
        .merge(room_routes())
}

/// Availability search routes
fn availability_routes() -> Router<AppState> {
    Router::new()
        .route("/availability", get(availability::search_availability))
        .route("/availability/summary", get(availability::availability_summary))
        .route("/rooms/:room_id/availability", get(availability::room_availability))
}

/// Booking routes
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/bookings/@me", get(bookings::my_bookings))
        .route("/bookings/stats", get(bookings::booking_stats))
        .route(
            "/bookings/reference/:ref_code",
            get(bookings::get_booking_by_reference),
        )
        .route("/bookings/:booking_id", get(bookings::get_booking))
        .route("/bookings/:booking_id/status", patch(bookings::update_booking_status))
        .route("/bookings/:booking_id/cancel", post(bookings::cancel_booking))
}

/// Room type catalog routes
fn room_type_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/room-types",
            get(room_types::list_room_types).post(room_types::create_room_type),
        )
        .route(
            "/room-types/:room_type_id",
            get(room_types::get_room_type)
                .put(room_types::update_room_type)
                .delete(room_types::delete_room_type),
        )
}

/// Room inventory routes
fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(rooms::list_rooms).post(rooms::create_room))
        .route("/rooms/stats", get(rooms::room_stats))
        .route(
            "/rooms/:room_id",
            get(rooms::get_room)
                .put(rooms::update_room)
                .delete(rooms::delete_room),
        )
        .route("/rooms/:room_id/status", patch(rooms::set_room_status))
}
