//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use hotel_core::entities::{
    Booking, BookingStatusStats, Room, RoomStatusCounts, RoomSummary, RoomType,
};
use hotel_core::BookingStatus;
use rust_decimal::Decimal;

use super::responses::{
    BookingResponse, BookingStatsResponse, BookingStatusStatsResponse, RoomResponse,
    RoomStatsResponse, RoomSummaryResponse, RoomTypeResponse,
};

// ============================================================================
// Catalog Mappers
// ============================================================================

impl From<&RoomType> for RoomTypeResponse {
    fn from(room_type: &RoomType) -> Self {
        Self {
            id: room_type.id,
            name: room_type.name.clone(),
            capacity: room_type.capacity,
            price_night: room_type.price_night,
            location: room_type.location,
            created_at: room_type.created_at,
            updated_at: room_type.updated_at,
        }
    }
}

impl From<RoomType> for RoomTypeResponse {
    fn from(room_type: RoomType) -> Self {
        Self::from(&room_type)
    }
}

impl From<&Room> for RoomResponse {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id,
            number: room.number.clone(),
            floor: room.floor,
            room_type_id: room.room_type_id,
            status: room.status,
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self::from(&room)
    }
}

impl From<RoomStatusCounts> for RoomStatsResponse {
    fn from(counts: RoomStatusCounts) -> Self {
        Self {
            available: counts.available,
            occupied: counts.occupied,
            cleaning: counts.cleaning,
            maintenance: counts.maintenance,
            out_of_order: counts.out_of_order,
            total: counts.total(),
        }
    }
}

impl From<RoomSummary> for RoomSummaryResponse {
    fn from(summary: RoomSummary) -> Self {
        Self {
            room_id: summary.room.id,
            number: summary.room.number,
            floor: summary.room.floor,
            status: summary.room.status,
            room_type: RoomTypeResponse::from(summary.room_type),
            nights: summary.nights,
            total_price: summary.total_price,
        }
    }
}

// ============================================================================
// Booking Mappers
// ============================================================================

impl From<&Booking> for BookingResponse {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            reference: booking.reference.clone(),
            customer_id: booking.customer_id,
            room_id: booking.room_id,
            status: booking.status,
            check_in: booking.stay.check_in(),
            check_out: booking.stay.check_out(),
            guests: booking.guests,
            nights: booking.nights,
            total_amount: booking.total_amount,
            special_requests: booking.special_requests.clone(),
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self::from(&booking)
    }
}

impl From<Vec<BookingStatusStats>> for BookingStatsResponse {
    fn from(stats: Vec<BookingStatusStats>) -> Self {
        let total_bookings = stats.iter().map(|s| s.count).sum();
        let total_revenue = stats
            .iter()
            .filter(|s| s.status != BookingStatus::Cancelled)
            .map(|s| s.revenue)
            .sum::<Decimal>();

        Self {
            by_status: stats
                .into_iter()
                .map(|s| BookingStatusStatsResponse {
                    status: s.status,
                    count: s.count,
                    revenue: s.revenue,
                })
                .collect(),
            total_bookings,
            total_revenue,
        }
    }
}
