//! Availability service
//!
//! Answers "which rooms can host this party for these nights". A room is
//! offered when its type is large enough, it is not flagged maintenance or
//! out of order, and no active booking overlaps the stay. The cached
//! `occupied`/`cleaning` status never hides a room.

use std::collections::HashMap;

use hotel_core::entities::{is_room_free, BookedStay, RoomSummary, MAX_GUESTS, MIN_GUESTS};
use hotel_core::{DomainError, RecordId, StayDates};
use tracing::{debug, instrument};

use crate::dto::{
    AvailabilityQuery, AvailabilitySummaryQuery, AvailabilitySummaryResponse,
    RoomAvailabilityQuery, RoomAvailabilityResponse, RoomSummaryResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Availability service
pub struct AvailabilityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AvailabilityService<'a> {
    /// Create a new AvailabilityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Rooms free for `stay` that fit `guests`, cheapest first then by room number
    #[instrument(skip(self, stay), fields(stay = %stay))]
    pub async fn find_available_rooms(
        &self,
        stay: StayDates,
        guests: i32,
        room_type_id: Option<RecordId>,
    ) -> ServiceResult<Vec<RoomSummary>> {
        if !(MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
            return Err(DomainError::ValidationError(format!(
                "guests must be between {MIN_GUESTS} and {MAX_GUESTS}"
            ))
            .into());
        }

        // Already ordered by nightly price, then room number
        let candidates = self
            .ctx
            .room_repo()
            .list_bookable(guests, room_type_id)
            .await?;

        let mut held: HashMap<RecordId, Vec<BookedStay>> = HashMap::new();
        for (room_id, booked) in self.ctx.booking_repo().active_stays_in_window(&stay).await? {
            held.entry(room_id).or_default().push(booked);
        }

        let available: Vec<RoomSummary> = candidates
            .into_iter()
            .filter(|(room, _)| is_room_free(held.get(&room.id).into_iter().flatten(), &stay, None))
            .map(|(room, room_type)| RoomSummary {
                nights: stay.nights(),
                total_price: room_type.quote(&stay),
                room,
                room_type,
            })
            .collect();

        debug!(count = available.len(), "Availability search finished");
        Ok(available)
    }

    /// Search endpoint entry point
    pub async fn search(&self, query: AvailabilityQuery) -> ServiceResult<Vec<RoomSummaryResponse>> {
        let stay = StayDates::new(query.check_in, query.check_out)?;
        let rooms = self
            .find_available_rooms(stay, query.guests, query.room_type_id)
            .await?;
        Ok(rooms.into_iter().map(RoomSummaryResponse::from).collect())
    }

    /// Whether no active booking on the room overlaps `stay`, ignoring `exclude`
    #[instrument(skip(self, stay), fields(stay = %stay))]
    pub async fn is_room_free(
        &self,
        room_id: RecordId,
        stay: StayDates,
        exclude: Option<RecordId>,
    ) -> ServiceResult<bool> {
        let held = self
            .ctx
            .booking_repo()
            .active_stays_for_room(room_id, &stay)
            .await?;
        Ok(is_room_free(&held, &stay, exclude))
    }

    /// Availability of one room for a stay
    pub async fn check_room(
        &self,
        room_id: RecordId,
        query: RoomAvailabilityQuery,
    ) -> ServiceResult<RoomAvailabilityResponse> {
        let stay = StayDates::new(query.check_in, query.check_out)?;
        let room = self
            .ctx
            .room_repo()
            .find_by_id(room_id)
            .await?
            .ok_or(DomainError::RoomNotFound(room_id))?;

        let free = self
            .is_room_free(room_id, stay, query.exclude_booking_id)
            .await?;

        Ok(RoomAvailabilityResponse {
            room_id,
            check_in: stay.check_in(),
            check_out: stay.check_out(),
            free,
            status: room.status,
            available: free && room.is_bookable(),
        })
    }

    /// Count of rooms available for a stay against the total, optionally per type
    pub async fn summary(
        &self,
        query: AvailabilitySummaryQuery,
    ) -> ServiceResult<AvailabilitySummaryResponse> {
        let stay = StayDates::new(query.check_in, query.check_out)?;
        if let Some(id) = query.room_type_id {
            self.ctx
                .room_type_repo()
                .find_by_id(id)
                .await?
                .ok_or(DomainError::RoomTypeNotFound(id))?;
        }

        let available = self
            .find_available_rooms(stay, MIN_GUESTS, query.room_type_id)
            .await?;
        let total_rooms = self.ctx.room_repo().count(query.room_type_id).await?;

        Ok(AvailabilitySummaryResponse {
            check_in: stay.check_in(),
            check_out: stay.check_out(),
            nights: stay.nights(),
            room_type_id: query.room_type_id,
            available_rooms: available.len() as i64,
            total_rooms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{date, Fixture};
    use hotel_core::{Actor, RoomStatus};
    use rust_decimal::Decimal;

    fn stay(from: (u32, u32), to: (u32, u32)) -> StayDates {
        StayDates::new(date(from.0, from.1), date(to.0, to.1)).unwrap()
    }

    #[tokio::test]
    async fn test_overlapping_request_is_not_free() {
        let fx = Fixture::new().await;
        let room = fx.room("101", 2, Decimal::new(10000, 2)).await;
        fx.book(room, stay((5, 4), (5, 8))).await;

        let service = AvailabilityService::new(&fx.ctx);
        assert!(!service
            .is_room_free(room, stay((5, 1), (5, 5)), None)
            .await
            .unwrap());
        assert!(service
            .is_room_free(room, stay((5, 1), (5, 4)), None)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_search_orders_by_price_then_number() {
        let fx = Fixture::new().await;
        let suite = fx.room("301", 4, Decimal::new(25000, 2)).await;
        let double_b = fx.room("202", 2, Decimal::new(10000, 2)).await;
        let double_a = fx.room("201", 2, Decimal::new(10000, 2)).await;

        let rooms = AvailabilityService::new(&fx.ctx)
            .find_available_rooms(stay((5, 1), (5, 3)), 2, None)
            .await
            .unwrap();

        let ids: Vec<_> = rooms.iter().map(|r| r.room.id).collect();
        assert_eq!(ids, vec![double_a, double_b, suite]);
        assert_eq!(rooms[0].nights, 2);
        assert_eq!(rooms[0].total_price, Decimal::new(20000, 2));
    }

    #[tokio::test]
    async fn test_search_filters_capacity_and_bookings() {
        let fx = Fixture::new().await;
        let single = fx.room("101", 1, Decimal::new(6000, 2)).await;
        let double = fx.room("102", 2, Decimal::new(9000, 2)).await;
        let booked = fx.room("103", 2, Decimal::new(9000, 2)).await;
        fx.book(booked, stay((5, 2), (5, 6))).await;

        let service = AvailabilityService::new(&fx.ctx);
        let rooms = service
            .find_available_rooms(stay((5, 1), (5, 3)), 2, None)
            .await
            .unwrap();
        let ids: Vec<_> = rooms.iter().map(|r| r.room.id).collect();
        assert_eq!(ids, vec![double]);

        let rooms = service
            .find_available_rooms(stay((5, 6), (5, 7)), 1, None)
            .await
            .unwrap();
        let ids: Vec<_> = rooms.iter().map(|r| r.room.id).collect();
        assert_eq!(ids, vec![single, double, booked]);
    }

    #[tokio::test]
    async fn test_maintenance_hides_room_but_occupied_does_not() {
        let fx = Fixture::new().await;
        let broken = fx.room("101", 2, Decimal::new(10000, 2)).await;
        let occupied = fx.room("102", 2, Decimal::new(10000, 2)).await;
        fx.set_room_status(broken, RoomStatus::Maintenance).await;
        fx.set_room_status(occupied, RoomStatus::Occupied).await;

        let rooms = AvailabilityService::new(&fx.ctx)
            .find_available_rooms(stay((5, 1), (5, 2)), 1, None)
            .await
            .unwrap();
        let ids: Vec<_> = rooms.iter().map(|r| r.room.id).collect();
        assert_eq!(ids, vec![occupied]);
    }

    #[tokio::test]
    async fn test_cancelled_booking_does_not_block() {
        let fx = Fixture::new().await;
        let room = fx.room("101", 2, Decimal::new(10000, 2)).await;
        let booking = fx.book(room, stay((6, 1), (6, 5))).await;
        fx.booking_service()
            .cancel_booking(Actor::employee(fx.staff), booking)
            .await
            .unwrap();

        let free = AvailabilityService::new(&fx.ctx)
            .is_room_free(room, stay((6, 1), (6, 5)), None)
            .await
            .unwrap();
        assert!(free);
    }

    #[tokio::test]
    async fn test_check_room_excludes_own_booking() {
        let fx = Fixture::new().await;
        let room = fx.room("101", 2, Decimal::new(10000, 2)).await;
        let booking = fx.book(room, stay((5, 4), (5, 8))).await;

        let service = AvailabilityService::new(&fx.ctx);
        let query = RoomAvailabilityQuery {
            check_in: date(5, 5),
            check_out: date(5, 7),
            exclude_booking_id: None,
        };
        let response = service.check_room(room, query.clone()).await.unwrap();
        assert!(!response.free);
        assert!(!response.available);

        let query = RoomAvailabilityQuery {
            exclude_booking_id: Some(booking),
            ..query
        };
        let response = service.check_room(room, query).await.unwrap();
        assert!(response.free);
        assert_eq!(response.status, RoomStatus::Occupied);
    }

    #[tokio::test]
    async fn test_summary_counts() {
        let fx = Fixture::new().await;
        let a = fx.room("101", 2, Decimal::new(10000, 2)).await;
        fx.room("102", 2, Decimal::new(10000, 2)).await;
        let c = fx.room("103", 2, Decimal::new(10000, 2)).await;
        fx.book(a, stay((5, 1), (5, 3))).await;
        fx.set_room_status(c, RoomStatus::OutOfOrder).await;

        let summary = AvailabilityService::new(&fx.ctx)
            .summary(AvailabilitySummaryQuery {
                check_in: date(5, 2),
                check_out: date(5, 4),
                room_type_id: None,
            })
            .await
            .unwrap();
        assert_eq!(summary.available_rooms, 1);
        assert_eq!(summary.total_rooms, 3);
        assert_eq!(summary.nights, 2);
    }

    #[tokio::test]
    async fn test_invalid_range_rejected() {
        let fx = Fixture::new().await;
        let err = AvailabilityService::new(&fx.ctx)
            .search(AvailabilityQuery {
                check_in: date(5, 4),
                check_out: date(5, 4),
                guests: 1,
                room_type_id: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DATE_RANGE");
    }

    #[tokio::test]
    async fn test_unknown_room_reported() {
        let fx = Fixture::new().await;
        let err = AvailabilityService::new(&fx.ctx)
            .check_room(
                RecordId::new(999),
                RoomAvailabilityQuery {
                    check_in: date(5, 1),
                    check_out: date(5, 2),
                    exclude_booking_id: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
