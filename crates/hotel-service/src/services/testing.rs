//! Shared fixture for service tests: an in-memory store, one customer, one
//! employee, and a clock pinned to 2030-01-01.

use std::sync::Arc;

use chrono::NaiveDate;
use hotel_common::auth::JwtService;
use hotel_core::entities::{Room, RoomType};
use hotel_core::{Actor, FixedClock, Location, RecordId, Role, RoomStatus, StayDates};
use hotel_db::MemoryStore;
use rust_decimal::Decimal;

use super::booking::BookingService;
use super::context::{ServiceContext, ServiceContextBuilder};
use crate::dto::CreateBookingRequest;

pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, month, day).unwrap()
}

pub struct Fixture {
    pub ctx: ServiceContext,
    pub store: Arc<MemoryStore>,
    pub customer: RecordId,
    pub staff: RecordId,
    pub today: NaiveDate,
}

impl Fixture {
    pub async fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let customer = store
            .add_user("guest@example.com", "Ada", "Guest", Role::Customer)
            .await
            .id;
        let staff = store
            .add_user("desk@example.com", "Bo", "Desk", Role::Employee)
            .await
            .id;
        let today = date(1, 1);

        let ctx = ServiceContextBuilder::new()
            .store(store.clone())
            .jwt_service(Arc::new(JwtService::new("test-secret", 3600)))
            .clock(Arc::new(FixedClock(today)))
            .build()
            .unwrap();

        Self {
            ctx,
            store,
            customer,
            staff,
            today,
        }
    }

    pub fn customer_actor(&self) -> Actor {
        Actor::customer(self.customer)
    }

    pub fn staff_actor(&self) -> Actor {
        Actor::employee(self.staff)
    }

    pub fn booking_service(&self) -> BookingService<'_> {
        BookingService::new(&self.ctx)
    }

    pub async fn add_customer(&self, email: &str) -> RecordId {
        self.store
            .add_user(email, "Extra", "Guest", Role::Customer)
            .await
            .id
    }

    /// A room with its own room type
    pub async fn room(&self, number: &str, capacity: i32, price_night: Decimal) -> RecordId {
        let room_type = self
            .ctx
            .room_type_repo()
            .create(&RoomType::new(
                format!("Type {number}"),
                capacity,
                price_night,
                Location::Hotel,
            ))
            .await
            .unwrap();
        self.ctx
            .room_repo()
            .create(&Room::new(number.to_string(), 1, room_type.id))
            .await
            .unwrap()
            .id
    }

    /// Book `room` for the fixture customer, one guest
    pub async fn book(&self, room: RecordId, stay: StayDates) -> RecordId {
        self.booking_service()
            .create_booking(
                self.customer_actor(),
                CreateBookingRequest {
                    room_id: room,
                    check_in: stay.check_in(),
                    check_out: stay.check_out(),
                    guests: 1,
                    special_requests: None,
                    customer_id: None,
                },
            )
            .await
            .unwrap()
            .id
    }

    pub async fn set_room_status(&self, room: RecordId, status: RoomStatus) {
        self.ctx.room_repo().set_status(room, status).await.unwrap();
    }

    pub async fn room_status(&self, room: RecordId) -> RoomStatus {
        self.ctx
            .room_repo()
            .find_by_id(room)
            .await
            .unwrap()
            .unwrap()
            .status
    }

    pub async fn room_type_of(&self, room: RecordId) -> RecordId {
        self.ctx
            .room_repo()
            .find_by_id(room)
            .await
            .unwrap()
            .unwrap()
            .room_type_id
    }
}
