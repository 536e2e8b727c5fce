//! Transactions over the in-memory store

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, instrument};

use hotel_core::entities::{is_room_free, BookedStay, Booking, NewBooking, Room, RoomType};
use hotel_core::error::DomainError;
use hotel_core::traits::{BookingTransaction, RepoResult};
use hotel_core::value_objects::{BookingStatus, RecordId, ReferenceCode, RoomStatus, StayDates};

use super::{FailPoint, MemoryState};

/// A transaction over [`MemoryStore`](super::MemoryStore).
///
/// Holds the store lock until it is committed, rolled back, or dropped.
/// Writes go to `staged` and replace the shared state only on commit.
pub struct MemoryTransaction {
    guard: OwnedMutexGuard<MemoryState>,
    staged: MemoryState,
    fail_point: Arc<Mutex<Option<FailPoint>>>,
}

impl MemoryTransaction {
    pub(crate) fn new(
        guard: OwnedMutexGuard<MemoryState>,
        fail_point: Arc<Mutex<Option<FailPoint>>>,
    ) -> Self {
        let staged = guard.clone();
        Self {
            guard,
            staged,
            fail_point,
        }
    }

    async fn check(&self, point: FailPoint) -> RepoResult<()> {
        let mut armed = self.fail_point.lock().await;
        if *armed == Some(point) {
            *armed = None;
            return Err(DomainError::DatabaseError(format!(
                "injected failure at {point:?}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl BookingTransaction for MemoryTransaction {
    async fn lock_room(&mut self, room_id: RecordId) -> RepoResult<Option<(Room, RoomType)>> {
        self.staged.room_with_type(room_id)
    }

    async fn customer_exists(&mut self, customer_id: RecordId) -> RepoResult<bool> {
        Ok(self.staged.users.contains_key(&customer_id))
    }

    async fn active_stays_for_room(
        &mut self,
        room_id: RecordId,
        window: &StayDates,
    ) -> RepoResult<Vec<BookedStay>> {
        Ok(self
            .staged
            .active_stays(Some(room_id), window)
            .into_iter()
            .map(|(_, held)| held)
            .collect())
    }

    #[instrument(skip(self, booking), fields(room_id = %booking.room_id, stay = %booking.stay))]
    async fn insert_booking(&mut self, booking: &NewBooking) -> RepoResult<RecordId> {
        self.check(FailPoint::InsertBooking).await?;

        if !self.staged.rooms.contains_key(&booking.room_id) {
            return Err(DomainError::RoomNotFound(booking.room_id));
        }
        if !self.staged.users.contains_key(&booking.customer_id) {
            return Err(DomainError::CustomerNotFound(booking.customer_id));
        }

        // Same guarantee as the exclusion constraint in the SQL schema
        let held: Vec<BookedStay> = self
            .staged
            .active_stays(Some(booking.room_id), &booking.stay)
            .into_iter()
            .map(|(_, held)| held)
            .collect();
        if !is_room_free(&held, &booking.stay, None) {
            return Err(DomainError::RoomUnavailable(booking.room_id));
        }

        let id = self.staged.next_id();
        let now = Utc::now();
        self.staged.bookings.insert(
            id,
            Booking {
                id,
                reference: ReferenceCode::from_booking_id(id),
                customer_id: booking.customer_id,
                room_id: booking.room_id,
                status: booking.initial_status(),
                stay: booking.stay,
                guests: booking.guests,
                nights: booking.nights,
                total_amount: booking.total_amount,
                special_requests: booking.special_requests.clone(),
                created_at: now,
                updated_at: now,
            },
        );

        debug!(booking_id = %id, "Booking staged");
        Ok(id)
    }

    async fn assign_reference(
        &mut self,
        booking_id: RecordId,
        reference: &ReferenceCode,
    ) -> RepoResult<()> {
        self.check(FailPoint::AssignReference).await?;
        let booking = self
            .staged
            .bookings
            .get_mut(&booking_id)
            .ok_or_else(|| DomainError::BookingNotFound(booking_id.to_string()))?;
        booking.reference = reference.clone();
        Ok(())
    }

    async fn lock_booking(&mut self, booking_id: RecordId) -> RepoResult<Option<Booking>> {
        Ok(self.staged.bookings.get(&booking_id).cloned())
    }

    async fn update_booking_status(
        &mut self,
        booking_id: RecordId,
        status: BookingStatus,
    ) -> RepoResult<()> {
        self.check(FailPoint::UpdateBookingStatus).await?;
        let booking = self
            .staged
            .bookings
            .get_mut(&booking_id)
            .ok_or_else(|| DomainError::BookingNotFound(booking_id.to_string()))?;
        booking.status = status;
        booking.updated_at = Utc::now();
        Ok(())
    }

    async fn update_room_status(
        &mut self,
        room_id: RecordId,
        status: RoomStatus,
    ) -> RepoResult<()> {
        self.check(FailPoint::UpdateRoomStatus).await?;
        self.staged.set_room_status(room_id, status)
    }

    async fn find_booking(&mut self, booking_id: RecordId) -> RepoResult<Option<Booking>> {
        Ok(self.staged.bookings.get(&booking_id).cloned())
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        self.check(FailPoint::Commit).await?;
        let Self {
            mut guard, staged, ..
        } = *self;
        *guard = staged;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> RepoResult<()> {
        Ok(())
    }
}
