//! Transactional port for the booking write path
//!
//! Creating a booking and moving it through its lifecycle touch the room and
//! booking tables together. A [`BookingTransaction`] groups those writes: the
//! implementation either commits all of them or none. Dropping a transaction
//! without committing rolls it back.

use async_trait::async_trait;

use crate::entities::{BookedStay, Booking, NewBooking, Room, RoomType};
use crate::traits::RepoResult;
use crate::value_objects::{BookingStatus, RecordId, ReferenceCode, RoomStatus, StayDates};

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Open a transaction
    async fn begin(&self) -> RepoResult<Box<dyn BookingTransaction>>;

    /// Cheap connectivity probe for readiness checks
    async fn ping(&self) -> RepoResult<()>;
}

#[async_trait]
pub trait BookingTransaction: Send {
    /// Lock the room row for the rest of the transaction and load it with its type.
    ///
    /// Concurrent transactions locking the same room serialize here.
    async fn lock_room(&mut self, room_id: RecordId) -> RepoResult<Option<(Room, RoomType)>>;

    /// Whether the customer exists
    async fn customer_exists(&mut self, customer_id: RecordId) -> RepoResult<bool>;

    /// Active stays on the room overlapping `window`, as seen inside the transaction
    async fn active_stays_for_room(
        &mut self,
        room_id: RecordId,
        window: &StayDates,
    ) -> RepoResult<Vec<BookedStay>>;

    /// Insert a confirmed booking and return its new id
    async fn insert_booking(&mut self, booking: &NewBooking) -> RepoResult<RecordId>;

    /// Store the reference code derived from the booking id
    async fn assign_reference(
        &mut self,
        booking_id: RecordId,
        reference: &ReferenceCode,
    ) -> RepoResult<()>;

    /// Lock the booking row and load it
    async fn lock_booking(&mut self, booking_id: RecordId) -> RepoResult<Option<Booking>>;

    /// Set the booking status and bump `updated_at`
    async fn update_booking_status(
        &mut self,
        booking_id: RecordId,
        status: BookingStatus,
    ) -> RepoResult<()>;

    /// Set the room's cached status
    async fn update_room_status(&mut self, room_id: RecordId, status: RoomStatus)
        -> RepoResult<()>;

    /// Read a booking as seen inside the transaction
    async fn find_booking(&mut self, booking_id: RecordId) -> RepoResult<Option<Booking>>;

    /// Make every write visible
    async fn commit(self: Box<Self>) -> RepoResult<()>;

    /// Discard every write
    async fn rollback(self: Box<Self>) -> RepoResult<()>;
}
