//! In-memory implementation of every repository trait and of [`BookingStore`]
//!
//! Used by the service and API test suites. All data lives behind one
//! `tokio::sync::Mutex`. A transaction holds the lock for its whole lifetime
//! and works on a staged copy that is published on commit, so writes are
//! all-or-nothing and transactions are serializable.
//!
//! The store enforces the same constraints the SQL schema does: unique room
//! numbers, restricted deletes, and no overlapping active stays per room.

mod transaction;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::instrument;

use hotel_core::entities::{
    BookedStay, Booking, BookingStatusStats, Room, RoomStatusCounts, RoomType, User,
};
use hotel_core::error::DomainError;
use hotel_core::traits::{
    BookingQuery, BookingRepository, BookingStore, BookingTransaction, RepoResult, RoomFilter,
    RoomRepository, RoomTypeRepository, UserRepository,
};
use hotel_core::value_objects::{BookingStatus, RecordId, ReferenceCode, Role, RoomStatus, StayDates};
use rust_decimal::Decimal;

pub use transaction::MemoryTransaction;

/// Write step at which an injected failure fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    InsertBooking,
    AssignReference,
    UpdateBookingStatus,
    UpdateRoomStatus,
    Commit,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryState {
    last_id: i64,
    users: BTreeMap<RecordId, User>,
    room_types: BTreeMap<RecordId, RoomType>,
    rooms: BTreeMap<RecordId, Room>,
    bookings: BTreeMap<RecordId, Booking>,
}

impl MemoryState {
    /// Ids are drawn from one sequence so they never collide across tables
    fn next_id(&mut self) -> RecordId {
        self.last_id += 1;
        RecordId::new(self.last_id)
    }

    fn active_stays(&self, room_id: Option<RecordId>, window: &StayDates) -> Vec<(RecordId, BookedStay)> {
        let mut stays: Vec<_> = self
            .bookings
            .values()
            .filter(|b| b.is_active())
            .filter(|b| room_id.is_none_or(|id| b.room_id == id))
            .filter(|b| b.stay.overlaps(window))
            .map(|b| (b.room_id, b.booked_stay()))
            .collect();
        stays.sort_by_key(|(_, held)| held.stay.check_in());
        stays
    }

    fn room_with_type(&self, room_id: RecordId) -> RepoResult<Option<(Room, RoomType)>> {
        let Some(room) = self.rooms.get(&room_id) else {
            return Ok(None);
        };
        let room_type = self.room_types.get(&room.room_type_id).ok_or_else(|| {
            DomainError::InternalError(format!("room {room_id} references a missing room type"))
        })?;
        Ok(Some((room.clone(), room_type.clone())))
    }

    fn set_room_status(&mut self, room_id: RecordId, status: RoomStatus) -> RepoResult<()> {
        let room = self
            .rooms
            .get_mut(&room_id)
            .ok_or(DomainError::RoomNotFound(room_id))?;
        room.status = status;
        room.updated_at = Utc::now();
        Ok(())
    }
}

/// In-memory store
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
    fail_point: Arc<Mutex<Option<FailPoint>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user account
    pub async fn add_user(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        role: Role,
    ) -> User {
        let mut state = self.state.lock().await;
        let user = User {
            id: state.next_id(),
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone: None,
            role,
            created_at: Utc::now(),
        };
        state.users.insert(user.id, user.clone());
        user
    }

    /// Make the next transaction that reaches `point` fail with a database error.
    ///
    /// The fail point is consumed when it fires.
    pub async fn fail_next(&self, point: FailPoint) {
        *self.fail_point.lock().await = Some(point);
    }

    /// Number of bookings stored, in any status
    pub async fn booking_count(&self) -> usize {
        self.state.lock().await.bookings.len()
    }
}

// ============================================================================
// Repositories
// ============================================================================

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>> {
        Ok(self.state.lock().await.users.get(&id).cloned())
    }
}

#[async_trait]
impl RoomTypeRepository for MemoryStore {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<RoomType>> {
        Ok(self.state.lock().await.room_types.get(&id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<RoomType>> {
        let state = self.state.lock().await;
        let mut types: Vec<_> = state.room_types.values().cloned().collect();
        types.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(types)
    }

    #[instrument(skip(self, room_type), fields(name = %room_type.name))]
    async fn create(&self, room_type: &RoomType) -> RepoResult<RoomType> {
        let mut state = self.state.lock().await;
        let mut created = room_type.clone();
        created.id = state.next_id();
        state.room_types.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, room_type: &RoomType) -> RepoResult<()> {
        let mut state = self.state.lock().await;
        let stored = state
            .room_types
            .get_mut(&room_type.id)
            .ok_or(DomainError::RoomTypeNotFound(room_type.id))?;
        *stored = RoomType {
            created_at: stored.created_at,
            updated_at: Utc::now(),
            ..room_type.clone()
        };
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let mut state = self.state.lock().await;
        if state.rooms.values().any(|r| r.room_type_id == id) {
            return Err(DomainError::RoomTypeInUse(id));
        }
        state
            .room_types
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::RoomTypeNotFound(id))
    }
}

#[async_trait]
impl RoomRepository for MemoryStore {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Room>> {
        Ok(self.state.lock().await.rooms.get(&id).cloned())
    }

    async fn list(&self, filter: RoomFilter) -> RepoResult<Vec<Room>> {
        let state = self.state.lock().await;
        let mut rooms: Vec<_> = state
            .rooms
            .values()
            .filter(|r| filter.room_type_id.is_none_or(|id| r.room_type_id == id))
            .filter(|r| filter.status.is_none_or(|s| r.status == s))
            .cloned()
            .collect();
        rooms.sort_by(|a, b| a.number.cmp(&b.number));
        Ok(rooms)
    }

    async fn list_bookable(
        &self,
        guests: i32,
        room_type_id: Option<RecordId>,
    ) -> RepoResult<Vec<(Room, RoomType)>> {
        let state = self.state.lock().await;
        let mut rooms = Vec::new();
        for room in state.rooms.values() {
            if !room.is_bookable() || room_type_id.is_some_and(|id| room.room_type_id != id) {
                continue;
            }
            if let Some((room, room_type)) = state.room_with_type(room.id)? {
                if room_type.fits(guests) {
                    rooms.push((room, room_type));
                }
            }
        }
        rooms.sort_by(|(ra, ta), (rb, tb)| {
            ta.price_night
                .cmp(&tb.price_night)
                .then_with(|| ra.number.cmp(&rb.number))
        });
        Ok(rooms)
    }

    async fn count(&self, room_type_id: Option<RecordId>) -> RepoResult<i64> {
        let state = self.state.lock().await;
        let count = state
            .rooms
            .values()
            .filter(|r| room_type_id.is_none_or(|id| r.room_type_id == id))
            .count();
        Ok(count as i64)
    }

    #[instrument(skip(self, room), fields(number = %room.number))]
    async fn create(&self, room: &Room) -> RepoResult<Room> {
        let mut state = self.state.lock().await;
        if !state.room_types.contains_key(&room.room_type_id) {
            return Err(DomainError::RoomTypeNotFound(room.room_type_id));
        }
        if state.rooms.values().any(|r| r.number == room.number) {
            return Err(DomainError::RoomNumberExists(room.number.clone()));
        }
        let mut created = room.clone();
        created.id = state.next_id();
        state.rooms.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, room: &Room) -> RepoResult<()> {
        let mut state = self.state.lock().await;
        if !state.room_types.contains_key(&room.room_type_id) {
            return Err(DomainError::RoomTypeNotFound(room.room_type_id));
        }
        if state
            .rooms
            .values()
            .any(|r| r.number == room.number && r.id != room.id)
        {
            return Err(DomainError::RoomNumberExists(room.number.clone()));
        }
        let stored = state
            .rooms
            .get_mut(&room.id)
            .ok_or(DomainError::RoomNotFound(room.id))?;
        *stored = Room {
            created_at: stored.created_at,
            updated_at: Utc::now(),
            ..room.clone()
        };
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let mut state = self.state.lock().await;
        if state.bookings.values().any(|b| b.room_id == id) {
            return Err(DomainError::RoomHasBookings(id));
        }
        state
            .rooms
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::RoomNotFound(id))
    }

    async fn set_status(&self, id: RecordId, status: RoomStatus) -> RepoResult<()> {
        self.state.lock().await.set_room_status(id, status)
    }

    async fn status_counts(&self) -> RepoResult<RoomStatusCounts> {
        let state = self.state.lock().await;
        let mut counts = RoomStatusCounts::default();
        for room in state.rooms.values() {
            counts.add(room.status, 1);
        }
        Ok(counts)
    }
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Booking>> {
        Ok(self.state.lock().await.bookings.get(&id).cloned())
    }

    async fn find_by_reference(&self, reference: &ReferenceCode) -> RepoResult<Option<Booking>> {
        let state = self.state.lock().await;
        Ok(state
            .bookings
            .values()
            .find(|b| &b.reference == reference)
            .cloned())
    }

    async fn list(&self, query: &BookingQuery) -> RepoResult<(Vec<Booking>, i64)> {
        let offset = query.offset()?;
        let state = self.state.lock().await;
        let mut matching: Vec<_> = state
            .bookings
            .values()
            .filter(|b| query.matches(b))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(query.limit).unwrap_or(0))
            .collect();
        Ok((page, total))
    }

    async fn active_stays_for_room(
        &self,
        room_id: RecordId,
        window: &StayDates,
    ) -> RepoResult<Vec<BookedStay>> {
        let state = self.state.lock().await;
        Ok(state
            .active_stays(Some(room_id), window)
            .into_iter()
            .map(|(_, held)| held)
            .collect())
    }

    async fn active_stays_in_window(
        &self,
        window: &StayDates,
    ) -> RepoResult<Vec<(RecordId, BookedStay)>> {
        Ok(self.state.lock().await.active_stays(None, window))
    }

    async fn stats(&self) -> RepoResult<Vec<BookingStatusStats>> {
        let state = self.state.lock().await;
        let stats = BookingStatus::ALL
            .into_iter()
            .filter_map(|status| {
                let (count, revenue) = state
                    .bookings
                    .values()
                    .filter(|b| b.status == status)
                    .fold((0i64, Decimal::ZERO), |(n, sum), b| (n + 1, sum + b.total_amount));
                (count > 0).then_some(BookingStatusStats {
                    status,
                    count,
                    revenue,
                })
            })
            .collect();
        Ok(stats)
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn begin(&self) -> RepoResult<Box<dyn BookingTransaction>> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        Ok(Box::new(MemoryTransaction::new(
            guard,
            Arc::clone(&self.fail_point),
        )))
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
