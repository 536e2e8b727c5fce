//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL or the in-memory store).

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{
    BookedStay, Booking, BookingStatusStats, Room, RoomStatusCounts, RoomType, User,
};
use crate::error::DomainError;
use crate::value_objects::{BookingStatus, RecordId, ReferenceCode, RoomStatus, StayDates};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>>;
}

// ============================================================================
// Room Type Repository
// ============================================================================

#[async_trait]
pub trait RoomTypeRepository: Send + Sync {
    /// Find room type by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<RoomType>>;

    /// All room types ordered by name
    async fn list(&self) -> RepoResult<Vec<RoomType>>;

    /// Insert a room type and return it with its assigned id
    async fn create(&self, room_type: &RoomType) -> RepoResult<RoomType>;

    /// Update name, capacity, price, and location
    async fn update(&self, room_type: &RoomType) -> RepoResult<()>;

    /// Delete a room type; refused with `RoomTypeInUse` while rooms reference it
    async fn delete(&self, id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// Room Repository
// ============================================================================

/// Filters for listing rooms
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomFilter {
    pub room_type_id: Option<RecordId>,
    pub status: Option<RoomStatus>,
}

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find room by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Room>>;

    /// Rooms matching the filter, ordered by room number
    async fn list(&self, filter: RoomFilter) -> RepoResult<Vec<Room>>;

    /// Rooms that can host `guests` and are not flagged maintenance/out of order,
    /// with their type, ordered by nightly price then room number
    async fn list_bookable(
        &self,
        guests: i32,
        room_type_id: Option<RecordId>,
    ) -> RepoResult<Vec<(Room, RoomType)>>;

    /// Count of rooms (optionally of one type), regardless of status
    async fn count(&self, room_type_id: Option<RecordId>) -> RepoResult<i64>;

    /// Insert a room and return it with its assigned id
    async fn create(&self, room: &Room) -> RepoResult<Room>;

    /// Update number, floor, room type, and status
    async fn update(&self, room: &Room) -> RepoResult<()>;

    /// Delete a room; refused with `RoomHasBookings` when any booking references it
    async fn delete(&self, id: RecordId) -> RepoResult<()>;

    /// Manual status override by staff
    async fn set_status(&self, id: RecordId, status: RoomStatus) -> RepoResult<()>;

    /// Number of rooms in each status
    async fn status_counts(&self) -> RepoResult<RoomStatusCounts>;
}

// ============================================================================
// Booking Repository
// ============================================================================

/// Filters and paging for listing bookings
#[derive(Debug, Clone, Copy)]
pub struct BookingQuery {
    pub customer_id: Option<RecordId>,
    pub room_id: Option<RecordId>,
    pub status: Option<BookingStatus>,
    pub check_in_from: Option<NaiveDate>,
    pub check_in_to: Option<NaiveDate>,
    /// 1-based page number
    pub page: i64,
    pub limit: i64,
}

impl BookingQuery {
    /// Rows to skip; fails when the page lies beyond any representable offset
    pub fn offset(&self) -> RepoResult<i64> {
        (self.page.max(1) - 1)
            .checked_mul(self.limit)
            .ok_or_else(|| {
                DomainError::ValidationError(format!("page {} is out of range", self.page))
            })
    }

    /// Whether a booking passes every filter (paging aside)
    pub fn matches(&self, booking: &Booking) -> bool {
        self.customer_id.is_none_or(|id| booking.customer_id == id)
            && self.room_id.is_none_or(|id| booking.room_id == id)
            && self.status.is_none_or(|s| booking.status == s)
            && self
                .check_in_from
                .is_none_or(|d| booking.stay.check_in() >= d)
            && self.check_in_to.is_none_or(|d| booking.stay.check_in() <= d)
    }
}

impl Default for BookingQuery {
    fn default() -> Self {
        Self {
            customer_id: None,
            room_id: None,
            status: None,
            check_in_from: None,
            check_in_to: None,
            page: 1,
            limit: 10,
        }
    }
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find booking by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Booking>>;

    /// Find booking by its reference code
    async fn find_by_reference(&self, reference: &ReferenceCode) -> RepoResult<Option<Booking>>;

    /// One page of matching bookings, newest first, plus the total match count
    async fn list(&self, query: &BookingQuery) -> RepoResult<(Vec<Booking>, i64)>;

    /// Active (non-cancelled) stays on one room that overlap `window`
    async fn active_stays_for_room(
        &self,
        room_id: RecordId,
        window: &StayDates,
    ) -> RepoResult<Vec<BookedStay>>;

    /// Active stays on any room that overlap `window`, keyed by room id
    async fn active_stays_in_window(
        &self,
        window: &StayDates,
    ) -> RepoResult<Vec<(RecordId, BookedStay)>>;

    /// Count and revenue per status
    async fn stats(&self) -> RepoResult<Vec<BookingStatusStats>>;
}
