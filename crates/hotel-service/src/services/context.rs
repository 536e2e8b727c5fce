//! Service context - dependency container for services
//!
//! Holds the repositories, the booking transaction store, the clock, and the
//! booking rules every service reads.

use std::sync::Arc;

use hotel_common::auth::JwtService;
use hotel_common::config::BookingConfig;
use hotel_core::traits::{
    BookingRepository, BookingStore, RoomRepository, RoomTypeRepository, UserRepository,
};
use hotel_core::value_objects::{Clock, SystemClock};
use hotel_db::{
    PgBookingRepository, PgBookingStore, PgPool, PgRoomRepository, PgRoomTypeRepository,
    PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Booking rules that vary per deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPolicy {
    /// Longest stay a single booking may cover
    pub max_stay_nights: i64,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self::from(&BookingConfig::default())
    }
}

impl From<&BookingConfig> for BookingPolicy {
    fn from(config: &BookingConfig) -> Self {
        Self {
            max_stay_nights: config.max_stay_nights,
        }
    }
}

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    room_type_repo: Arc<dyn RoomTypeRepository>,
    room_repo: Arc<dyn RoomRepository>,
    booking_repo: Arc<dyn BookingRepository>,

    // Transactional write path
    booking_store: Arc<dyn BookingStore>,

    // Services
    jwt_service: Arc<JwtService>,
    clock: Arc<dyn Clock>,
    policy: BookingPolicy,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        room_type_repo: Arc<dyn RoomTypeRepository>,
        room_repo: Arc<dyn RoomRepository>,
        booking_repo: Arc<dyn BookingRepository>,
        booking_store: Arc<dyn BookingStore>,
        jwt_service: Arc<JwtService>,
        clock: Arc<dyn Clock>,
        policy: BookingPolicy,
    ) -> Self {
        Self {
            user_repo,
            room_type_repo,
            room_repo,
            booking_repo,
            booking_store,
            jwt_service,
            clock,
            policy,
        }
    }

    /// Wire every PostgreSQL repository onto one pool
    pub fn postgres(pool: PgPool, jwt_service: Arc<JwtService>, policy: BookingPolicy) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgRoomTypeRepository::new(pool.clone())),
            Arc::new(PgRoomRepository::new(pool.clone())),
            Arc::new(PgBookingRepository::new(pool.clone())),
            Arc::new(PgBookingStore::new(pool)),
            jwt_service,
            Arc::new(SystemClock),
            policy,
        )
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the room type repository
    pub fn room_type_repo(&self) -> &dyn RoomTypeRepository {
        self.room_type_repo.as_ref()
    }

    /// Get the room repository
    pub fn room_repo(&self) -> &dyn RoomRepository {
        self.room_repo.as_ref()
    }

    /// Get the booking repository
    pub fn booking_repo(&self) -> &dyn BookingRepository {
        self.booking_repo.as_ref()
    }

    /// Get the booking transaction store
    pub fn booking_store(&self) -> &dyn BookingStore {
        self.booking_store.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Today's date as seen by booking rules
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    pub fn policy(&self) -> BookingPolicy {
        self.policy
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("booking_store", &"...")
            .field("policy", &self.policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    room_type_repo: Option<Arc<dyn RoomTypeRepository>>,
    room_repo: Option<Arc<dyn RoomRepository>>,
    booking_repo: Option<Arc<dyn BookingRepository>>,
    booking_store: Option<Arc<dyn BookingStore>>,
    jwt_service: Option<Arc<JwtService>>,
    clock: Option<Arc<dyn Clock>>,
    policy: Option<BookingPolicy>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn room_type_repo(mut self, repo: Arc<dyn RoomTypeRepository>) -> Self {
        self.room_type_repo = Some(repo);
        self
    }

    pub fn room_repo(mut self, repo: Arc<dyn RoomRepository>) -> Self {
        self.room_repo = Some(repo);
        self
    }

    pub fn booking_repo(mut self, repo: Arc<dyn BookingRepository>) -> Self {
        self.booking_repo = Some(repo);
        self
    }

    pub fn booking_store(mut self, store: Arc<dyn BookingStore>) -> Self {
        self.booking_store = Some(store);
        self
    }

    /// Use one backend for every repository and the booking store
    pub fn store<S>(self, store: Arc<S>) -> Self
    where
        S: UserRepository
            + RoomTypeRepository
            + RoomRepository
            + BookingRepository
            + BookingStore
            + 'static,
    {
        self.user_repo(store.clone())
            .room_type_repo(store.clone())
            .room_repo(store.clone())
            .booking_repo(store.clone())
            .booking_store(store)
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Defaults to the system clock
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn policy(mut self, policy: BookingPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.room_type_repo
                .ok_or_else(|| ServiceError::validation("room_type_repo is required"))?,
            self.room_repo
                .ok_or_else(|| ServiceError::validation("room_repo is required"))?,
            self.booking_repo
                .ok_or_else(|| ServiceError::validation("booking_repo is required"))?,
            self.booking_store
                .ok_or_else(|| ServiceError::validation("booking_store is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            self.policy.unwrap_or_default(),
        ))
    }
}
