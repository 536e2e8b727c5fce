//! # hotel-db
//!
//! Storage layer implementing the repository traits and the booking
//! transaction port defined in `hotel-core`.
//!
//! ## Overview
//!
//! - Connection pool management and runtime migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - PostgreSQL repositories and [`PgBookingStore`]
//! - [`MemoryStore`], an in-process implementation of the same traits
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hotel_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use hotel_db::repositories::PgRoomRepository;
//! use hotel_core::traits::RoomRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool, "crates/hotel-db/migrations").await?;
//!     let rooms = PgRoomRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{FailPoint, MemoryStore, MemoryTransaction};
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgBookingRepository, PgBookingStore, PgBookingTransaction, PgRoomRepository,
    PgRoomTypeRepository, PgUserRepository,
};
