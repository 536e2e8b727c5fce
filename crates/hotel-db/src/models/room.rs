//! Room database models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for rooms table
#[derive(Debug, Clone, FromRow)]
pub struct RoomModel {
    pub id: i64,
    pub number: String,
    pub floor: i32,
    pub room_type_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A room joined with its room type (columns of the type are prefixed `rt_`)
#[derive(Debug, Clone, FromRow)]
pub struct RoomWithTypeModel {
    pub id: i64,
    pub number: String,
    pub floor: i32,
    pub room_type_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub rt_name: String,
    pub rt_capacity: i32,
    pub rt_price_night: Decimal,
    pub rt_location: String,
    pub rt_created_at: DateTime<Utc>,
    pub rt_updated_at: DateTime<Utc>,
}

/// One row of `GROUP BY status` over rooms
#[derive(Debug, Clone, FromRow)]
pub struct RoomStatusCountModel {
    pub status: String,
    pub count: i64,
}
