//! Room type database model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for room_types table
#[derive(Debug, Clone, FromRow)]
pub struct RoomTypeModel {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
    pub price_night: Decimal,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
