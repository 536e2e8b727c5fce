//! Booking database models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for bookings table
#[derive(Debug, Clone, FromRow)]
pub struct BookingModel {
    pub id: i64,
    pub ref_code: Option<String>,
    pub customer_id: i64,
    pub room_id: i64,
    pub status: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub nights: i32,
    pub total_amount: Decimal,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Interval held by an active booking
#[derive(Debug, Clone, FromRow)]
pub struct BookedStayModel {
    pub id: i64,
    pub room_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// One row of `GROUP BY status` over bookings
#[derive(Debug, Clone, FromRow)]
pub struct BookingStatsModel {
    pub status: String,
    pub count: i64,
    pub revenue: Decimal,
}
