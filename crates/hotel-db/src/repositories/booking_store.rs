//! PostgreSQL implementation of BookingStore
//!
//! Each [`PgBookingTransaction`] owns a `sqlx::Transaction`. The room row is
//! locked with `SELECT ... FOR UPDATE` so concurrent bookings for one room
//! serialize; the `bookings_no_overlap` exclusion constraint backs this up.
//! Dropping an uncommitted transaction rolls it back.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, instrument};

use hotel_core::entities::{BookedStay, Booking, NewBooking, Room, RoomType};
use hotel_core::traits::{BookingStore, BookingTransaction, RepoResult};
use hotel_core::value_objects::{BookingStatus, RecordId, ReferenceCode, RoomStatus, StayDates};

use crate::mappers::{map_rows, room_with_type};
use crate::models::{BookedStayModel, BookingModel, RoomWithTypeModel};

use super::booking::{ACTIVE_STAYS_SELECT, BOOKING_COLUMNS};
use super::error::{booking_not_found, map_db_error, map_overlap_violation, room_not_found};
use super::room::ROOM_WITH_TYPE_SELECT;

/// PostgreSQL implementation of BookingStore
#[derive(Clone)]
pub struct PgBookingStore {
    pool: PgPool,
}

impl PgBookingStore {
    /// Create a new PgBookingStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn begin(&self) -> RepoResult<Box<dyn BookingTransaction>> {
        let tx = self.pool.begin().await.map_err(map_db_error)?;
        Ok(Box::new(PgBookingTransaction { tx }))
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}

/// An open booking transaction
pub struct PgBookingTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl BookingTransaction for PgBookingTransaction {
    #[instrument(skip(self))]
    async fn lock_room(&mut self, room_id: RecordId) -> RepoResult<Option<(Room, RoomType)>> {
        let sql = format!("{ROOM_WITH_TYPE_SELECT} WHERE r.id = $1 FOR UPDATE OF r");
        let row = sqlx::query_as::<_, RoomWithTypeModel>(&sql)
            .bind(room_id.into_inner())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        row.map(room_with_type).transpose()
    }

    #[instrument(skip(self))]
    async fn customer_exists(&mut self, customer_id: RecordId) -> RepoResult<bool> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(customer_id.into_inner())
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn active_stays_for_room(
        &mut self,
        room_id: RecordId,
        window: &StayDates,
    ) -> RepoResult<Vec<BookedStay>> {
        let rows = sqlx::query_as::<_, BookedStayModel>(ACTIVE_STAYS_SELECT)
            .bind(Some(room_id.into_inner()))
            .bind(window.check_in())
            .bind(window.check_out())
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        map_rows(rows)
    }

    #[instrument(skip(self, booking), fields(room_id = %booking.room_id, stay = %booking.stay))]
    async fn insert_booking(&mut self, booking: &NewBooking) -> RepoResult<RecordId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO bookings (customer_id, room_id, status, check_in, check_out, guests,
                                  nights, total_amount, special_requests)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(booking.customer_id.into_inner())
        .bind(booking.room_id.into_inner())
        .bind(booking.initial_status().as_str())
        .bind(booking.stay.check_in())
        .bind(booking.stay.check_out())
        .bind(booking.guests)
        .bind(booking.nights)
        .bind(booking.total_amount)
        .bind(booking.special_requests.as_deref())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| map_overlap_violation(e, booking.room_id))?;

        debug!(booking_id = id, "Booking row inserted");
        Ok(RecordId::new(id))
    }

    #[instrument(skip(self))]
    async fn assign_reference(
        &mut self,
        booking_id: RecordId,
        reference: &ReferenceCode,
    ) -> RepoResult<()> {
        let result = sqlx::query("UPDATE bookings SET ref_code = $2 WHERE id = $1")
            .bind(booking_id.into_inner())
            .bind(reference.as_str())
            .execute(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(booking_not_found(booking_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn lock_booking(&mut self, booking_id: RecordId) -> RepoResult<Option<Booking>> {
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1 FOR UPDATE");
        let row = sqlx::query_as::<_, BookingModel>(&sql)
            .bind(booking_id.into_inner())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        row.map(Booking::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn update_booking_status(
        &mut self,
        booking_id: RecordId,
        status: BookingStatus,
    ) -> RepoResult<()> {
        let result =
            sqlx::query("UPDATE bookings SET status = $2, updated_at = NOW() WHERE id = $1")
                .bind(booking_id.into_inner())
                .bind(status.as_str())
                .execute(&mut *self.tx)
                .await
                .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(booking_not_found(booking_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_room_status(
        &mut self,
        room_id: RecordId,
        status: RoomStatus,
    ) -> RepoResult<()> {
        let result = sqlx::query("UPDATE rooms SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(room_id.into_inner())
            .bind(status.as_str())
            .execute(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(room_not_found(room_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_booking(&mut self, booking_id: RecordId) -> RepoResult<Option<Booking>> {
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1");
        let row = sqlx::query_as::<_, BookingModel>(&sql)
            .bind(booking_id.into_inner())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        row.map(Booking::try_from).transpose()
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        self.tx.commit().await.map_err(map_db_error)
    }

    async fn rollback(self: Box<Self>) -> RepoResult<()> {
        self.tx.rollback().await.map_err(map_db_error)
    }
}
