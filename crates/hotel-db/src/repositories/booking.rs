//! PostgreSQL implementation of BookingRepository (read side)
//!
//! Writes to bookings go through [`super::PgBookingStore`] so that they
//! share a transaction with the room row they lock.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hotel_core::entities::{BookedStay, Booking, BookingStatusStats};
use hotel_core::traits::{BookingQuery, BookingRepository, RepoResult};
use hotel_core::value_objects::{RecordId, ReferenceCode, StayDates};

use crate::mappers::map_rows;
use crate::models::{BookedStayModel, BookingModel, BookingStatsModel};

use super::error::map_db_error;

pub(crate) const BOOKING_COLUMNS: &str = r#"
    id, ref_code, customer_id, room_id, status, check_in, check_out, guests, nights,
    total_amount, special_requests, created_at, updated_at
"#;

/// Shared WHERE clause of the list and count queries, binds $1-$5
const BOOKING_FILTER: &str = r#"
    WHERE ($1::BIGINT IS NULL OR customer_id = $1)
      AND ($2::BIGINT IS NULL OR room_id = $2)
      AND ($3::TEXT IS NULL OR status = $3)
      AND ($4::DATE IS NULL OR check_in >= $4)
      AND ($5::DATE IS NULL OR check_in <= $5)
"#;

/// Active stays overlapping `[$2, $3)`, optionally on one room ($1)
pub(crate) const ACTIVE_STAYS_SELECT: &str = r#"
    SELECT id, room_id, check_in, check_out
    FROM bookings
    WHERE ($1::BIGINT IS NULL OR room_id = $1)
      AND status <> 'cancelled'
      AND check_in < $3
      AND check_out > $2
    ORDER BY check_in
"#;

/// PostgreSQL implementation of BookingRepository
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    /// Create a new PgBookingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn active_stays(
        &self,
        room_id: Option<RecordId>,
        window: &StayDates,
    ) -> RepoResult<Vec<BookedStayModel>> {
        sqlx::query_as::<_, BookedStayModel>(ACTIVE_STAYS_SELECT)
            .bind(room_id.map(RecordId::into_inner))
            .bind(window.check_in())
            .bind(window.check_out())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Booking>> {
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1");
        let result = sqlx::query_as::<_, BookingModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Booking::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_reference(&self, reference: &ReferenceCode) -> RepoResult<Option<Booking>> {
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE ref_code = $1");
        let result = sqlx::query_as::<_, BookingModel>(&sql)
            .bind(reference.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Booking::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &BookingQuery) -> RepoResult<(Vec<Booking>, i64)> {
        let customer_id = query.customer_id.map(RecordId::into_inner);
        let room_id = query.room_id.map(RecordId::into_inner);
        let status = query.status.map(|s| s.as_str());

        let count_sql = format!("SELECT COUNT(*) FROM bookings {BOOKING_FILTER}");
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(customer_id)
            .bind(room_id)
            .bind(status)
            .bind(query.check_in_from)
            .bind(query.check_in_to)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let sql = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings {BOOKING_FILTER} \
             ORDER BY created_at DESC, id DESC LIMIT $6 OFFSET $7"
        );
        let rows = sqlx::query_as::<_, BookingModel>(&sql)
            .bind(customer_id)
            .bind(room_id)
            .bind(status)
            .bind(query.check_in_from)
            .bind(query.check_in_to)
            .bind(query.limit)
            .bind(query.offset()?)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok((map_rows(rows)?, total))
    }

    #[instrument(skip(self))]
    async fn active_stays_for_room(
        &self,
        room_id: RecordId,
        window: &StayDates,
    ) -> RepoResult<Vec<BookedStay>> {
        map_rows(self.active_stays(Some(room_id), window).await?)
    }

    #[instrument(skip(self))]
    async fn active_stays_in_window(
        &self,
        window: &StayDates,
    ) -> RepoResult<Vec<(RecordId, BookedStay)>> {
        self.active_stays(None, window)
            .await?
            .into_iter()
            .map(|row| {
                let room_id = RecordId::new(row.room_id);
                BookedStay::try_from(row).map(|stay| (room_id, stay))
            })
            .collect()
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> RepoResult<Vec<BookingStatusStats>> {
        let rows = sqlx::query_as::<_, BookingStatsModel>(
            r#"
            SELECT status, COUNT(*) AS count, COALESCE(SUM(total_amount), 0) AS revenue
            FROM bookings
            GROUP BY status
            ORDER BY status
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_rows(rows)
    }
}
