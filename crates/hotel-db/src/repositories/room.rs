//! PostgreSQL implementation of RoomRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hotel_core::entities::{Room, RoomStatusCounts, RoomType};
use hotel_core::error::DomainError;
use hotel_core::traits::{RepoResult, RoomFilter, RoomRepository};
use hotel_core::value_objects::{RecordId, RoomStatus};

use crate::mappers::{corrupt_column, map_rows, room_with_type};
use crate::models::{RoomModel, RoomStatusCountModel, RoomWithTypeModel};

use super::error::{map_db_error, map_foreign_key_violation, room_not_found};

/// Rooms joined with their type, type columns prefixed `rt_`
pub(crate) const ROOM_WITH_TYPE_SELECT: &str = r#"
    SELECT r.id, r.number, r.floor, r.room_type_id, r.status, r.created_at, r.updated_at,
           rt.name AS rt_name, rt.capacity AS rt_capacity, rt.price_night AS rt_price_night,
           rt.location AS rt_location, rt.created_at AS rt_created_at,
           rt.updated_at AS rt_updated_at
    FROM rooms r
    JOIN room_types rt ON rt.id = r.room_type_id
"#;

/// PostgreSQL implementation of RoomRepository
#[derive(Clone)]
pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    /// Create a new PgRoomRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map insert/update failures on rooms to domain conflicts
fn map_room_write_error(e: sqlx::Error, room: &Room) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return DomainError::RoomNumberExists(room.number.clone());
        }
        if db_err.is_foreign_key_violation() {
            return DomainError::RoomTypeNotFound(room.room_type_id);
        }
    }
    map_db_error(e)
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Room>> {
        let result = sqlx::query_as::<_, RoomModel>(
            r#"
            SELECT id, number, floor, room_type_id, status, created_at, updated_at
            FROM rooms
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Room::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: RoomFilter) -> RepoResult<Vec<Room>> {
        let results = sqlx::query_as::<_, RoomModel>(
            r#"
            SELECT id, number, floor, room_type_id, status, created_at, updated_at
            FROM rooms
            WHERE ($1::BIGINT IS NULL OR room_type_id = $1)
              AND ($2::TEXT IS NULL OR status = $2)
            ORDER BY number
            "#,
        )
        .bind(filter.room_type_id.map(RecordId::into_inner))
        .bind(filter.status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_rows(results)
    }

    #[instrument(skip(self))]
    async fn list_bookable(
        &self,
        guests: i32,
        room_type_id: Option<RecordId>,
    ) -> RepoResult<Vec<(Room, RoomType)>> {
        let sql = format!(
            r#"
            {ROOM_WITH_TYPE_SELECT}
            WHERE rt.capacity >= $1
              AND ($2::BIGINT IS NULL OR r.room_type_id = $2)
              AND r.status NOT IN ('maintenance', 'out_of_order')
            ORDER BY rt.price_night ASC, r.number ASC
            "#
        );
        let results = sqlx::query_as::<_, RoomWithTypeModel>(&sql)
            .bind(guests)
            .bind(room_type_id.map(RecordId::into_inner))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        results.into_iter().map(room_with_type).collect()
    }

    #[instrument(skip(self))]
    async fn count(&self, room_type_id: Option<RecordId>) -> RepoResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE ($1::BIGINT IS NULL OR room_type_id = $1)")
            .bind(room_type_id.map(RecordId::into_inner))
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, room), fields(number = %room.number))]
    async fn create(&self, room: &Room) -> RepoResult<Room> {
        let model = sqlx::query_as::<_, RoomModel>(
            r#"
            INSERT INTO rooms (number, floor, room_type_id, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, number, floor, room_type_id, status, created_at, updated_at
            "#,
        )
        .bind(&room.number)
        .bind(room.floor)
        .bind(room.room_type_id.into_inner())
        .bind(room.status.as_str())
        .bind(room.created_at)
        .bind(room.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_room_write_error(e, room))?;

        Room::try_from(model)
    }

    #[instrument(skip(self, room), fields(room_id = %room.id))]
    async fn update(&self, room: &Room) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE rooms
            SET number = $2, floor = $3, room_type_id = $4, status = $5, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(room.id.into_inner())
        .bind(&room.number)
        .bind(room.floor)
        .bind(room.room_type_id.into_inner())
        .bind(room.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| map_room_write_error(e, room))?;

        if result.rows_affected() == 0 {
            return Err(room_not_found(room.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let has_bookings: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM bookings WHERE room_id = $1)")
                .bind(id.into_inner())
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        if has_bookings {
            return Err(DomainError::RoomHasBookings(id));
        }

        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(|e| map_foreign_key_violation(e, || DomainError::RoomHasBookings(id)))?;

        if result.rows_affected() == 0 {
            return Err(room_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: RecordId, status: RoomStatus) -> RepoResult<()> {
        let result = sqlx::query("UPDATE rooms SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id.into_inner())
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(room_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn status_counts(&self) -> RepoResult<RoomStatusCounts> {
        let rows = sqlx::query_as::<_, RoomStatusCountModel>(
            "SELECT status, COUNT(*) AS count FROM rooms GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut counts = RoomStatusCounts::default();
        for row in rows {
            let status: RoomStatus = row.status.parse().map_err(corrupt_column)?;
            counts.add(status, row.count);
        }
        Ok(counts)
    }
}
