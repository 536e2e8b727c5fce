//! PostgreSQL implementation of RoomTypeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hotel_core::entities::RoomType;
use hotel_core::error::DomainError;
use hotel_core::traits::{RepoResult, RoomTypeRepository};
use hotel_core::value_objects::RecordId;

use crate::mappers::map_rows;
use crate::models::RoomTypeModel;

use super::error::{map_db_error, map_foreign_key_violation, room_type_not_found};

/// PostgreSQL implementation of RoomTypeRepository
#[derive(Clone)]
pub struct PgRoomTypeRepository {
    pool: PgPool,
}

impl PgRoomTypeRepository {
    /// Create a new PgRoomTypeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomTypeRepository for PgRoomTypeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<RoomType>> {
        let result = sqlx::query_as::<_, RoomTypeModel>(
            r#"
            SELECT id, name, capacity, price_night, location, created_at, updated_at
            FROM room_types
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(RoomType::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<RoomType>> {
        let results = sqlx::query_as::<_, RoomTypeModel>(
            r#"
            SELECT id, name, capacity, price_night, location, created_at, updated_at
            FROM room_types
            ORDER BY name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_rows(results)
    }

    #[instrument(skip(self, room_type), fields(name = %room_type.name))]
    async fn create(&self, room_type: &RoomType) -> RepoResult<RoomType> {
        let model = sqlx::query_as::<_, RoomTypeModel>(
            r#"
            INSERT INTO room_types (name, capacity, price_night, location, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, capacity, price_night, location, created_at, updated_at
            "#,
        )
        .bind(&room_type.name)
        .bind(room_type.capacity)
        .bind(room_type.price_night)
        .bind(room_type.location.as_str())
        .bind(room_type.created_at)
        .bind(room_type.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        RoomType::try_from(model)
    }

    #[instrument(skip(self, room_type), fields(room_type_id = %room_type.id))]
    async fn update(&self, room_type: &RoomType) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE room_types
            SET name = $2, capacity = $3, price_night = $4, location = $5, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(room_type.id.into_inner())
        .bind(&room_type.name)
        .bind(room_type.capacity)
        .bind(room_type.price_night)
        .bind(room_type.location.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(room_type_not_found(room_type.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let in_use: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM rooms WHERE room_type_id = $1)")
                .bind(id.into_inner())
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        if in_use {
            return Err(DomainError::RoomTypeInUse(id));
        }

        // A room inserted between the check and the delete still trips the FK
        let result = sqlx::query("DELETE FROM room_types WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(|e| map_foreign_key_violation(e, || DomainError::RoomTypeInUse(id)))?;

        if result.rows_affected() == 0 {
            return Err(room_type_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgRoomTypeRepository>();
    }
}
