//! PostgreSQL implementation of FavoriteSlotRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use park_core::entities::FavoriteSlot;
use park_core::traits::{FavoriteSlotRepository, RepoResult};
use park_core::DomainError;

use crate::models::FavoriteSlotModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of FavoriteSlotRepository
#[derive(Clone)]
pub struct PgFavoriteSlotRepository {
    pool: PgPool,
}

impl PgFavoriteSlotRepository {
    /// Create a new PgFavoriteSlotRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteSlotRepository for PgFavoriteSlotRepository {
    #[instrument(skip(self))]
    async fn find_by_user_and_id(&self, user_id: i64, id: i64) -> RepoResult<Option<FavoriteSlot>> {
        let result = sqlx::query_as::<_, FavoriteSlotModel>(
            r"
            SELECT id, user_id, slot_id, created_at
            FROM favorite_slots
            WHERE user_id = $1 AND id = $2
            ",
        )
        .bind(user_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(FavoriteSlot::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user_and_slot(
        &self,
        user_id: i64,
        slot_id: i64,
    ) -> RepoResult<Option<FavoriteSlot>> {
        let result = sqlx::query_as::<_, FavoriteSlotModel>(
            r"
            SELECT id, user_id, slot_id, created_at
            FROM favorite_slots
            WHERE user_id = $1 AND slot_id = $2
            ",
        )
        .bind(user_id)
        .bind(slot_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(FavoriteSlot::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<FavoriteSlot>> {
        let result = sqlx::query_as::<_, FavoriteSlotModel>(
            r"
            SELECT id, user_id, slot_id, created_at
            FROM favorite_slots
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(FavoriteSlot::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, user_id: i64, slot_id: i64) -> RepoResult<FavoriteSlot> {
        let model = sqlx::query_as::<_, FavoriteSlotModel>(
            r"
            INSERT INTO favorite_slots (user_id, slot_id)
            VALUES ($1, $2)
            RETURNING id, user_id, slot_id, created_at
            ",
        )
        .bind(user_id)
        .bind(slot_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlotAlreadyFavorited(slot_id)))?;

        Ok(FavoriteSlot::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM favorite_slots WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
