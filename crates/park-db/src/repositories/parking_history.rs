//! PostgreSQL implementation of ParkingHistoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use park_core::entities::ParkingHistory;
use park_core::traits::{ParkingHistoryRepository, RepoResult};

use crate::models::ParkingHistoryModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ParkingHistoryRepository
#[derive(Clone)]
pub struct PgParkingHistoryRepository {
    pool: PgPool,
}

impl PgParkingHistoryRepository {
    /// Create a new PgParkingHistoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParkingHistoryRepository for PgParkingHistoryRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<ParkingHistory>> {
        let result = sqlx::query_as::<_, ParkingHistoryModel>(
            r"
            SELECT id, user_id, parking_lot_id, parked_at
            FROM parking_histories
            WHERE user_id = $1
            ORDER BY parked_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(ParkingHistory::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, user_id: i64, parking_lot_id: i64) -> RepoResult<ParkingHistory> {
        let model = sqlx::query_as::<_, ParkingHistoryModel>(
            r"
            INSERT INTO parking_histories (user_id, parking_lot_id)
            VALUES ($1, $2)
            RETURNING id, user_id, parking_lot_id, parked_at
            ",
        )
        .bind(user_id)
        .bind(parking_lot_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ParkingHistory::from(model))
    }
}
