//! PostgreSQL implementation of ParkingLotRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use park_core::entities::ParkingLot;
use park_core::traits::{ParkingLotRepository, RepoResult};

use crate::models::ParkingLotModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ParkingLotRepository
#[derive(Clone)]
pub struct PgParkingLotRepository {
    pool: PgPool,
}

impl PgParkingLotRepository {
    /// Create a new PgParkingLotRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParkingLotRepository for PgParkingLotRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ParkingLot>> {
        let result = sqlx::query_as::<_, ParkingLotModel>(
            r"
            SELECT id, name, address, total_slots, created_at
            FROM parking_lots
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ParkingLot::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<ParkingLot>> {
        let result = sqlx::query_as::<_, ParkingLotModel>(
            r"
            SELECT id, name, address, total_slots, created_at
            FROM parking_lots
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(ParkingLot::from).collect())
    }
}
