//! PostgreSQL implementation of ParkingSlotRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use park_core::entities::ParkingSlot;
use park_core::traits::{ParkingSlotRepository, RepoResult};

use crate::models::ParkingSlotModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ParkingSlotRepository
#[derive(Clone)]
pub struct PgParkingSlotRepository {
    pool: PgPool,
}

impl PgParkingSlotRepository {
    /// Create a new PgParkingSlotRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParkingSlotRepository for PgParkingSlotRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ParkingSlot>> {
        let result = sqlx::query_as::<_, ParkingSlotModel>(
            r"
            SELECT id, parking_lot_id, slot_number, is_available
            FROM parking_slots
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ParkingSlot::from))
    }

    #[instrument(skip(self))]
    async fn find_by_lot(&self, parking_lot_id: i64) -> RepoResult<Vec<ParkingSlot>> {
        let result = sqlx::query_as::<_, ParkingSlotModel>(
            r"
            SELECT id, parking_lot_id, slot_number, is_available
            FROM parking_slots
            WHERE parking_lot_id = $1
            ORDER BY slot_number
            ",
        )
        .bind(parking_lot_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(ParkingSlot::from).collect())
    }
}
