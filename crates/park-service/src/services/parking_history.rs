//! Parking history service
//!
//! Records parking events and lists them per user, newest first.

use park_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CreateParkingHistoryRequest, ParkingHistoryResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Parking history service
pub struct ParkingHistoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ParkingHistoryService<'a> {
    /// Create a new ParkingHistoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a parking event for a user
    #[instrument(skip(self, request), fields(parking_lot_id = request.parking_lot_id))]
    pub async fn create(
        &self,
        user_id: i64,
        request: CreateParkingHistoryRequest,
    ) -> ServiceResult<ParkingHistoryResponse> {
        let lot = self
            .ctx
            .parking_lot_repo()
            .find_by_id(request.parking_lot_id)
            .await?
            .ok_or_else(|| {
                ServiceError::Domain(DomainError::ParkingLotNotFound(request.parking_lot_id))
            })?;

        let history = self
            .ctx
            .parking_history_repo()
            .create(user_id, lot.id)
            .await?;

        info!(user_id = user_id, history_id = history.id, "Parking event recorded");

        Ok(ParkingHistoryResponse::from(history))
    }

    /// List a user's parking history, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: i64) -> ServiceResult<Vec<ParkingHistoryResponse>> {
        let histories = self.ctx.parking_history_repo().find_by_user(user_id).await?;

        Ok(histories.iter().map(ParkingHistoryResponse::from).collect())
    }
}
