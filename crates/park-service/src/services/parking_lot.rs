//! Parking lot service
//!
//! Read-only lookup of lots and their slots.

use park_core::DomainError;
use tracing::instrument;

use crate::dto::{ParkingLotResponse, ParkingSlotResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Parking lot service
pub struct ParkingLotService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ParkingLotService<'a> {
    /// Create a new ParkingLotService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all parking lots
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ParkingLotResponse>> {
        let lots = self.ctx.parking_lot_repo().find_all().await?;

        Ok(lots.iter().map(ParkingLotResponse::from).collect())
    }

    /// List the slots of a parking lot
    #[instrument(skip(self))]
    pub async fn list_slots(&self, parking_lot_id: i64) -> ServiceResult<Vec<ParkingSlotResponse>> {
        // The lot must exist; an empty lot is a valid (empty) answer
        let lot = self
            .ctx
            .parking_lot_repo()
            .find_by_id(parking_lot_id)
            .await?
            .ok_or_else(|| {
                ServiceError::Domain(DomainError::ParkingLotNotFound(parking_lot_id))
            })?;

        let slots = self.ctx.parking_slot_repo().find_by_lot(lot.id).await?;

        Ok(slots.iter().map(ParkingSlotResponse::from).collect())
    }
}
