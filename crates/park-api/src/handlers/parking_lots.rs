//! Parking lot handlers

use axum::extract::{Path, State};
use park_service::dto::{ParkingLotResponse, ParkingSlotResponse};
use park_service::ParkingLotService;

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// List all parking lots
///
/// GET /parking-lots
pub async fn list_lots(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<Vec<ParkingLotResponse>>> {
    let service = ParkingLotService::new(state.service_context());
    let response = service.list().await?;
    Ok(ApiJson(response))
}

/// List the slots of a parking lot
///
/// GET /parking-lots/:id/slots
pub async fn list_lot_slots(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<ApiJson<Vec<ParkingSlotResponse>>> {
    let service = ParkingLotService::new(state.service_context());
    let response = service.list_slots(id).await?;
    Ok(ApiJson(response))
}
