//! Parking history handlers

use axum::extract::State;
use park_service::dto::{CreateParkingHistoryRequest, ParkingHistoryResponse};
use park_service::ParkingHistoryService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// Record a parking event
///
/// POST /parking-histories
pub async fn create_history(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateParkingHistoryRequest>,
) -> ApiResult<Created<ApiJson<ParkingHistoryResponse>>> {
    let service = ParkingHistoryService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(ApiJson(response)))
}

/// List the authenticated user's parking history, newest first
///
/// GET /parking-histories
pub async fn list_histories(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<Vec<ParkingHistoryResponse>>> {
    let service = ParkingHistoryService::new(state.service_context());
    let response = service.list(auth.user_id).await?;
    Ok(ApiJson(response))
}
