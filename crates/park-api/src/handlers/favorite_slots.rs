//! Favorite slot handlers

use axum::extract::{Path, State};
use park_service::dto::{CreateFavoriteSlotRequest, FavoriteSlotResponse};
use park_service::FavoriteSlotService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Favorite a parking slot
///
/// POST /favorite-slots
pub async fn create_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateFavoriteSlotRequest>,
) -> ApiResult<Created<ApiJson<FavoriteSlotResponse>>> {
    let service = FavoriteSlotService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(ApiJson(response)))
}

/// List the authenticated user's favorites
///
/// GET /favorite-slots
pub async fn list_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<Vec<FavoriteSlotResponse>>> {
    let service = FavoriteSlotService::new(state.service_context());
    let response = service.list(auth.user_id).await?;
    Ok(ApiJson(response))
}

/// Delete one of the authenticated user's favorites
///
/// DELETE /favorite-slots/:id
pub async fn delete_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = FavoriteSlotService::new(state.service_context());
    service.delete(auth.user_id, id).await?;
    Ok(NoContent)
}
