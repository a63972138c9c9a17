//! Favorite slot service
//!
//! Users bookmark parking slots; favorites are always scoped to the
//! requesting user.

use park_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CreateFavoriteSlotRequest, FavoriteSlotResponse, FavoriteSlotWithSlot};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Favorite slot service
pub struct FavoriteSlotService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FavoriteSlotService<'a> {
    /// Create a new FavoriteSlotService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Favorite a parking slot for a user
    #[instrument(skip(self, request), fields(slot_id = request.slot_id))]
    pub async fn create(
        &self,
        user_id: i64,
        request: CreateFavoriteSlotRequest,
    ) -> ServiceResult<FavoriteSlotResponse> {
        let slot = self
            .ctx
            .parking_slot_repo()
            .find_by_id(request.slot_id)
            .await?
            .ok_or_else(|| {
                ServiceError::Domain(DomainError::ParkingSlotNotFound(request.slot_id))
            })?;

        if self
            .ctx
            .favorite_slot_repo()
            .find_by_user_and_slot(user_id, slot.id)
            .await?
            .is_some()
        {
            return Err(DomainError::SlotAlreadyFavorited(slot.id).into());
        }

        let favorite = self
            .ctx
            .favorite_slot_repo()
            .create(user_id, slot.id)
            .await?;

        info!(user_id = user_id, favorite_id = favorite.id, "Slot favorited");

        Ok(FavoriteSlotResponse::from(FavoriteSlotWithSlot {
            favorite,
            slot,
        }))
    }

    /// List a user's favorites, joined with slot data
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: i64) -> ServiceResult<Vec<FavoriteSlotResponse>> {
        let favorites = self.ctx.favorite_slot_repo().find_by_user(user_id).await?;

        let mut responses = Vec::with_capacity(favorites.len());
        for favorite in favorites {
            // A dangling slot_id cannot survive the FK, so skip rather than fail
            if let Some(slot) = self
                .ctx
                .parking_slot_repo()
                .find_by_id(favorite.slot_id)
                .await?
            {
                responses.push(FavoriteSlotResponse::from(FavoriteSlotWithSlot {
                    favorite,
                    slot,
                }));
            }
        }

        Ok(responses)
    }

    /// Delete a user's favorite by id
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: i64, id: i64) -> ServiceResult<()> {
        let favorite = self
            .ctx
            .favorite_slot_repo()
            .find_by_user_and_id(user_id, id)
            .await?
            .ok_or_else(|| ServiceError::Domain(DomainError::FavoriteSlotNotFound(id)))?;

        self.ctx.favorite_slot_repo().delete(favorite.id).await?;

        info!(user_id = user_id, favorite_id = id, "Favorite deleted");
        Ok(())
    }
}
