//! Favorite slot entity <-> model mapper

use park_core::entities::FavoriteSlot;

use crate::models::FavoriteSlotModel;

impl From<FavoriteSlotModel> for FavoriteSlot {
    fn from(model: FavoriteSlotModel) -> Self {
        FavoriteSlot {
            id: model.id,
            user_id: model.user_id,
            slot_id: model.slot_id,
            created_at: model.created_at,
        }
    }
}
