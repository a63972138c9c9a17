//! Favorite slot database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the favorite_slots table
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteSlotModel {
    pub id: i64,
    pub user_id: i64,
    pub slot_id: i64,
    pub created_at: DateTime<Utc>,
}
