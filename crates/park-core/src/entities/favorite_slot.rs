//! Favorite slot entity

use chrono::{DateTime, Utc};

/// A user's bookmark of a parking slot
///
/// Ownership is by foreign key: a favorite belongs to exactly one user and
/// references exactly one slot. The pair (`user_id`, `slot_id`) is unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteSlot {
    pub id: i64,
    pub user_id: i64,
    pub slot_id: i64,
    pub created_at: DateTime<Utc>,
}
