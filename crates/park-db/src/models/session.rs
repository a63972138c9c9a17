//! Session database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the sessions table (one row per user)
#[derive(Debug, Clone, FromRow)]
pub struct SessionModel {
    pub user_id: i64,
    pub refresh_token: String,
    pub created_at: DateTime<Utc>,
}
