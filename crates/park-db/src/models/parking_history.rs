//! Parking history database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the parking_histories table
#[derive(Debug, Clone, FromRow)]
pub struct ParkingHistoryModel {
    pub id: i64,
    pub user_id: i64,
    pub parking_lot_id: i64,
    pub parked_at: DateTime<Utc>,
}
