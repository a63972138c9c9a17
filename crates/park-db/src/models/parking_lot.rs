//! Parking lot database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the parking_lots table
#[derive(Debug, Clone, FromRow)]
pub struct ParkingLotModel {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub total_slots: i32,
    pub created_at: DateTime<Utc>,
}
