//! Parking lot entity

use chrono::{DateTime, Utc};

/// A parking lot with a fixed number of slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingLot {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub total_slots: i32,
    pub created_at: DateTime<Utc>,
}
