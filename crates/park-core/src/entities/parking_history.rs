//! Parking history entity

use chrono::{DateTime, Utc};

/// One parking event: a user parked at a lot at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingHistory {
    pub id: i64,
    pub user_id: i64,
    pub parking_lot_id: i64,
    pub parked_at: DateTime<Utc>,
}
