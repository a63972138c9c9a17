//! Parking slot database model

use sqlx::FromRow;

/// Database model for the parking_slots table
#[derive(Debug, Clone, FromRow)]
pub struct ParkingSlotModel {
    pub id: i64,
    pub parking_lot_id: i64,
    pub slot_number: i64,
    pub is_available: bool,
}
