//! Parking slot entity

/// A single numbered slot within a parking lot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingSlot {
    pub id: i64,
    pub parking_lot_id: i64,
    pub slot_number: i64,
    pub is_available: bool,
}
