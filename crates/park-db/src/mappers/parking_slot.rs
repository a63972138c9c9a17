//! Parking slot entity <-> model mapper

use park_core::entities::ParkingSlot;

use crate::models::ParkingSlotModel;

impl From<ParkingSlotModel> for ParkingSlot {
    fn from(model: ParkingSlotModel) -> Self {
        ParkingSlot {
            id: model.id,
            parking_lot_id: model.parking_lot_id,
            slot_number: model.slot_number,
            is_available: model.is_available,
        }
    }
}
