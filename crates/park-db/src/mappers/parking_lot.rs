//! Parking lot entity <-> model mapper

use park_core::entities::ParkingLot;

use crate::models::ParkingLotModel;

impl From<ParkingLotModel> for ParkingLot {
    fn from(model: ParkingLotModel) -> Self {
        ParkingLot {
            id: model.id,
            name: model.name,
            address: model.address,
            total_slots: model.total_slots,
            created_at: model.created_at,
        }
    }
}
