//! Parking history entity <-> model mapper

use park_core::entities::ParkingHistory;

use crate::models::ParkingHistoryModel;

impl From<ParkingHistoryModel> for ParkingHistory {
    fn from(model: ParkingHistoryModel) -> Self {
        ParkingHistory {
            id: model.id,
            user_id: model.user_id,
            parking_lot_id: model.parking_lot_id,
            parked_at: model.parked_at,
        }
    }
}
