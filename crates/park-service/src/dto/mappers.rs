//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use park_common::auth::TokenPair;
use park_core::entities::{FavoriteSlot, ParkingHistory, ParkingLot, ParkingSlot};

use super::responses::{
    FavoriteSlotResponse, ParkingHistoryResponse, ParkingLotResponse, ParkingSlotResponse,
    TokenResponse,
};

// ============================================================================
// Token Mappers
// ============================================================================

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: pair.token_type,
            expires_in: pair.expires_in,
        }
    }
}

// ============================================================================
// Parking Mappers
// ============================================================================

impl From<&ParkingLot> for ParkingLotResponse {
    fn from(lot: &ParkingLot) -> Self {
        Self {
            id: lot.id,
            name: lot.name.clone(),
            address: lot.address.clone(),
            total_slots: lot.total_slots,
            created_at: lot.created_at,
        }
    }
}

impl From<ParkingLot> for ParkingLotResponse {
    fn from(lot: ParkingLot) -> Self {
        Self::from(&lot)
    }
}

impl From<&ParkingSlot> for ParkingSlotResponse {
    fn from(slot: &ParkingSlot) -> Self {
        Self {
            id: slot.id,
            parking_lot_id: slot.parking_lot_id,
            slot_number: slot.slot_number,
            is_available: slot.is_available,
        }
    }
}

impl From<ParkingSlot> for ParkingSlotResponse {
    fn from(slot: ParkingSlot) -> Self {
        Self::from(&slot)
    }
}

/// A favorite joined with the slot it references
#[derive(Debug, Clone)]
pub struct FavoriteSlotWithSlot {
    pub favorite: FavoriteSlot,
    pub slot: ParkingSlot,
}

impl From<&FavoriteSlotWithSlot> for FavoriteSlotResponse {
    fn from(joined: &FavoriteSlotWithSlot) -> Self {
        Self {
            id: joined.favorite.id,
            slot_id: joined.slot.id,
            parking_lot_id: joined.slot.parking_lot_id,
            slot_number: joined.slot.slot_number,
            is_available: joined.slot.is_available,
            created_at: joined.favorite.created_at,
        }
    }
}

impl From<FavoriteSlotWithSlot> for FavoriteSlotResponse {
    fn from(joined: FavoriteSlotWithSlot) -> Self {
        Self::from(&joined)
    }
}

impl From<&ParkingHistory> for ParkingHistoryResponse {
    fn from(history: &ParkingHistory) -> Self {
        Self {
            id: history.id,
            parking_lot_id: history.parking_lot_id,
            parked_at: history.parked_at,
        }
    }
}

impl From<ParkingHistory> for ParkingHistoryResponse {
    fn from(history: ParkingHistory) -> Self {
        Self::from(&history)
    }
}
