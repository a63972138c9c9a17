//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User signup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// Favorite Slot Requests
// ============================================================================

/// Favorite a parking slot
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFavoriteSlotRequest {
    #[validate(range(min = 1, message = "slot_id must be positive"))]
    pub slot_id: i64,
}

// ============================================================================
// Parking History Requests
// ============================================================================

/// Record a parking event at a lot
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateParkingHistoryRequest {
    #[validate(range(min = 1, message = "parking_lot_id must be positive"))]
    pub parking_lot_id: i64,
}
