//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    // Mix in the process id so parallel test binaries never collide
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    u64::from(std::process::id()) * 1_000_000 + n
}

/// Success envelope wrapping every successful response body
#[derive(Debug, Deserialize)]
pub struct SuccessEnvelope<T> {
    pub success: bool,
    pub data: T,
}

/// Error envelope wrapping every error response body
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Signup request
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl SignupRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            name: format!("Test User {suffix}"),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_signup(signup: &SignupRequest) -> Self {
        Self {
            email: signup.email.clone(),
            password: signup.password.clone(),
        }
    }
}

/// Signup response payload
#[derive(Debug, Deserialize)]
pub struct SignupResponse {
    pub user_id: i64,
}

/// Token pair response payload
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Confirmation message payload
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Favorite slot creation request
#[derive(Debug, Serialize)]
pub struct CreateFavoriteSlotRequest {
    pub slot_id: i64,
}

/// Favorite slot response payload
#[derive(Debug, Deserialize)]
pub struct FavoriteSlotResponse {
    pub id: i64,
    pub slot_id: i64,
    pub parking_lot_id: i64,
    pub slot_number: i64,
    pub is_available: bool,
    pub created_at: String,
}

/// Parking history creation request
#[derive(Debug, Serialize)]
pub struct CreateParkingHistoryRequest {
    pub parking_lot_id: i64,
}

/// Parking history response payload
#[derive(Debug, Deserialize)]
pub struct ParkingHistoryResponse {
    pub id: i64,
    pub parking_lot_id: i64,
    pub parked_at: String,
}

/// Parking lot response payload
#[derive(Debug, Deserialize)]
pub struct ParkingLotResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub total_slots: i32,
    pub created_at: String,
}

/// Parking slot response payload
#[derive(Debug, Deserialize)]
pub struct ParkingSlotResponse {
    pub id: i64,
    pub parking_lot_id: i64,
    pub slot_number: i64,
    pub is_available: bool,
}
