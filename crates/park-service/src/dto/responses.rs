//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Result of a successful signup
#[derive(Debug, Clone, Serialize)]
pub struct SignupResponse {
    pub user_id: i64,
}

/// Token pair returned from login and refresh
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Plain confirmation message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Parking Responses
// ============================================================================

/// Parking lot response
#[derive(Debug, Clone, Serialize)]
pub struct ParkingLotResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub total_slots: i32,
    pub created_at: DateTime<Utc>,
}

/// Parking slot response
#[derive(Debug, Clone, Serialize)]
pub struct ParkingSlotResponse {
    pub id: i64,
    pub parking_lot_id: i64,
    pub slot_number: i64,
    pub is_available: bool,
}

/// Favorite slot response, joined with the referenced slot
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteSlotResponse {
    pub id: i64,
    pub slot_id: i64,
    pub parking_lot_id: i64,
    pub slot_number: i64,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

/// Parking history entry response
#[derive(Debug, Clone, Serialize)]
pub struct ParkingHistoryResponse {
    pub id: i64,
    pub parking_lot_id: i64,
    pub parked_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
