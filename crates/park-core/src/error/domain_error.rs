//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("User not found for email: {0}")]
    UserEmailNotFound(String),

    #[error("Parking lot not found: {0}")]
    ParkingLotNotFound(i64),

    #[error("Parking slot not found: {0}")]
    ParkingSlotNotFound(i64),

    #[error("Favorite slot not found: {0}")]
    FavoriteSlotNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Slot already favorited: {0}")]
    SlotAlreadyFavorited(i64),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) | Self::UserEmailNotFound(_) => "NOT_FOUND",
            Self::ParkingLotNotFound(_) => "NOT_FOUND",
            Self::ParkingSlotNotFound(_) => "NOT_FOUND",
            Self::FavoriteSlotNotFound(_) => "NOT_FOUND",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::WeakPassword(_) => "WEAK_PASSWORD",

            Self::EmailAlreadyExists => "DUPLICATE_IDENTITY",
            Self::SlotAlreadyFavorited(_) => "CONFLICT",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::UserEmailNotFound(_)
                | Self::ParkingLotNotFound(_)
                | Self::ParkingSlotNotFound(_)
                | Self::FavoriteSlotNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::WeakPassword(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::SlotAlreadyFavorited(_))
    }
}
