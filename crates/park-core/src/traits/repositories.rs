//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    FavoriteSlot, NewUser, ParkingHistory, ParkingLot, ParkingSlot, Session, User,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository (credential store)
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user; the store assigns the id.
    /// Fails with `DomainError::EmailAlreadyExists` on a duplicate email.
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;
}

// ============================================================================
// Session Repository (one refresh token per user)
// ============================================================================

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Find the current session for a user
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Option<Session>>;

    /// Atomically replace the user's session with a new refresh token.
    /// Supersedes any existing row in a single statement.
    async fn replace(&self, user_id: i64, refresh_token: &str) -> RepoResult<()>;

    /// Delete the user's session; idempotent (no-op when absent)
    async fn delete_by_user(&self, user_id: i64) -> RepoResult<()>;
}

// ============================================================================
// Parking Lot Repository
// ============================================================================

#[async_trait]
pub trait ParkingLotRepository: Send + Sync {
    /// Find parking lot by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ParkingLot>>;

    /// List all parking lots
    async fn find_all(&self) -> RepoResult<Vec<ParkingLot>>;
}

// ============================================================================
// Parking Slot Repository
// ============================================================================

#[async_trait]
pub trait ParkingSlotRepository: Send + Sync {
    /// Find parking slot by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ParkingSlot>>;

    /// List all slots of a parking lot
    async fn find_by_lot(&self, parking_lot_id: i64) -> RepoResult<Vec<ParkingSlot>>;
}

// ============================================================================
// Favorite Slot Repository
// ============================================================================

#[async_trait]
pub trait FavoriteSlotRepository: Send + Sync {
    /// Find a favorite by owner and id
    async fn find_by_user_and_id(&self, user_id: i64, id: i64) -> RepoResult<Option<FavoriteSlot>>;

    /// Find a favorite by owner and slot
    async fn find_by_user_and_slot(
        &self,
        user_id: i64,
        slot_id: i64,
    ) -> RepoResult<Option<FavoriteSlot>>;

    /// List all favorites of a user
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<FavoriteSlot>>;

    /// Create a favorite; the store assigns the id.
    /// Fails with `DomainError::SlotAlreadyFavorited` on a duplicate pair.
    async fn create(&self, user_id: i64, slot_id: i64) -> RepoResult<FavoriteSlot>;

    /// Delete a favorite by id
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Parking History Repository
// ============================================================================

#[async_trait]
pub trait ParkingHistoryRepository: Send + Sync {
    /// List a user's parking history, newest first
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<ParkingHistory>>;

    /// Record a parking event; the store assigns id and timestamp
    async fn create(&self, user_id: i64, parking_lot_id: i64) -> RepoResult<ParkingHistory>;
}
