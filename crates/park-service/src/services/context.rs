//! Service context - dependency container for services
//!
//! Holds the repositories and the token issuer needed by services. The
//! context is storage-agnostic: handlers wire PostgreSQL implementations in,
//! unit tests wire in-memory fakes.

use std::sync::Arc;

use park_common::auth::JwtService;
use park_core::traits::{
    FavoriteSlotRepository, ParkingHistoryRepository, ParkingLotRepository,
    ParkingSlotRepository, SessionRepository, UserRepository,
};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    session_repo: Arc<dyn SessionRepository>,
    parking_lot_repo: Arc<dyn ParkingLotRepository>,
    parking_slot_repo: Arc<dyn ParkingSlotRepository>,
    favorite_slot_repo: Arc<dyn FavoriteSlotRepository>,
    parking_history_repo: Arc<dyn ParkingHistoryRepository>,
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        session_repo: Arc<dyn SessionRepository>,
        parking_lot_repo: Arc<dyn ParkingLotRepository>,
        parking_slot_repo: Arc<dyn ParkingSlotRepository>,
        favorite_slot_repo: Arc<dyn FavoriteSlotRepository>,
        parking_history_repo: Arc<dyn ParkingHistoryRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            parking_lot_repo,
            parking_slot_repo,
            favorite_slot_repo,
            parking_history_repo,
            jwt_service,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the session repository
    pub fn session_repo(&self) -> &dyn SessionRepository {
        self.session_repo.as_ref()
    }

    /// Get the parking lot repository
    pub fn parking_lot_repo(&self) -> &dyn ParkingLotRepository {
        self.parking_lot_repo.as_ref()
    }

    /// Get the parking slot repository
    pub fn parking_slot_repo(&self) -> &dyn ParkingSlotRepository {
        self.parking_slot_repo.as_ref()
    }

    /// Get the favorite slot repository
    pub fn favorite_slot_repo(&self) -> &dyn FavoriteSlotRepository {
        self.favorite_slot_repo.as_ref()
    }

    /// Get the parking history repository
    pub fn parking_history_repo(&self) -> &dyn ParkingHistoryRepository {
        self.parking_history_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    session_repo: Option<Arc<dyn SessionRepository>>,
    parking_lot_repo: Option<Arc<dyn ParkingLotRepository>>,
    parking_slot_repo: Option<Arc<dyn ParkingSlotRepository>>,
    favorite_slot_repo: Option<Arc<dyn FavoriteSlotRepository>>,
    parking_history_repo: Option<Arc<dyn ParkingHistoryRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn session_repo(mut self, repo: Arc<dyn SessionRepository>) -> Self {
        self.session_repo = Some(repo);
        self
    }

    pub fn parking_lot_repo(mut self, repo: Arc<dyn ParkingLotRepository>) -> Self {
        self.parking_lot_repo = Some(repo);
        self
    }

    pub fn parking_slot_repo(mut self, repo: Arc<dyn ParkingSlotRepository>) -> Self {
        self.parking_slot_repo = Some(repo);
        self
    }

    pub fn favorite_slot_repo(mut self, repo: Arc<dyn FavoriteSlotRepository>) -> Self {
        self.favorite_slot_repo = Some(repo);
        self
    }

    pub fn parking_history_repo(mut self, repo: Arc<dyn ParkingHistoryRepository>) -> Self {
        self.parking_history_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.session_repo
                .ok_or_else(|| ServiceError::validation("session_repo is required"))?,
            self.parking_lot_repo
                .ok_or_else(|| ServiceError::validation("parking_lot_repo is required"))?,
            self.parking_slot_repo
                .ok_or_else(|| ServiceError::validation("parking_slot_repo is required"))?,
            self.favorite_slot_repo
                .ok_or_else(|| ServiceError::validation("favorite_slot_repo is required"))?,
            self.parking_history_repo
                .ok_or_else(|| ServiceError::validation("parking_history_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        ))
    }
}
