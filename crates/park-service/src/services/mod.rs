//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod context;
pub mod error;
pub mod favorite_slot;
pub mod parking_history;
pub mod parking_lot;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use favorite_slot::FavoriteSlotService;
pub use parking_history::ParkingHistoryService;
pub use parking_lot::ParkingLotService;
