//! # park-core
//!
//! Domain layer containing entities, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    FavoriteSlot, NewUser, ParkingHistory, ParkingLot, ParkingSlot, Role, Session, User,
};
pub use error::DomainError;
pub use traits::{
    FavoriteSlotRepository, ParkingHistoryRepository, ParkingLotRepository,
    ParkingSlotRepository, RepoResult, SessionRepository, UserRepository,
};
