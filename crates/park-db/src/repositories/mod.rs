//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in park-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod favorite_slot;
mod parking_history;
mod parking_lot;
mod parking_slot;
mod session;
mod user;

pub use favorite_slot::PgFavoriteSlotRepository;
pub use parking_history::PgParkingHistoryRepository;
pub use parking_lot::PgParkingLotRepository;
pub use parking_slot::PgParkingSlotRepository;
pub use session::PgSessionRepository;
pub use user::PgUserRepository;
