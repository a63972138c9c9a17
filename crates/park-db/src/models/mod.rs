//! Database models - SQLx-compatible structs for PostgreSQL tables

mod favorite_slot;
mod parking_history;
mod parking_lot;
mod parking_slot;
mod session;
mod user;

pub use favorite_slot::FavoriteSlotModel;
pub use parking_history::ParkingHistoryModel;
pub use parking_lot::ParkingLotModel;
pub use parking_slot::ParkingSlotModel;
pub use session::SessionModel;
pub use user::UserModel;
