//! Domain entities

mod favorite_slot;
mod parking_history;
mod parking_lot;
mod parking_slot;
mod session;
mod user;

pub use favorite_slot::FavoriteSlot;
pub use parking_history::ParkingHistory;
pub use parking_lot::ParkingLot;
pub use parking_slot::ParkingSlot;
pub use session::Session;
pub use user::{NewUser, Role, User};
