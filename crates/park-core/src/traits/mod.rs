//! Repository traits (ports)

mod repositories;

pub use repositories::{
    FavoriteSlotRepository, ParkingHistoryRepository, ParkingLotRepository,
    ParkingSlotRepository, RepoResult, SessionRepository, UserRepository,
};
