//! # park-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, FavoriteSlotService, ParkingHistoryService, ParkingLotService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
