//! HTTP request handlers organized by domain

pub mod auth;
pub mod favorite_slots;
pub mod health;
pub mod parking_histories;
pub mod parking_lots;
