//! Entity to model mappers
//!
//! Conversions between domain entities (park-core) and database models:
//! `From<Model> for Entity` turns database rows into domain objects.

mod favorite_slot;
mod parking_history;
mod parking_lot;
mod parking_slot;
mod session;
mod user;
