//! Request extractors
//!
//! Custom Axum extractors for authentication and validated JSON bodies.

mod auth;
mod validated;

pub use auth::AuthUser;
pub use validated::ValidatedJson;
