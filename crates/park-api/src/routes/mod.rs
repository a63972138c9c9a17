//! Route definitions
//!
//! All API routes organized by domain.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, favorite_slots, health, parking_histories, parking_lots};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(favorite_slot_routes())
        .merge(parking_history_routes())
        .merge(parking_lot_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

/// Favorite slot routes
fn favorite_slot_routes() -> Router<AppState> {
    Router::new()
        .route("/favorite-slots", post(favorite_slots::create_favorite))
        .route("/favorite-slots", get(favorite_slots::list_favorites))
        .route("/favorite-slots/:id", delete(favorite_slots::delete_favorite))
}

/// Parking history routes
fn parking_history_routes() -> Router<AppState> {
    Router::new()
        .route("/parking-histories", post(parking_histories::create_history))
        .route("/parking-histories", get(parking_histories::list_histories))
}

/// Parking lot routes
fn parking_lot_routes() -> Router<AppState> {
    Router::new()
        .route("/parking-lots", get(parking_lots::list_lots))
        .route("/parking-lots/:id/slots", get(parking_lots::list_lot_slots))
}
