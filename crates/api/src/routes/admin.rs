//! Route definitions for the `/admin` routes.
//!
//! All endpoints require the admin role.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /reservations              -> list_reservations
/// POST   /reservations/{id}/approve -> approve_reservation
/// POST   /reservations/{id}/reject  -> reject_reservation
///
/// GET    /rooms                     -> list_rooms
/// POST   /rooms                     -> create_room
/// PUT    /rooms/{id}                -> update_room
/// DELETE /rooms/{id}                -> delete_room
///
/// POST   /equipment                 -> create_equipment
/// PUT    /equipment/{id}            -> update_equipment
/// DELETE /equipment/{id}            -> delete_equipment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reservations", get(admin::list_reservations))
        .route(
            "/reservations/{id}/approve",
            post(admin::approve_reservation),
        )
        .route("/reservations/{id}/reject", post(admin::reject_reservation))
        .route("/rooms", get(admin::list_rooms).post(admin::create_room))
        .route(
            "/rooms/{id}",
            put(admin::update_room).delete(admin::delete_room),
        )
        .route("/equipment", post(admin::create_equipment))
        .route(
            "/equipment/{id}",
            put(admin::update_equipment).delete(admin::delete_equipment),
        )
}
