//! Route definitions for the `/rooms` and `/equipment` resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::rooms;
use crate::state::AppState;

/// Routes mounted directly under `/api/v1`.
///
/// ```text
/// GET /rooms                     -> list (search)
/// GET /rooms/{id}                -> get_by_id
/// GET /rooms/{id}/availability   -> availability
/// GET /equipment                 -> list_equipment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(rooms::list))
        .route("/rooms/{id}", get(rooms::get_by_id))
        .route("/rooms/{id}/availability", get(rooms::availability))
        .route("/equipment", get(rooms::list_equipment))
}
