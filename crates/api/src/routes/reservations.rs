//! Route definitions for the `/reservations` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reservations;
use crate::state::AppState;

/// Routes mounted at `/reservations`.
///
/// ```text
/// GET    /             -> list_mine
/// POST   /             -> create
/// POST   /{id}/cancel  -> cancel
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(reservations::list_mine).post(reservations::create),
        )
        .route("/{id}/cancel", post(reservations::cancel))
}
