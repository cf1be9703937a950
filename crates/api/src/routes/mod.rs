pub mod admin;
pub mod health;
pub mod notifications;
pub mod reservations;
pub mod rooms;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /rooms                                  search (auth required)
/// /rooms/{id}                             room detail with equipment
/// /rooms/{id}/availability                slot check
/// /equipment                              equipment catalogue
///
/// /reservations                           create, list own
/// /reservations/{id}/cancel               cancel own (POST)
///
/// /admin/reservations                     list all, status filter (admin)
/// /admin/reservations/{id}/approve        approve (POST, admin)
/// /admin/reservations/{id}/reject         reject (POST, admin)
/// /admin/rooms                            list, create (admin)
/// /admin/rooms/{id}                       update, delete (admin)
/// /admin/equipment                        create (admin)
/// /admin/equipment/{id}                   update, delete (admin)
///
/// /notifications                          list own
/// /notifications/read-all                 mark all read (POST)
/// /notifications/unread-count             unread count
/// /notifications/{id}/read                mark read (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(rooms::router())
        .nest("/reservations", reservations::router())
        .nest("/admin", admin::router())
        .nest("/notifications", notifications::router())
}
