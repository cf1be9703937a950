//! Handlers for the `/reservations` resource (user self-service).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use roomease_core::types::DbId;
use roomease_db::models::reservation::{
    CreateReservationRequest, NewReservation, Reservation, ReservationDetailView,
};
use roomease_db::repositories::ReservationRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/reservations
///
/// Submit a booking request. On success the reservation is Pending and a
/// confirmation notification has been queued for the requester.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let reservation = state
        .booking
        .create_reservation(NewReservation {
            room_id: input.room_id,
            user_id: auth.user_id,
            start_time: input.start_time,
            end_time: input.end_time,
            purpose: input.purpose,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /api/v1/reservations
///
/// The authenticated user's reservations, newest slot first.
pub async fn list_mine(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ReservationDetailView>>> {
    let reservations = ReservationRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(
        reservations.into_iter().map(Into::into).collect(),
    ))
}

/// POST /api/v1/reservations/{id}/cancel
///
/// Cancel one of the caller's own reservations. 403 for non-owners,
/// 409 when the reservation is already Rejected or Cancelled.
pub async fn cancel(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.booking.cancel_reservation(id, auth.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
