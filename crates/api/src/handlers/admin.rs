//! Handlers for the `/admin` routes: reservation review and room /
//! equipment management. Role checks happen in the [`AdminUser`] extractor.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use roomease_core::types::DbId;
use roomease_core::{CoreError, ReservationStatus};
use roomease_db::models::equipment::{CreateEquipment, Equipment};
use roomease_db::models::reservation::ReservationDetailView;
use roomease_db::models::room::{CreateRoom, Room, UpdateRoom};
use roomease_db::repositories::{EquipmentRepo, ReservationRepo, RoomRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Reservation review
// ---------------------------------------------------------------------------

/// Query parameters for `GET /admin/reservations`.
#[derive(Debug, Deserialize)]
pub struct ReservationListQuery {
    /// Optional status filter (`pending`, `approved`, `rejected`,
    /// `cancelled`).
    pub status: Option<ReservationStatus>,
}

/// GET /api/v1/admin/reservations
///
/// All reservations, newest slot first, optionally filtered by status.
pub async fn list_reservations(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(params): Query<ReservationListQuery>,
) -> AppResult<Json<Vec<ReservationDetailView>>> {
    let reservations = ReservationRepo::list_all(&state.pool, params.status).await?;
    Ok(Json(
        reservations.into_iter().map(Into::into).collect(),
    ))
}

/// POST /api/v1/admin/reservations/{id}/approve
///
/// 409 with a state error when the reservation is not Pending, 409 with a
/// conflict when an overlapping reservation was approved first.
pub async fn approve_reservation(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.booking.approve_reservation(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/reservations/{id}/reject
pub async fn reject_reservation(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.booking.reject_reservation(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Room management
// ---------------------------------------------------------------------------

fn validate_capacity(capacity: i32) -> Result<(), AppError> {
    if capacity < 1 {
        return Err(AppError::Core(CoreError::Validation(
            "Room capacity must be at least 1.".to_string(),
        )));
    }
    Ok(())
}

/// POST /api/v1/admin/rooms
pub async fn create_room(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<CreateRoom>,
) -> AppResult<(StatusCode, Json<Room>)> {
    validate_capacity(input.capacity)?;
    let room = RoomRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// GET /api/v1/admin/rooms
///
/// Every room, including ones marked unavailable.
pub async fn list_rooms(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Room>>> {
    let rooms = RoomRepo::list_all(&state.pool).await?;
    Ok(Json(rooms))
}

/// PUT /api/v1/admin/rooms/{id}
pub async fn update_room(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoom>,
) -> AppResult<Json<Room>> {
    if let Some(capacity) = input.capacity {
        validate_capacity(capacity)?;
    }
    let room = RoomRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::room_not_found(id)))?;
    Ok(Json(room))
}

/// DELETE /api/v1/admin/rooms/{id}
///
/// Refused with 409 while the room has Pending or Approved reservations.
pub async fn delete_room(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ReservationRepo::active_exists_for_room(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Cannot delete this room: it has active reservations.".to_string(),
        )));
    }

    let deleted = RoomRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::room_not_found(id)))
    }
}

// ---------------------------------------------------------------------------
// Equipment management
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/equipment
pub async fn create_equipment(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let equipment = EquipmentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// PUT /api/v1/admin/equipment/{id}
pub async fn update_equipment(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateEquipment>,
) -> AppResult<Json<Equipment>> {
    let equipment = EquipmentRepo::rename(&state.pool, id, &input.name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Equipment",
                id,
            })
        })?;
    Ok(Json(equipment))
}

/// DELETE /api/v1/admin/equipment/{id}
pub async fn delete_equipment(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EquipmentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Equipment",
            id,
        }))
    }
}
