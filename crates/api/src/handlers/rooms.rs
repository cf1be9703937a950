//! Handlers for the `/rooms` resource: search, detail, availability.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use roomease_booking::AvailabilityChecker;
use roomease_core::types::{DbId, Timestamp};
use roomease_core::CoreError;
use roomease_db::models::room::{Room, RoomSearch, RoomWithEquipment};
use roomease_db::repositories::{EquipmentRepo, RoomRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /rooms`.
#[derive(Debug, Default, Deserialize)]
pub struct RoomListQuery {
    /// Minimum seat count.
    pub min_capacity: Option<i32>,
    /// Comma-separated equipment ids; rooms must carry all of them.
    pub equipment: Option<String>,
    /// Slot start; with `end`, filters out rooms already booked then.
    pub start: Option<Timestamp>,
    /// Slot end.
    pub end: Option<Timestamp>,
}

fn parse_equipment_ids(raw: Option<&str>) -> Result<Vec<DbId>, AppError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| {
            s.trim()
                .parse::<DbId>()
                .map_err(|_| AppError::BadRequest(format!("invalid equipment id '{s}'")))
        })
        .collect()
}

/// GET /api/v1/rooms
///
/// Search available rooms by capacity and equipment; when both `start` and
/// `end` are given, rooms with a blocking reservation in that slot are
/// filtered out (advisory — the booking transaction re-checks).
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<RoomListQuery>,
) -> AppResult<Json<Vec<Room>>> {
    let criteria = RoomSearch {
        min_capacity: params.min_capacity,
        equipment_ids: parse_equipment_ids(params.equipment.as_deref())?,
    };
    let rooms = RoomRepo::search(&state.pool, &criteria).await?;

    let rooms = match (params.start, params.end) {
        (Some(start), Some(end)) => {
            roomease_core::interval::validate_interval(start, end)?;
            let mut free = Vec::with_capacity(rooms.len());
            for room in rooms {
                let conflict =
                    AvailabilityChecker::has_conflict(&state.pool, room.id, start, end, None)
                        .await?;
                if !conflict {
                    free.push(room);
                }
            }
            free
        }
        (None, None) => rooms,
        _ => {
            return Err(AppError::BadRequest(
                "start and end must be provided together".to_string(),
            ))
        }
    };

    Ok(Json(rooms))
}

/// GET /api/v1/rooms/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<RoomWithEquipment>> {
    let room = RoomRepo::find_by_id_with_equipment(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::room_not_found(id)))?;
    Ok(Json(room))
}

/// Query parameters for `GET /rooms/{id}/availability`.
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub start: Timestamp,
    pub end: Timestamp,
}

/// GET /api/v1/rooms/{id}/availability
///
/// Whether the slot is free of Pending/Approved reservations right now.
pub async fn availability(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<AvailabilityQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let available = state
        .booking
        .check_availability(id, params.start, params.end)
        .await?;
    Ok(Json(json!({ "data": { "available": available } })))
}

/// GET /api/v1/equipment
///
/// The equipment catalogue, for building search filters.
pub async fn list_equipment(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<roomease_db::models::equipment::Equipment>>> {
    let equipment = EquipmentRepo::list(&state.pool).await?;
    Ok(Json(equipment))
}
