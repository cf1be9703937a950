//! Room entity models and DTOs.

use roomease_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::equipment::Equipment;

/// A row from the `rooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub name: String,
    pub capacity: i32,
    pub description: Option<String>,
    pub is_available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A room enriched with its equipment set.
#[derive(Debug, Clone, Serialize)]
pub struct RoomWithEquipment {
    #[serde(flatten)]
    pub room: Room,
    pub equipment: Vec<Equipment>,
}

/// DTO for creating a room.
#[derive(Debug, Deserialize)]
pub struct CreateRoom {
    pub name: String,
    pub capacity: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_available: Option<bool>,
    /// Equipment to associate with the room on creation.
    #[serde(default)]
    pub equipment_ids: Vec<DbId>,
}

/// DTO for updating a room. All fields optional; `equipment_ids`, when
/// present, replaces the room's full equipment set.
#[derive(Debug, Deserialize)]
pub struct UpdateRoom {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub description: Option<String>,
    pub is_available: Option<bool>,
    pub equipment_ids: Option<Vec<DbId>>,
}

/// Search filters for the room listing.
#[derive(Debug, Default, Deserialize)]
pub struct RoomSearch {
    /// Minimum seat count.
    pub min_capacity: Option<i32>,
    /// Rooms must carry every one of these equipment ids.
    #[serde(default)]
    pub equipment_ids: Vec<DbId>,
}
