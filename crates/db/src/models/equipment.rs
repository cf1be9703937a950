//! Equipment entity model.
//!
//! The room/equipment association is a plain join table with no behaviour;
//! it never appears as its own model, only as the `equipment` list on
//! [`crate::models::room::RoomWithEquipment`].

use roomease_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `equipment` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Equipment {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating or renaming an equipment entry.
#[derive(Debug, Deserialize)]
pub struct CreateEquipment {
    pub name: String,
}
