//! User entity model.
//!
//! Authentication lives in an upstream identity provider; this table only
//! holds the profile fields the portal displays and the admin flag the
//! admin routes check.

use roomease_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub department: Option<String>,
    pub is_admin: bool,
    pub created_at: Timestamp,
}

/// DTO for provisioning a user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}
