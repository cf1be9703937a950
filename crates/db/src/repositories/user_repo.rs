//! Repository for the `users` table.
//!
//! Credential handling belongs to the upstream identity provider; this repo
//! only provisions and reads profile rows.

use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list for `users` queries.
const COLUMNS: &str = "id, username, email, full_name, department, is_admin, created_at";

/// Provides persistence for user profiles.
pub struct UserRepo;

impl UserRepo {
    /// Provision a user, returning the stored row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, full_name, department, is_admin) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.full_name)
            .bind(&input.department)
            .bind(input.is_admin)
            .fetch_one(pool)
            .await
    }
}
