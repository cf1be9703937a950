//! Repository for the `equipment` table.

use roomease_core::types::DbId;
use sqlx::PgPool;

use crate::models::equipment::{CreateEquipment, Equipment};

/// Column list for `equipment` queries.
const COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for the equipment catalogue.
pub struct EquipmentRepo;

impl EquipmentRepo {
    /// Insert a new equipment entry.
    pub async fn create(pool: &PgPool, input: &CreateEquipment) -> Result<Equipment, sqlx::Error> {
        let query = format!("INSERT INTO equipment (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Equipment>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List the full catalogue, by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment ORDER BY name");
        sqlx::query_as::<_, Equipment>(&query).fetch_all(pool).await
    }

    /// Rename an equipment entry. Returns `None` if it does not exist.
    pub async fn rename(
        pool: &PgPool,
        id: DbId,
        name: &str,
    ) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!("UPDATE equipment SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Delete an equipment entry; join rows cascade.
    /// Returns `false` if it did not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
