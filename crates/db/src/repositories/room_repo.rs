//! Repository for the `rooms` and `room_equipment` tables.

use roomease_core::types::DbId;
use sqlx::{PgExecutor, PgPool, Postgres, Transaction};

use crate::models::equipment::Equipment;
use crate::models::room::{CreateRoom, Room, RoomSearch, RoomWithEquipment, UpdateRoom};

/// Column list for `rooms` queries.
const COLUMNS: &str = "id, name, capacity, description, is_available, created_at, updated_at";

/// Column list for `equipment` rows fetched through the join table.
const EQUIPMENT_COLUMNS: &str = "e.id, e.name, e.created_at";

/// Provides CRUD operations for rooms and their equipment associations.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room; associates equipment in the same transaction.
    pub async fn create(pool: &PgPool, input: &CreateRoom) -> Result<Room, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO rooms (name, capacity, description, is_available) \
             VALUES ($1, $2, $3, COALESCE($4, true)) \
             RETURNING {COLUMNS}"
        );
        let room = sqlx::query_as::<_, Room>(&query)
            .bind(&input.name)
            .bind(input.capacity)
            .bind(&input.description)
            .bind(input.is_available)
            .fetch_one(&mut *tx)
            .await?;

        if !input.equipment_ids.is_empty() {
            Self::set_equipment_inner(&mut tx, room.id, &input.equipment_ids).await?;
        }

        tx.commit().await?;
        Ok(room)
    }

    /// Find a room by id.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a room by id, enriched with its equipment.
    pub async fn find_by_id_with_equipment(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RoomWithEquipment>, sqlx::Error> {
        let room = Self::find_by_id(pool, id).await?;
        match room {
            Some(room) => {
                let equipment = Self::equipment_for_room(pool, room.id).await?;
                Ok(Some(RoomWithEquipment { room, equipment }))
            }
            None => Ok(None),
        }
    }

    /// Lock a room row for the remainder of the transaction.
    ///
    /// Concurrent booking transactions for the same room queue behind this
    /// lock, which is what makes check-conflict-then-commit atomic.
    /// Returns `None` if the room does not exist.
    pub async fn lock(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Search available rooms.
    ///
    /// Filters: `min_capacity` (at least), `equipment_ids` (room must carry
    /// every listed equipment). Unavailable rooms are never returned.
    pub async fn search(pool: &PgPool, criteria: &RoomSearch) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rooms r \
             WHERE r.is_available = true \
               AND ($1::int IS NULL OR r.capacity >= $1) \
               AND (cardinality($2::bigint[]) = 0 OR ( \
                     SELECT COUNT(*) FROM room_equipment re \
                     WHERE re.room_id = r.id AND re.equipment_id = ANY($2) \
                   ) = cardinality($2::bigint[])) \
             ORDER BY r.name"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(criteria.min_capacity)
            .bind(&criteria.equipment_ids)
            .fetch_all(pool)
            .await
    }

    /// List every room, including unavailable ones (admin screen).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms ORDER BY name");
        sqlx::query_as::<_, Room>(&query).fetch_all(pool).await
    }

    /// Update a room; `equipment_ids`, when present, replaces the full set.
    /// Returns `None` if the room does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRoom,
    ) -> Result<Option<Room>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE rooms SET \
                name = COALESCE($2, name), \
                capacity = COALESCE($3, capacity), \
                description = COALESCE($4, description), \
                is_available = COALESCE($5, is_available), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let room = sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.capacity)
            .bind(&input.description)
            .bind(input.is_available)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(room) = room else {
            return Ok(None);
        };

        if let Some(equipment_ids) = &input.equipment_ids {
            sqlx::query("DELETE FROM room_equipment WHERE room_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            Self::set_equipment_inner(&mut tx, id, equipment_ids).await?;
        }

        tx.commit().await?;
        Ok(Some(room))
    }

    /// Delete a room. Returns `false` if it did not exist. The caller is
    /// responsible for refusing deletion while active reservations exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Equipment associated with a room, by name.
    pub async fn equipment_for_room(
        pool: &PgPool,
        room_id: DbId,
    ) -> Result<Vec<Equipment>, sqlx::Error> {
        let query = format!(
            "SELECT {EQUIPMENT_COLUMNS} FROM equipment e \
             JOIN room_equipment re ON re.equipment_id = e.id \
             WHERE re.room_id = $1 \
             ORDER BY e.name"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(room_id)
            .fetch_all(pool)
            .await
    }

    /// Insert join rows for a room's equipment set.
    async fn set_equipment_inner(
        tx: &mut Transaction<'_, Postgres>,
        room_id: DbId,
        equipment_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        for equipment_id in equipment_ids {
            sqlx::query(
                "INSERT INTO room_equipment (room_id, equipment_id) \
                 VALUES ($1, $2) ON CONFLICT DO NOTHING",
            )
            .bind(room_id)
            .bind(equipment_id)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }
}
