//! Repository for the `reservations` table.
//!
//! Owns the overlap query: "reservations for room X overlapping interval Y
//! with status in set Z". The interval comparison is half-open
//! (`start_time < $end AND end_time > $start`), matching
//! `roomease_core::interval::overlaps`.

use roomease_core::status::{ReservationStatus, StatusId};
use roomease_core::types::{DbId, Timestamp};
use sqlx::{PgExecutor, PgPool, Postgres, Transaction};

use crate::models::reservation::{NewReservation, Reservation, ReservationDetail};

/// Column list for `reservations` queries.
const COLUMNS: &str =
    "id, room_id, user_id, start_time, end_time, purpose, status, created_at, updated_at";

/// Column list for the joined detail listings.
const DETAIL_COLUMNS: &str = "r.id, r.room_id, rm.name AS room_name, \
    rm.capacity AS room_capacity, r.user_id, u.full_name AS user_full_name, \
    u.email AS user_email, r.start_time, r.end_time, r.purpose, r.status";

/// Provides persistence for reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a new reservation in Pending status.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &NewReservation,
    ) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservations (room_id, user_id, start_time, end_time, purpose, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(input.room_id)
            .bind(input.user_id)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.purpose)
            .bind(ReservationStatus::Pending.id())
            .fetch_one(executor)
            .await
    }

    /// Find a reservation by id.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a reservation by id and lock its row for the transaction.
    ///
    /// Transitions fetch through this so two concurrent actions on the same
    /// reservation serialize instead of both reading the stale status.
    pub async fn find_by_id_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// True iff any reservation for `room_id` whose status is in `statuses`
    /// overlaps `[start, end)`, ignoring `exclude_id` when given.
    ///
    /// Pure read; run it on `&mut *tx` when the result gates a write in the
    /// same transaction.
    pub async fn overlap_exists(
        executor: impl PgExecutor<'_>,
        room_id: DbId,
        start: Timestamp,
        end: Timestamp,
        exclude_id: Option<DbId>,
        statuses: &[ReservationStatus],
    ) -> Result<bool, sqlx::Error> {
        let status_ids: Vec<StatusId> = statuses.iter().map(|s| s.id()).collect();
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS ( \
                SELECT 1 FROM reservations \
                WHERE room_id = $1 \
                  AND status = ANY($2) \
                  AND start_time < $3 \
                  AND end_time > $4 \
                  AND ($5::bigint IS NULL OR id <> $5) \
             )",
        )
        .bind(room_id)
        .bind(&status_ids)
        .bind(end)
        .bind(start)
        .bind(exclude_id)
        .fetch_one(executor)
        .await?;
        Ok(exists)
    }

    /// Update a reservation's status, stamping `updated_at`.
    pub async fn set_status(
        executor: impl PgExecutor<'_>,
        id: DbId,
        status: ReservationStatus,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE reservations SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(status.id())
            .execute(executor)
            .await?;
        Ok(())
    }

    /// List a user's reservations, newest slot first, with room and
    /// requester display fields.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ReservationDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM reservations r \
             JOIN rooms rm ON rm.id = r.room_id \
             JOIN users u ON u.id = r.user_id \
             WHERE r.user_id = $1 \
             ORDER BY r.start_time DESC"
        );
        sqlx::query_as::<_, ReservationDetail>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List all reservations for the admin review screen, optionally
    /// filtered by status, newest slot first.
    pub async fn list_all(
        pool: &PgPool,
        status: Option<ReservationStatus>,
    ) -> Result<Vec<ReservationDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM reservations r \
             JOIN rooms rm ON rm.id = r.room_id \
             JOIN users u ON u.id = r.user_id \
             WHERE ($1::smallint IS NULL OR r.status = $1) \
             ORDER BY r.start_time DESC"
        );
        sqlx::query_as::<_, ReservationDetail>(&query)
            .bind(status.map(|s| s.id()))
            .fetch_all(pool)
            .await
    }

    /// True iff the room has any Pending or Approved reservation.
    /// Guards room deletion.
    pub async fn active_exists_for_room(
        executor: impl PgExecutor<'_>,
        room_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS ( \
                SELECT 1 FROM reservations \
                WHERE room_id = $1 AND status = ANY($2) \
             )",
        )
        .bind(room_id)
        .bind(vec![
            ReservationStatus::Pending.id(),
            ReservationStatus::Approved.id(),
        ])
        .fetch_one(executor)
        .await?;
        Ok(exists)
    }
}
