//! The availability checker.
//!
//! Thin, side-effect-free wrappers over the repository overlap query that
//! fix the status sets the booking rules care about. Both checks use the
//! half-open predicate, so touching endpoints never conflict.

use roomease_core::status::ReservationStatus;
use roomease_core::types::{DbId, Timestamp};
use sqlx::PgExecutor;

use roomease_db::repositories::ReservationRepo;

/// Statuses that occupy a slot for booking purposes.
const BLOCKING: &[ReservationStatus] = &[ReservationStatus::Pending, ReservationStatus::Approved];

/// Statuses that occupy a slot for approval purposes.
///
/// Approval only competes with other *approved* reservations: overlapping
/// Pending siblings are allowed to coexist and lose the race at their own
/// approval time (first-approved-wins).
const APPROVED_ONLY: &[ReservationStatus] = &[ReservationStatus::Approved];

/// Pure conflict queries over the reservation table.
pub struct AvailabilityChecker;

impl AvailabilityChecker {
    /// True iff any Pending or Approved reservation for `room_id` overlaps
    /// `[start, end)`. Used for room search and new-booking checks.
    ///
    /// `exclude_reservation_id` ignores a reservation being re-evaluated.
    pub async fn has_conflict(
        executor: impl PgExecutor<'_>,
        room_id: DbId,
        start: Timestamp,
        end: Timestamp,
        exclude_reservation_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        ReservationRepo::overlap_exists(
            executor,
            room_id,
            start,
            end,
            exclude_reservation_id,
            BLOCKING,
        )
        .await
    }

    /// True iff any *Approved* reservation other than
    /// `exclude_reservation_id` overlaps `[start, end)` for `room_id`.
    /// Used for the pre-approval re-check.
    pub async fn has_approved_conflict(
        executor: impl PgExecutor<'_>,
        room_id: DbId,
        start: Timestamp,
        end: Timestamp,
        exclude_reservation_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        ReservationRepo::overlap_exists(
            executor,
            room_id,
            start,
            end,
            Some(exclude_reservation_id),
            APPROVED_ONLY,
        )
        .await
    }
}
