//! The reservation lifecycle manager.
//!
//! Owns the state machine for a single reservation. Each operation is one
//! database transaction spanning "check conflict" + "write status/insert
//! row"; the room row lock taken by create and approve serializes
//! concurrent bookings for the same room, which is what upholds the
//! no-double-booking invariant under concurrency.
//!
//! Notifications go out only after the transaction has committed, and a
//! delivery failure is logged by the [`Notifier`], never surfaced here.

use chrono::Utc;

use roomease_core::reservation as rules;
use roomease_core::status::ReservationStatus;
use roomease_core::types::DbId;
use roomease_core::CoreError;
use roomease_db::models::reservation::{NewReservation, Reservation};
use roomease_db::repositories::{ReservationRepo, RoomRepo};
use roomease_db::DbPool;
use roomease_events::{Notifier, ReservationEvent, ReservationEventKind};

use crate::availability::AvailabilityChecker;
use crate::error::{BookingError, BookingResult};

/// Timestamp format used in notification messages.
const SLOT_FMT: &str = "%d/%m/%Y at %H:%M";

/// Creates reservations and drives their status transitions.
#[derive(Clone)]
pub struct BookingService {
    pool: DbPool,
    notifier: Notifier,
}

impl BookingService {
    pub fn new(pool: DbPool, notifier: Notifier) -> Self {
        Self { pool, notifier }
    }

    /// Whether `[start, end)` is free for `room_id`.
    ///
    /// Pending and Approved reservations both block. Read-only; the answer
    /// is advisory and re-validated transactionally at booking time.
    pub async fn check_availability(
        &self,
        room_id: DbId,
        start: roomease_core::types::Timestamp,
        end: roomease_core::types::Timestamp,
    ) -> BookingResult<bool> {
        roomease_core::interval::validate_interval(start, end)?;

        if RoomRepo::find_by_id(&self.pool, room_id).await?.is_none() {
            return Err(CoreError::room_not_found(room_id).into());
        }

        let conflict =
            AvailabilityChecker::has_conflict(&self.pool, room_id, start, end, None).await?;
        Ok(!conflict)
    }

    /// Create a reservation in Pending status.
    ///
    /// Fails with `Validation` for a malformed request (end <= start, start
    /// in the past, oversized purpose), `NotFound` for an unknown room, and
    /// `Conflict` when any Pending or Approved reservation overlaps the
    /// slot. Overlap with *other Pending* requests created concurrently is
    /// allowed to slip through only across transactions that do not overlap
    /// in time; within the transaction the check and the insert are atomic.
    pub async fn create_reservation(&self, input: NewReservation) -> BookingResult<Reservation> {
        rules::validate_request(
            input.start_time,
            input.end_time,
            input.purpose.as_deref(),
            Utc::now(),
        )?;

        let mut tx = self.pool.begin().await?;

        let room = RoomRepo::lock(&mut tx, input.room_id)
            .await?
            .ok_or_else(|| CoreError::room_not_found(input.room_id))?;

        let conflict = AvailabilityChecker::has_conflict(
            &mut *tx,
            input.room_id,
            input.start_time,
            input.end_time,
            None,
        )
        .await?;
        if conflict {
            return Err(CoreError::Conflict(
                "This room is already booked for that time slot.".to_string(),
            )
            .into());
        }

        let reservation = ReservationRepo::create(&mut *tx, &input).await?;
        tx.commit().await?;

        tracing::info!(
            reservation_id = reservation.id,
            room_id = reservation.room_id,
            user_id = reservation.user_id,
            "reservation created (pending)"
        );

        self.notifier
            .notify_and_publish(
                ReservationEvent::new(
                    ReservationEventKind::Created,
                    reservation.id,
                    reservation.room_id,
                    reservation.user_id,
                ),
                &format!(
                    "Your booking request for room '{}' on {} has been recorded \
                     and is awaiting approval.",
                    room.name,
                    reservation.start_time.format(SLOT_FMT)
                ),
            )
            .await;

        Ok(reservation)
    }

    /// Approve a Pending reservation.
    ///
    /// Re-runs the conflict check against other *Approved* reservations,
    /// excluding this one, inside the same transaction as the status write:
    /// first-approved-wins. Fails with `State` when the reservation is not
    /// Pending and `Conflict` when an overlapping sibling was approved
    /// first; the status is unchanged in both cases.
    pub async fn approve_reservation(&self, reservation_id: DbId) -> BookingResult<()> {
        let mut tx = self.pool.begin().await?;

        let reservation = ReservationRepo::find_by_id_for_update(&mut tx, reservation_id)
            .await?
            .ok_or_else(|| CoreError::reservation_not_found(reservation_id))?;

        let room = RoomRepo::lock(&mut tx, reservation.room_id)
            .await?
            .ok_or_else(|| CoreError::room_not_found(reservation.room_id))?;

        rules::validate_approve(decode_status(&reservation)?)?;

        let conflict = AvailabilityChecker::has_approved_conflict(
            &mut *tx,
            reservation.room_id,
            reservation.start_time,
            reservation.end_time,
            reservation.id,
        )
        .await?;
        if conflict {
            return Err(CoreError::Conflict(
                "Cannot approve: this slot conflicts with another approved reservation."
                    .to_string(),
            )
            .into());
        }

        ReservationRepo::set_status(&mut *tx, reservation.id, ReservationStatus::Approved).await?;
        tx.commit().await?;

        tracing::info!(reservation_id, room_id = reservation.room_id, "reservation approved");

        self.notifier
            .notify_and_publish(
                ReservationEvent::new(
                    ReservationEventKind::Approved,
                    reservation.id,
                    reservation.room_id,
                    reservation.user_id,
                ),
                &format!(
                    "Good news! Your reservation of room '{}' for {} has been approved.",
                    room.name,
                    reservation.start_time.format(SLOT_FMT)
                ),
            )
            .await;

        Ok(())
    }

    /// Reject a Pending reservation.
    ///
    /// No conflict check: rejection never increases occupancy. Fails with
    /// `State` when the reservation is not Pending.
    pub async fn reject_reservation(&self, reservation_id: DbId) -> BookingResult<()> {
        let mut tx = self.pool.begin().await?;

        let reservation = ReservationRepo::find_by_id_for_update(&mut tx, reservation_id)
            .await?
            .ok_or_else(|| CoreError::reservation_not_found(reservation_id))?;

        rules::validate_reject(decode_status(&reservation)?)?;

        let room = RoomRepo::find_by_id(&mut *tx, reservation.room_id)
            .await?
            .ok_or_else(|| CoreError::room_not_found(reservation.room_id))?;

        ReservationRepo::set_status(&mut *tx, reservation.id, ReservationStatus::Rejected).await?;
        tx.commit().await?;

        tracing::info!(reservation_id, room_id = reservation.room_id, "reservation rejected");

        self.notifier
            .notify_and_publish(
                ReservationEvent::new(
                    ReservationEventKind::Rejected,
                    reservation.id,
                    reservation.room_id,
                    reservation.user_id,
                ),
                &format!(
                    "Your booking request for room '{}' for {} has been rejected.",
                    room.name,
                    reservation.start_time.format(SLOT_FMT)
                ),
            )
            .await;

        Ok(())
    }

    /// Cancel a Pending or Approved reservation on behalf of its owner.
    ///
    /// Fails with `Forbidden` when `requesting_user_id` is not the owner
    /// and with `State` when the reservation is already Rejected or
    /// Cancelled. Never deletes the row.
    pub async fn cancel_reservation(
        &self,
        reservation_id: DbId,
        requesting_user_id: DbId,
    ) -> BookingResult<()> {
        let mut tx = self.pool.begin().await?;

        let reservation = ReservationRepo::find_by_id_for_update(&mut tx, reservation_id)
            .await?
            .ok_or_else(|| CoreError::reservation_not_found(reservation_id))?;

        rules::validate_cancel(
            decode_status(&reservation)?,
            reservation.user_id,
            requesting_user_id,
        )?;

        let room = RoomRepo::find_by_id(&mut *tx, reservation.room_id)
            .await?
            .ok_or_else(|| CoreError::room_not_found(reservation.room_id))?;

        ReservationRepo::set_status(&mut *tx, reservation.id, ReservationStatus::Cancelled).await?;
        tx.commit().await?;

        tracing::info!(reservation_id, room_id = reservation.room_id, "reservation cancelled");

        self.notifier
            .notify_and_publish(
                ReservationEvent::new(
                    ReservationEventKind::Cancelled,
                    reservation.id,
                    reservation.room_id,
                    reservation.user_id,
                ),
                &format!(
                    "You have cancelled your reservation of room '{}' scheduled for {}.",
                    room.name,
                    reservation.start_time.format(SLOT_FMT)
                ),
            )
            .await;

        Ok(())
    }
}

/// Decode a stored status, mapping an out-of-range discriminant to a
/// booking error instead of panicking.
fn decode_status(reservation: &Reservation) -> BookingResult<ReservationStatus> {
    reservation
        .status()
        .ok_or(BookingError::CorruptStatus {
            reservation_id: reservation.id,
            status: reservation.status,
        })
}
