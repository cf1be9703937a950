//! Booking-request validation and the reservation state machine.
//!
//! These are pure functions over [`ReservationStatus`] and timestamps so the
//! transition rules can be unit-tested without a database. The `booking`
//! crate applies them inside its transactions.

use crate::error::CoreError;
use crate::interval;
use crate::status::ReservationStatus;
use crate::types::{DbId, Timestamp};

/// Maximum length of the optional free-text purpose field.
pub const MAX_PURPOSE_LEN: usize = 500;

/// Validate a new booking request before any conflict check.
///
/// Rules, in order:
/// - `end > start`
/// - `start` must not be before `now` (no booking in the past)
/// - `purpose`, when present, is at most [`MAX_PURPOSE_LEN`] characters
///
/// `now` is a parameter rather than `Utc::now()` so tests control the clock.
pub fn validate_request(
    start: Timestamp,
    end: Timestamp,
    purpose: Option<&str>,
    now: Timestamp,
) -> Result<(), CoreError> {
    interval::validate_interval(start, end)?;

    if start < now {
        return Err(CoreError::Validation(
            "You cannot book a room in the past.".to_string(),
        ));
    }

    if let Some(purpose) = purpose {
        if purpose.chars().count() > MAX_PURPOSE_LEN {
            return Err(CoreError::Validation(format!(
                "Purpose cannot exceed {MAX_PURPOSE_LEN} characters."
            )));
        }
    }

    Ok(())
}

/// A reservation may be approved only while Pending.
///
/// The conflict re-check against other Approved reservations happens in the
/// booking service, inside the same transaction as the status write.
pub fn validate_approve(status: ReservationStatus) -> Result<(), CoreError> {
    if status != ReservationStatus::Pending {
        return Err(CoreError::State(
            "Only pending reservations can be approved.".to_string(),
        ));
    }
    Ok(())
}

/// A reservation may be rejected only while Pending.
///
/// No conflict check: rejection never increases occupancy.
pub fn validate_reject(status: ReservationStatus) -> Result<(), CoreError> {
    if status != ReservationStatus::Pending {
        return Err(CoreError::State(
            "Only pending reservations can be rejected.".to_string(),
        ));
    }
    Ok(())
}

/// A reservation may be cancelled by its owner while Pending or Approved.
///
/// The ownership check is mandatory: a non-owner is refused with `Forbidden`
/// before the status is even considered.
pub fn validate_cancel(
    status: ReservationStatus,
    owner_id: DbId,
    requesting_user_id: DbId,
) -> Result<(), CoreError> {
    if owner_id != requesting_user_id {
        return Err(CoreError::Forbidden(
            "You can only cancel your own reservations.".to_string(),
        ));
    }

    match status {
        ReservationStatus::Pending | ReservationStatus::Approved => Ok(()),
        ReservationStatus::Rejected | ReservationStatus::Cancelled => Err(CoreError::State(
            "This reservation can no longer be cancelled.".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_valid_request_passes() {
        let start = now() + Duration::hours(1);
        let end = start + Duration::hours(1);
        assert!(validate_request(start, end, Some("Team sync"), now()).is_ok());
    }

    #[test]
    fn test_end_before_start_rejected() {
        let start = now() + Duration::hours(2);
        let end = start - Duration::hours(1);
        let err = validate_request(start, end, None, now()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_past_start_rejected() {
        let start = now() - Duration::hours(1);
        let end = now() + Duration::hours(1);
        let err = validate_request(start, end, None, now()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("past"));
    }

    #[test]
    fn test_start_exactly_now_allowed() {
        // `start < now` is the rule; booking a slot starting this instant
        // is allowed, matching the original behaviour.
        let start = now();
        let end = start + Duration::hours(1);
        assert!(validate_request(start, end, None, now()).is_ok());
    }

    #[test]
    fn test_oversized_purpose_rejected() {
        let start = now() + Duration::hours(1);
        let end = start + Duration::hours(1);
        let purpose = "x".repeat(MAX_PURPOSE_LEN + 1);
        let err = validate_request(start, end, Some(&purpose), now()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_purpose_at_limit_allowed() {
        let start = now() + Duration::hours(1);
        let end = start + Duration::hours(1);
        let purpose = "x".repeat(MAX_PURPOSE_LEN);
        assert!(validate_request(start, end, Some(&purpose), now()).is_ok());
    }

    #[test]
    fn test_approve_requires_pending() {
        assert!(validate_approve(ReservationStatus::Pending).is_ok());
        for status in [
            ReservationStatus::Approved,
            ReservationStatus::Rejected,
            ReservationStatus::Cancelled,
        ] {
            assert!(matches!(
                validate_approve(status),
                Err(CoreError::State(_))
            ));
        }
    }

    #[test]
    fn test_reject_requires_pending() {
        assert!(validate_reject(ReservationStatus::Pending).is_ok());
        for status in [
            ReservationStatus::Approved,
            ReservationStatus::Rejected,
            ReservationStatus::Cancelled,
        ] {
            assert!(matches!(validate_reject(status), Err(CoreError::State(_))));
        }
    }

    #[test]
    fn test_cancel_allowed_from_pending_and_approved() {
        assert!(validate_cancel(ReservationStatus::Pending, 7, 7).is_ok());
        assert!(validate_cancel(ReservationStatus::Approved, 7, 7).is_ok());
    }

    #[test]
    fn test_cancel_refused_from_terminal_states() {
        assert!(matches!(
            validate_cancel(ReservationStatus::Rejected, 7, 7),
            Err(CoreError::State(_))
        ));
        assert!(matches!(
            validate_cancel(ReservationStatus::Cancelled, 7, 7),
            Err(CoreError::State(_))
        ));
    }

    #[test]
    fn test_cancel_by_non_owner_forbidden() {
        // Ownership is checked before status, so even a cancellable
        // reservation is refused for the wrong user.
        assert!(matches!(
            validate_cancel(ReservationStatus::Pending, 7, 8),
            Err(CoreError::Forbidden(_))
        ));
    }
}
