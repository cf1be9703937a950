//! Reservation status enum mapping to a SMALLINT column.
//!
//! The discriminants are stable: they are what the `reservations.status`
//! column stores, so reordering variants is a schema change.

use serde::{Deserialize, Serialize};

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

/// Lifecycle status of a reservation.
///
/// `Pending` is the only initial state. `Rejected` and `Cancelled` are fully
/// terminal; `Approved` admits exactly one further transition (owner
/// cancellation). See [`crate::reservation`] for the transition rules.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending = 1,
    Approved = 2,
    Rejected = 3,
    Cancelled = 4,
}

impl ReservationStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Decode a database status ID.
    pub fn from_id(id: StatusId) -> Option<Self> {
        match id {
            1 => Some(ReservationStatus::Pending),
            2 => Some(ReservationStatus::Approved),
            3 => Some(ReservationStatus::Rejected),
            4 => Some(ReservationStatus::Cancelled),
            _ => None,
        }
    }

    /// Whether a reservation in this status occupies its time slot.
    ///
    /// Pending and Approved both block the slot; Rejected and Cancelled
    /// never do. This is the status filter of every availability query.
    pub fn blocks_slot(self) -> bool {
        matches!(
            self,
            ReservationStatus::Pending | ReservationStatus::Approved
        )
    }
}

impl From<ReservationStatus> for StatusId {
    fn from(value: ReservationStatus) -> Self {
        value as StatusId
    }
}

/// Human-readable status text for listings.
///
/// Presentation only. Kept out of the lifecycle rules on purpose: nothing in
/// the state machine may branch on these strings.
pub fn label(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Pending => "Pending",
        ReservationStatus::Approved => "Approved",
        ReservationStatus::Rejected => "Rejected",
        ReservationStatus::Cancelled => "Cancelled",
    }
}

/// Bootstrap badge class used by the front end for each status.
pub fn badge_class(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Pending => "warning",
        ReservationStatus::Approved => "success",
        ReservationStatus::Rejected => "danger",
        ReservationStatus::Cancelled => "secondary",
    }
}
