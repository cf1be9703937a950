//! Reservation entity models and DTOs.

use roomease_core::status::{self, ReservationStatus, StatusId};
use roomease_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reservations` table.
///
/// `status` is the raw SMALLINT discriminant; decode with
/// [`Reservation::status`] before applying any transition rule.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    pub room_id: DbId,
    pub user_id: DbId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub purpose: Option<String>,
    pub status: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Reservation {
    /// Decode the stored status discriminant.
    ///
    /// `None` only if the row violates the schema CHECK constraint.
    pub fn status(&self) -> Option<ReservationStatus> {
        ReservationStatus::from_id(self.status)
    }
}

/// Insert arguments for a new reservation. Always persisted as Pending.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub room_id: DbId,
    pub user_id: DbId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub purpose: Option<String>,
}

/// A reservation joined with its room and requester display fields,
/// as shown in the "my reservations" and admin listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReservationDetail {
    pub id: DbId,
    pub room_id: DbId,
    pub room_name: String,
    pub room_capacity: i32,
    pub user_id: DbId,
    pub user_full_name: String,
    pub user_email: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub purpose: Option<String>,
    pub status: StatusId,
}

/// Listing row with the presentation fields resolved.
///
/// The label and badge class come from the pure mappings in
/// `roomease_core::status`; the lifecycle code never sees them.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationDetailView {
    #[serde(flatten)]
    pub detail: ReservationDetail,
    pub status_label: &'static str,
    pub status_class: &'static str,
}

impl From<ReservationDetail> for ReservationDetailView {
    fn from(detail: ReservationDetail) -> Self {
        let (status_label, status_class) = match ReservationStatus::from_id(detail.status) {
            Some(s) => (status::label(s), status::badge_class(s)),
            None => ("Unknown", "secondary"),
        };
        Self {
            detail,
            status_label,
            status_class,
        }
    }
}

/// Body for `POST /reservations`.
#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub room_id: DbId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    #[serde(default)]
    pub purpose: Option<String>,
}
