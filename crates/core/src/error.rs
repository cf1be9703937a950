//! Domain error type shared by every layer above `core`.

use crate::types::DbId;

/// A per-request domain failure. None of these are fatal to the process;
/// all are reported to the caller and leave persisted state unchanged.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed input: end <= start, start in the past, oversized field.
    #[error("{0}")]
    Validation(String),

    /// An overlapping reservation blocks the requested slot or transition.
    #[error("{0}")]
    Conflict(String),

    /// A status transition was attempted from a state that does not allow it.
    #[error("{0}")]
    State(String),

    /// The acting user is not allowed to perform the action (e.g. cancelling
    /// someone else's reservation).
    #[error("{0}")]
    Forbidden(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] on a reservation.
    pub fn reservation_not_found(id: DbId) -> Self {
        CoreError::NotFound {
            entity: "Reservation",
            id,
        }
    }

    /// Shorthand for a [`CoreError::NotFound`] on a room.
    pub fn room_not_found(id: DbId) -> Self {
        CoreError::NotFound { entity: "Room", id }
    }
}
