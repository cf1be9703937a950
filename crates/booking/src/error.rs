//! Error type for booking operations.

use roomease_core::status::StatusId;
use roomease_core::types::DbId;
use roomease_core::CoreError;

/// A failed booking operation. All variants are per-request outcomes; the
/// underlying transaction has been rolled back and no state changed.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// A domain rule refused the operation (validation, conflict, state,
    /// ownership, missing entity).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A persisted status value outside the known discriminants. Cannot
    /// happen while the schema CHECK constraint holds.
    #[error("reservation {reservation_id} has corrupt status value {status}")]
    CorruptStatus { reservation_id: DbId, status: StatusId },
}

/// Convenience alias for booking operation results.
pub type BookingResult<T> = Result<T, BookingError>;
