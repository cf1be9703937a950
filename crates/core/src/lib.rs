//! RoomEase domain logic.
//!
//! This crate holds the pure, database-free rules of the booking system:
//! the reservation status state machine, the half-open interval overlap
//! predicate, and booking-request validation. It has zero internal deps so
//! the `db`, `booking`, and `api` crates can all build on it.

pub mod error;
pub mod interval;
pub mod reservation;
pub mod status;
pub mod types;

pub use error::CoreError;
pub use status::ReservationStatus;
