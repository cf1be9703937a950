//! Reservation conflict detection and lifecycle management.
//!
//! The two cooperating components of the booking core:
//!
//! - [`AvailabilityChecker`] — pure overlap queries against the reservation
//!   table (Pending and Approved both block a slot).
//! - [`BookingService`] — the reservation state machine: create (Pending),
//!   approve, reject, cancel. Every transition runs its conflict check and
//!   status write inside one database transaction, serialized per room by a
//!   row lock, so two concurrent requests can never both pass the check and
//!   both commit.
//!
//! This crate is the library-level contract consumed by `roomease-api`; it
//! owns no wire protocol.

pub mod availability;
pub mod error;
pub mod service;

pub use availability::AvailabilityChecker;
pub use error::{BookingError, BookingResult};
pub use service::BookingService;
