//! RoomEase event bus and notification infrastructure.
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`, carrying [`ReservationEvent`]s for any
//!   listener (websocket push, audit, future digest jobs).
//! - [`Notifier`] — the notification collaborator: persists a message for a
//!   user and publishes the matching event. Fire-and-forget: failures are
//!   logged, never propagated to the caller.

pub mod bus;
pub mod notifier;

pub use bus::{EventBus, ReservationEvent, ReservationEventKind};
pub use notifier::Notifier;
