//! In-process event bus backed by a `tokio::sync::broadcast` channel.

use chrono::{DateTime, Utc};
use roomease_core::types::DbId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// What happened to a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationEventKind {
    Created,
    Approved,
    Rejected,
    Cancelled,
}

impl ReservationEventKind {
    /// Dot-separated event name, e.g. `"reservation.approved"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ReservationEventKind::Created => "reservation.created",
            ReservationEventKind::Approved => "reservation.approved",
            ReservationEventKind::Rejected => "reservation.rejected",
            ReservationEventKind::Cancelled => "reservation.cancelled",
        }
    }
}

/// A reservation lifecycle event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationEvent {
    pub kind: ReservationEventKind,
    pub reservation_id: DbId,
    pub room_id: DbId,
    /// The requester the event concerns (and is notified about).
    pub user_id: DbId,
    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl ReservationEvent {
    pub fn new(
        kind: ReservationEventKind,
        reservation_id: DbId,
        room_id: DbId,
        user_id: DbId,
    ) -> Self {
        Self {
            kind,
            reservation_id,
            room_id,
            user_id,
            timestamp: Utc::now(),
        }
    }
}

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so any number of subscribers can
/// independently receive every published [`ReservationEvent`]. Designed to
/// be shared via `Arc<EventBus>`.
pub struct EventBus {
    sender: broadcast::Sender<ReservationEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed messages are dropped
    /// and slow receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// the notification row written by [`crate::Notifier`] is the durable
    /// record.
    pub fn publish(&self, event: ReservationEvent) {
        // SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<ReservationEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
