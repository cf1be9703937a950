//! The notification collaborator.
//!
//! Owns the "send message to user" side effect of reservation transitions.
//! Callers invoke it after their transaction has committed; a failed
//! delivery is logged and swallowed so it can never undo a transition.

use std::sync::Arc;

use roomease_core::types::DbId;
use roomease_db::repositories::NotificationRepo;
use roomease_db::DbPool;

use crate::bus::{EventBus, ReservationEvent};

/// Persists notifications and fans out lifecycle events.
///
/// Cheaply cloneable; share it across handlers and services.
#[derive(Clone)]
pub struct Notifier {
    pool: DbPool,
    bus: Arc<EventBus>,
}

impl Notifier {
    pub fn new(pool: DbPool, bus: Arc<EventBus>) -> Self {
        Self { pool, bus }
    }

    /// Record a message for a user. Fire-and-forget: a storage failure is
    /// logged at WARN and otherwise ignored.
    pub async fn notify(&self, user_id: DbId, message: &str) {
        if let Err(err) = NotificationRepo::create(&self.pool, user_id, message).await {
            tracing::warn!(
                user_id,
                error = %err,
                "failed to store notification; the transition is already committed"
            );
        }
    }

    /// Publish a lifecycle event to in-process subscribers.
    pub fn publish(&self, event: ReservationEvent) {
        self.bus.publish(event);
    }

    /// Convenience: notify the user and publish the matching event.
    pub async fn notify_and_publish(&self, event: ReservationEvent, message: &str) {
        self.notify(event.user_id, message).await;
        self.publish(event);
    }
}
