use std::sync::Arc;

use roomease_booking::BookingService;
use roomease_events::{EventBus, Notifier};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: roomease_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The booking core (availability + lifecycle).
    pub booking: BookingService,
}

impl AppState {
    /// Wire up the state from a pool and config.
    ///
    /// The notifier (and the event bus behind it) lives inside the booking
    /// service; handlers only ever reach it through booking operations.
    pub fn new(pool: roomease_db::DbPool, config: ServerConfig) -> Self {
        let event_bus = Arc::new(EventBus::default());
        let notifier = Notifier::new(pool.clone(), event_bus);
        let booking = BookingService::new(pool.clone(), notifier);
        Self {
            pool,
            config: Arc::new(config),
            booking,
        }
    }
}
