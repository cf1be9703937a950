pub mod admin;
pub mod notifications;
pub mod reservations;
pub mod rooms;
