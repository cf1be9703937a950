//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where updates exist

pub mod equipment;
pub mod notification;
pub mod reservation;
pub mod room;
pub mod user;
