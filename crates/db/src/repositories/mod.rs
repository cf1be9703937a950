//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods take `&PgPool` unless they participate in a booking transaction,
//! in which case they accept any `PgExecutor` so the caller can pass
//! `&mut *tx`.

pub mod equipment_repo;
pub mod notification_repo;
pub mod reservation_repo;
pub mod room_repo;
pub mod user_repo;

pub use equipment_repo::EquipmentRepo;
pub use notification_repo::NotificationRepo;
pub use reservation_repo::ReservationRepo;
pub use room_repo::RoomRepo;
pub use user_repo::UserRepo;
