//! Integration tests for the room and equipment repositories.
//!
//! Exercises the repository layer against a real database:
//! - Room CRUD with equipment assignment
//! - Capacity / equipment search
//! - Unique constraint violations
//! - The active-reservation existence check

use chrono::{Duration, Utc};
use roomease_db::models::equipment::CreateEquipment;
use roomease_db::models::reservation::NewReservation;
use roomease_db::models::room::{CreateRoom, RoomSearch, UpdateRoom};
use roomease_db::models::user::CreateUser;
use roomease_db::repositories::{EquipmentRepo, ReservationRepo, RoomRepo, UserRepo};
use roomease_core::ReservationStatus;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_room(name: &str, capacity: i32) -> CreateRoom {
    CreateRoom {
        name: name.to_string(),
        capacity,
        description: None,
        is_available: None,
        equipment_ids: Vec::new(),
    }
}

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        full_name: username.to_string(),
        department: None,
        is_admin: false,
    }
}

// ---------------------------------------------------------------------------
// Room CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_room(pool: PgPool) {
    let room = RoomRepo::create(&pool, &new_room("Board Room", 8))
        .await
        .unwrap();
    assert_eq!(room.name, "Board Room");
    assert_eq!(room.capacity, 8);
    assert!(room.is_available);

    let found = RoomRepo::find_by_id(&pool, room.id).await.unwrap().unwrap();
    assert_eq!(found.id, room.id);

    assert!(RoomRepo::find_by_id(&pool, 999_999)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_room_with_equipment(pool: PgPool) {
    let projector = EquipmentRepo::create(
        &pool,
        &CreateEquipment {
            name: "Laser projector".to_string(),
        },
    )
    .await
    .unwrap();

    let mut input = new_room("Cinema", 30);
    input.equipment_ids = vec![projector.id];
    let room = RoomRepo::create(&pool, &input).await.unwrap();

    let detailed = RoomRepo::find_by_id_with_equipment(&pool, room.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detailed.equipment.len(), 1);
    assert_eq!(detailed.equipment[0].name, "Laser projector");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_equipment_set(pool: PgPool) {
    let projector = EquipmentRepo::create(
        &pool,
        &CreateEquipment {
            name: "Laser projector".to_string(),
        },
    )
    .await
    .unwrap();
    let phone = EquipmentRepo::create(
        &pool,
        &CreateEquipment {
            name: "Speakerphone".to_string(),
        },
    )
    .await
    .unwrap();

    let mut input = new_room("Board Room", 8);
    input.equipment_ids = vec![projector.id];
    let room = RoomRepo::create(&pool, &input).await.unwrap();

    let updated = RoomRepo::update(
        &pool,
        room.id,
        &UpdateRoom {
            name: None,
            capacity: Some(10),
            description: Some("Refurbished".to_string()),
            is_available: None,
            equipment_ids: Some(vec![phone.id]),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.capacity, 10);
    assert_eq!(updated.name, "Board Room");

    let equipment = RoomRepo::equipment_for_room(&pool, room.id).await.unwrap();
    assert_eq!(equipment.len(), 1);
    assert_eq!(equipment[0].id, phone.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_room_cascades_reservations(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("alice")).await.unwrap();
    let room = RoomRepo::create(&pool, &new_room("Board Room", 8))
        .await
        .unwrap();

    let start = Utc::now() + Duration::days(1);
    let reservation = ReservationRepo::create(
        &pool,
        &NewReservation {
            room_id: room.id,
            user_id: user.id,
            start_time: start,
            end_time: start + Duration::hours(1),
            purpose: None,
        },
    )
    .await
    .unwrap();

    assert!(RoomRepo::delete(&pool, room.id).await.unwrap());

    assert!(ReservationRepo::find_by_id(&pool, reservation.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_excludes_unavailable_rooms(pool: PgPool) {
    RoomRepo::create(&pool, &new_room("Open", 8)).await.unwrap();

    let mut closed = new_room("Closed", 8);
    closed.is_available = Some(false);
    RoomRepo::create(&pool, &closed).await.unwrap();

    let rooms = RoomRepo::search(
        &pool,
        &RoomSearch {
            min_capacity: None,
            equipment_ids: Vec::new(),
        },
    )
    .await
    .unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].name, "Open");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_by_capacity_and_equipment(pool: PgPool) {
    let projector = EquipmentRepo::create(
        &pool,
        &CreateEquipment {
            name: "Laser projector".to_string(),
        },
    )
    .await
    .unwrap();

    let mut big_equipped = new_room("Big Equipped", 20);
    big_equipped.equipment_ids = vec![projector.id];
    RoomRepo::create(&pool, &big_equipped).await.unwrap();

    RoomRepo::create(&pool, &new_room("Big Bare", 20))
        .await
        .unwrap();

    let mut small_equipped = new_room("Small Equipped", 4);
    small_equipped.equipment_ids = vec![projector.id];
    RoomRepo::create(&pool, &small_equipped).await.unwrap();

    let rooms = RoomRepo::search(
        &pool,
        &RoomSearch {
            min_capacity: Some(10),
            equipment_ids: vec![projector.id],
        },
    )
    .await
    .unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].name, "Big Equipped");
}

// ---------------------------------------------------------------------------
// Constraints and guards
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_equipment_name_violates_unique_constraint(pool: PgPool) {
    let input = CreateEquipment {
        name: "Laser projector".to_string(),
    };
    EquipmentRepo::create(&pool, &input).await.unwrap();

    let err = EquipmentRepo::create(&pool, &input).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_equipment_name"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_active_exists_for_room_tracks_status(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("alice")).await.unwrap();
    let room = RoomRepo::create(&pool, &new_room("Board Room", 8))
        .await
        .unwrap();

    assert!(!ReservationRepo::active_exists_for_room(&pool, room.id)
        .await
        .unwrap());

    let start = Utc::now() + Duration::days(1);
    let reservation = ReservationRepo::create(
        &pool,
        &NewReservation {
            room_id: room.id,
            user_id: user.id,
            start_time: start,
            end_time: start + Duration::hours(1),
            purpose: None,
        },
    )
    .await
    .unwrap();

    assert!(ReservationRepo::active_exists_for_room(&pool, room.id)
        .await
        .unwrap());

    ReservationRepo::set_status(&pool, reservation.id, ReservationStatus::Cancelled)
        .await
        .unwrap();

    assert!(!ReservationRepo::active_exists_for_room(&pool, room.id)
        .await
        .unwrap());
}
