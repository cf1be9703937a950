//! HTTP-level integration tests for the notification centre.

mod common;

use axum::http::StatusCode;
use common::{as_admin, as_user, body_json, get, post};
use sqlx::PgPool;

async fn seed_booking_with_notification(pool: &PgPool, user: i64) -> i64 {
    let room = common::seed_room(pool, "Board Room", 8).await;
    common::create_reservation(
        pool,
        user,
        room,
        common::tomorrow_at(9, 0),
        common::tomorrow_at(10, 0),
    )
    .await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_booking_creates_a_notification(pool: PgPool) {
    let user = common::seed_user(&pool, "alice", false).await;
    seed_booking_with_notification(&pool, user).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/notifications", Some(as_user(user))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert!(items[0]["message"]
        .as_str()
        .unwrap()
        .contains("Board Room"));
    assert_eq!(items[0]["is_read"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_approval_notifies_the_requester(pool: PgPool) {
    let user = common::seed_user(&pool, "alice", false).await;
    let admin = common::seed_user(&pool, "root", true).await;
    let id = seed_booking_with_notification(&pool, user).await;

    let app = common::build_test_app(pool.clone());
    let response = post(
        app,
        &format!("/api/v1/admin/reservations/{id}/approve"),
        Some(as_admin(admin)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/notifications", Some(as_user(user))).await;
    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items
        .iter()
        .any(|n| n["message"].as_str().unwrap().contains("approved")));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unread_count_and_mark_read(pool: PgPool) {
    let user = common::seed_user(&pool, "alice", false).await;
    seed_booking_with_notification(&pool, user).await;

    let app = common::build_test_app(pool.clone());
    let response = get(
        app,
        "/api/v1/notifications/unread-count",
        Some(as_user(user)),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 1);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/notifications", Some(as_user(user))).await;
    let json = body_json(response).await;
    let notification_id = json["data"][0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post(
        app,
        &format!("/api/v1/notifications/{notification_id}/read"),
        Some(as_user(user)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(
        app,
        "/api/v1/notifications/unread-count",
        Some(as_user(user)),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 0);

    // Unread filter now excludes it.
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/notifications?unread_only=true",
        Some(as_user(user)),
    )
    .await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cannot_read_someone_elses_notification(pool: PgPool) {
    let alice = common::seed_user(&pool, "alice", false).await;
    let bob = common::seed_user(&pool, "bob", false).await;
    seed_booking_with_notification(&pool, alice).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/notifications", Some(as_user(alice))).await;
    let json = body_json(response).await;
    let notification_id = json["data"][0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post(
        app,
        &format!("/api/v1/notifications/{notification_id}/read"),
        Some(as_user(bob)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_all_read(pool: PgPool) {
    let user = common::seed_user(&pool, "alice", false).await;
    let admin = common::seed_user(&pool, "root", true).await;
    let id = seed_booking_with_notification(&pool, user).await;

    let app = common::build_test_app(pool.clone());
    post(
        app,
        &format!("/api/v1/admin/reservations/{id}/reject"),
        Some(as_admin(admin)),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = post(
        app,
        "/api/v1/notifications/read-all",
        Some(as_user(user)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["marked_read"], 2);

    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/notifications/unread-count",
        Some(as_user(user)),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 0);
}
