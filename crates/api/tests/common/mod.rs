//! Shared helpers for HTTP-level integration tests.
//!
//! Tests talk to the full router (middleware included) through
//! `tower::ServiceExt::oneshot`, so no TCP listener is needed.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use chrono::{DateTime, Duration, Timelike, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use roomease_api::config::ServerConfig;
use roomease_api::router::build_app_router;
use roomease_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

/// The caller's identity, forwarded the way the reverse proxy would.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: i64,
    pub admin: bool,
}

/// A plain authenticated user.
pub fn as_user(user_id: i64) -> Identity {
    Identity {
        user_id,
        admin: false,
    }
}

/// An administrator.
pub fn as_admin(user_id: i64) -> Identity {
    Identity {
        user_id,
        admin: true,
    }
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    identity: Option<Identity>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(identity) = identity {
        builder = builder.header("x-user-id", identity.user_id.to_string());
        if identity.admin {
            builder = builder.header("x-user-role", "admin");
        }
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, identity: Option<Identity>) -> Response<Body> {
    send(app, Method::GET, uri, identity, None).await
}

pub async fn post(app: Router, uri: &str, identity: Option<Identity>) -> Response<Body> {
    send(app, Method::POST, uri, identity, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    identity: Option<Identity>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, identity, Some(body)).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    identity: Option<Identity>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, identity, Some(body)).await
}

pub async fn delete(app: Router, uri: &str, identity: Option<Identity>) -> Response<Body> {
    send(app, Method::DELETE, uri, identity, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the standard `{ "error": ..., "code": ... }` error shape.
pub async fn assert_error_body(response: Response<Body>, expected_code: &str) {
    let json = body_json(response).await;
    assert_eq!(json["code"], expected_code);
    assert!(json["error"].is_string());
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

pub async fn seed_user(pool: &PgPool, username: &str, is_admin: bool) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, email, full_name, is_admin)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(username)
    .bind(format!("{username}@example.com"))
    .bind(username)
    .bind(is_admin)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_room(pool: &PgPool, name: &str, capacity: i32) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO rooms (name, capacity) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(capacity)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Attach equipment to a room directly, bypassing the API.
pub async fn attach_equipment(pool: &PgPool, room_id: i64, equipment_id: i64) {
    sqlx::query("INSERT INTO room_equipment (room_id, equipment_id) VALUES ($1, $2)")
        .bind(room_id)
        .bind(equipment_id)
        .execute(pool)
        .await
        .unwrap();
}

/// Look up a seeded equipment item by name (the schema migration seeds a
/// starter catalogue).
pub async fn equipment_id_by_name(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("SELECT id FROM equipment WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Read a reservation's raw status discriminant.
pub async fn status_of(pool: &PgPool, reservation_id: i64) -> i16 {
    sqlx::query_scalar("SELECT status FROM reservations WHERE id = $1")
        .bind(reservation_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// A deterministic future slot boundary: tomorrow at `hour:minute` UTC.
pub fn tomorrow_at(hour: u32, minute: u32) -> DateTime<Utc> {
    (Utc::now() + Duration::days(1))
        .with_hour(hour)
        .and_then(|t| t.with_minute(minute))
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap()
}

/// Create a Pending reservation through the API and return its id.
pub async fn create_reservation(
    pool: &PgPool,
    user_id: i64,
    room_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/reservations",
        Some(as_user(user_id)),
        serde_json::json!({
            "room_id": room_id,
            "start_time": start,
            "end_time": end,
            "purpose": "Team meeting"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
