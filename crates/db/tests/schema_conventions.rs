use sqlx::PgPool;

/// Unique constraints must be named `uq_*` so the API layer can map
/// violations to 409 responses.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unique_constraints_follow_naming_convention(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, constraint_name
         FROM information_schema.table_constraints
         WHERE constraint_type = 'UNIQUE'
           AND table_schema = 'public'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, constraint) in &rows {
        assert!(
            constraint.starts_with("uq_"),
            "Unique constraint {constraint} on {table} should be named uq_*"
        );
    }
}

/// The status column only admits the four known discriminants.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_check_constraint_rejects_unknown_values(pool: PgPool) {
    let user_id: i64 = sqlx::query_scalar(
        "INSERT INTO users (username, email, full_name)
         VALUES ('alice', 'alice@example.com', 'alice')
         RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    let room_id: i64 =
        sqlx::query_scalar("INSERT INTO rooms (name, capacity) VALUES ('r', 4) RETURNING id")
            .fetch_one(&pool)
            .await
            .unwrap();

    let result = sqlx::query(
        "INSERT INTO reservations (room_id, user_id, start_time, end_time, status)
         VALUES ($1, $2, NOW() + interval '1 day', NOW() + interval '1 day 1 hour', 9)",
    )
    .bind(room_id)
    .bind(user_id)
    .execute(&pool)
    .await;

    assert!(result.is_err());
}

/// Reversed intervals never reach the table, even if application
/// validation is bypassed.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_interval_check_constraint(pool: PgPool) {
    let user_id: i64 = sqlx::query_scalar(
        "INSERT INTO users (username, email, full_name)
         VALUES ('alice', 'alice@example.com', 'alice')
         RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    let room_id: i64 =
        sqlx::query_scalar("INSERT INTO rooms (name, capacity) VALUES ('r', 4) RETURNING id")
            .fetch_one(&pool)
            .await
            .unwrap();

    let result = sqlx::query(
        "INSERT INTO reservations (room_id, user_id, start_time, end_time)
         VALUES ($1, $2, NOW() + interval '2 hours', NOW() + interval '1 hour')",
    )
    .bind(room_id)
    .bind(user_id)
    .execute(&pool)
    .await;

    assert!(result.is_err());
}
