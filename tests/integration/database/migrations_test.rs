//! Schema created by the migrations

use crate::common::database::{create_test_pool, run_migrations};

#[tokio::test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_migrations_run_twice() {
    let pool = create_test_pool().await;
    assert!(run_migrations(&pool).await.is_ok());
    assert!(run_migrations(&pool).await.is_ok());
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_data_table_exists() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await.unwrap();

    let result = sqlx::query(
        "SELECT id, sender, message, sleep_ms, timestamp_client, timestamp_server FROM data LIMIT 1",
    )
    .execute(&pool)
    .await;

    assert!(result.is_ok(), "data table should have every record column");
}
