//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Each storage
//! operation checks a connection out for the duration of one statement;
//! release is guaranteed on every exit path.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use prodctl_core::{config::DEFAULT_MAX_CONNECTIONS, Result, StoreConfig};

/// Create a PostgreSQL connection pool.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = connect("postgres://localhost/prodctl").await?;
/// ```
pub async fn connect(database_url: &str) -> Result<PgPool> {
    connect_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn connect_with_options(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create a pool from resolved configuration.
pub async fn create_pool(config: &StoreConfig) -> Result<PgPool> {
    tracing::info!(url = %config.display_url(), "connecting to product database");
    connect_with_options(&config.database_url(), config.max_connections).await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p prodctl-store -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = connect(&url).await.expect("pool creation failed");

        // Verify we can execute a query
        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = connect(&url).await.expect("pool creation failed");

        // Spawn 10 concurrent tasks
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i32,) = sqlx::query_as("SELECT $1::int")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        // All tasks should complete successfully
        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i32);
        }
    }

    #[tokio::test]
    async fn unreachable_database_is_an_error_not_a_panic() {
        // Port 1 should refuse immediately; the failure must surface as Err.
        let result = connect("postgres://nobody@127.0.0.1:1/nothing").await;
        assert!(result.is_err());
    }
}
