//! Schema bootstrap for the products table

use sqlx::PgPool;

use prodctl_core::Result;

/// Create the products table if it does not exist.
///
/// Idempotent; run once at startup. The id is assigned by the database,
/// and `discontinued` is written as a fixed TRUE on every insert and
/// never read back.
pub async fn run(pool: &PgPool) -> Result<()> {
    tracing::info!("Running products schema bootstrap...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id           INTEGER GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
            product_name TEXT NOT NULL,
            list_price   DOUBLE PRECISION NOT NULL,
            discontinued BOOLEAN NOT NULL DEFAULT TRUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
