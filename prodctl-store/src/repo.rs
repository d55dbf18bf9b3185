//! Product repository
//!
//! Every operation is a single parameterized statement against the
//! pooled connection. Rows-affected counts come straight from the
//! driver; zero matches on update/delete is a normal result, not an
//! error. No operation spans a transaction.

use async_trait::async_trait;
use sqlx::PgPool;

use prodctl_core::{NewProduct, Product, Result};

/// Storage contract for the products table.
///
/// One concrete implementation ([`ProductRepo`]) issues the SQL; the
/// manager wrapper implements the same trait and forwards to it.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetch every product. Empty when the table has no rows.
    async fn get_all(&self) -> Result<Vec<Product>>;

    /// Fetch one product by primary key. `None` when no row matches.
    async fn get_by_id(&self, id: i32) -> Result<Option<Product>>;

    /// Fetch products whose name contains the given substring.
    /// Case sensitivity follows the database collation.
    async fn find_by_name(&self, substring: &str) -> Result<Vec<Product>>;

    /// Total number of products.
    async fn count(&self) -> Result<i64>;

    /// Insert a new product; the database assigns the id.
    /// Returns the rows-affected count (1 on success).
    async fn create(&self, product: &NewProduct) -> Result<u64>;

    /// Update name and price for the row matching `product.id`.
    /// Returns 0 when no row matched.
    async fn update(&self, product: &Product) -> Result<u64>;

    /// Delete the row matching `id`. Returns 0 when no row matched.
    async fn delete(&self, id: i32) -> Result<u64>;
}

/// SQL implementation backed by a sqlx connection pool.
///
/// The pool handle is cheap to clone; each call checks a connection out
/// for exactly one statement and returns it when the future completes.
#[derive(Debug, Clone)]
pub struct ProductRepo {
    pool: PgPool,
}

impl ProductRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for ProductRepo {
    async fn get_all(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, product_name, list_price FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, product_name, list_price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn find_by_name(&self, substring: &str) -> Result<Vec<Product>> {
        let pattern = format!("%{}%", substring);

        let products = sqlx::query_as::<_, Product>(
            "SELECT id, product_name, list_price FROM products \
             WHERE product_name LIKE $1 ORDER BY id",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn count(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.0)
    }

    async fn create(&self, product: &NewProduct) -> Result<u64> {
        let result = sqlx::query(
            "INSERT INTO products (product_name, list_price, discontinued) \
             VALUES ($1, $2, TRUE)",
        )
        .bind(&product.name)
        .bind(product.price)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn update(&self, product: &Product) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE products SET product_name = $1, list_price = $2 WHERE id = $3",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
