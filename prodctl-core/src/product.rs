//! Product entity
//!
//! Maps rows of the `products` table. All mapped columns are NOT NULL,
//! so a fetched `Product` is always fully populated.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product record from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Identifier assigned by the database on insert
    pub id: i32,
    #[sqlx(rename = "product_name")]
    pub name: String,
    /// List price
    #[sqlx(rename = "list_price")]
    pub price: f64,
}

/// Insert payload for a new product.
///
/// Carries no id: the database assigns one, so a caller-supplied
/// identifier is structurally impossible rather than silently ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}
