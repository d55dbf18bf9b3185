//! Product manager - pass-through wrapper over a [`ProductStore`]
//!
//! Forwards every call unchanged and emits a tracing event per
//! operation. This is the extension seam in front of the repository;
//! the logging is the cross-cutting behavior that justifies it.

use async_trait::async_trait;
use tracing::debug;

use prodctl_core::{NewProduct, Product, Result};

use crate::repo::ProductStore;

/// Wraps any store implementation, logging each operation.
///
/// No independent state and no independent error handling: arguments,
/// results, and errors pass through untouched.
#[derive(Debug, Clone)]
pub struct ProductManager<S> {
    store: S,
}

impl<S: ProductStore> ProductManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: ProductStore> ProductStore for ProductManager<S> {
    async fn get_all(&self) -> Result<Vec<Product>> {
        let products = self.store.get_all().await?;
        debug!(count = products.len(), "fetched all products");
        Ok(products)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>> {
        let product = self.store.get_by_id(id).await?;
        debug!(id, found = product.is_some(), "fetched product by id");
        Ok(product)
    }

    async fn find_by_name(&self, substring: &str) -> Result<Vec<Product>> {
        let products = self.store.find_by_name(substring).await?;
        debug!(
            substring,
            matches = products.len(),
            "searched products by name"
        );
        Ok(products)
    }

    async fn count(&self) -> Result<i64> {
        let total = self.store.count().await?;
        debug!(total, "counted products");
        Ok(total)
    }

    async fn create(&self, product: &NewProduct) -> Result<u64> {
        let affected = self.store.create(product).await?;
        debug!(name = %product.name, affected, "created product");
        Ok(affected)
    }

    async fn update(&self, product: &Product) -> Result<u64> {
        let affected = self.store.update(product).await?;
        debug!(id = product.id, affected, "updated product");
        Ok(affected)
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        let affected = self.store.delete(id).await?;
        debug!(id, affected, "deleted product");
        Ok(affected)
    }
}
