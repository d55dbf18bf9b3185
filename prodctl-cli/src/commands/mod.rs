//! Command implementations for the prodctl CLI

pub mod catalog;
pub mod demo;

use anyhow::Result;
use prodctl_core::StoreConfig;
use prodctl_store::{schema, ProductManager, ProductRepo};

// Re-export the run functions for flat access from main.rs
pub use catalog::{
    run_add, run_count, run_find, run_get, run_list, run_remove, run_update,
};
pub use demo::run_demo;

/// Connect the pool, bootstrap the schema, and wrap the repository in
/// the logging manager.
pub async fn open_store() -> Result<ProductManager<ProductRepo>> {
    let pool = match std::env::var("DATABASE_URL") {
        Ok(url) => {
            tracing::debug!("connecting via DATABASE_URL");
            prodctl_store::connect(&url).await?
        }
        Err(_) => {
            let config = StoreConfig::from_env()?;
            prodctl_store::create_pool(&config).await?
        }
    };

    schema::run(&pool).await?;

    Ok(ProductManager::new(ProductRepo::new(pool)))
}
