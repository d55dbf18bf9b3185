//! Demonstration walk-through kept from the tool's origins: update a
//! known record in place, search by substring, report the total count.
//!
//! Each step logs its failure and the walk continues - the sequence
//! never propagates a storage error.

use anyhow::Result;
use tracing::warn;

use prodctl_store::ProductStore;

/// Record the walk-through mutates.
const DEMO_PRODUCT_ID: i32 = 77;
/// Replacement name and price written to the demo record.
const DEMO_NAME: &str = "Samsung S8";
const DEMO_PRICE: f64 = 5000.0;
/// Substring used for the search step.
const DEMO_SEARCH: &str = "efe";

pub async fn run_demo<S: ProductStore>(store: &S) -> Result<()> {
    // Update: fetch the demo record, rename and reprice it, persist
    match store.get_by_id(DEMO_PRODUCT_ID).await {
        Ok(Some(mut product)) => {
            product.name = DEMO_NAME.to_string();
            product.price = DEMO_PRICE;

            match store.update(&product).await {
                Ok(affected) => println!("{affected} record(s) updated"),
                Err(err) => warn!(%err, "update step failed"),
            }
        }
        Ok(None) => println!("product {DEMO_PRODUCT_ID} not found, skipping update"),
        Err(err) => warn!(%err, "fetch step failed"),
    }

    // Search
    match store.find_by_name(DEMO_SEARCH).await {
        Ok(products) if products.is_empty() => {
            println!("No products found for your query.");
        }
        Ok(products) => {
            for product in &products {
                println!(
                    "Id: {}, Name: {}, Price: {:.2}",
                    product.id, product.name, product.price
                );
            }
        }
        Err(err) => warn!(%err, "search step failed"),
    }

    // Count
    match store.count().await {
        Ok(total) => println!("{total} product(s) found"),
        Err(err) => warn!(%err, "count step failed"),
    }

    Ok(())
}
