//! Catalog commands - one subcommand per storage operation
//!
//! Record-printing commands take `--json` for machine-readable output;
//! the default is one human-readable line per product.

use anyhow::{bail, Result};
use clap::Parser;

use prodctl_core::{NewProduct, Product};
use prodctl_store::ProductStore;

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Product id
    pub id: i32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct FindArgs {
    /// Substring to match against product names
    pub pattern: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// List price
    #[arg(long)]
    pub price: f64,
}

#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Product id
    pub id: i32,

    /// New product name
    #[arg(long)]
    pub name: String,

    /// New list price
    #[arg(long)]
    pub price: f64,
}

#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Product id
    pub id: i32,
}

#[derive(Parser, Debug)]
pub struct CountArgs {}

fn print_product(product: &Product) {
    println!(
        "Id: {}, Name: {}, Price: {:.2}",
        product.id, product.name, product.price
    );
}

fn print_products(products: &[Product], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(products)?);
        return Ok(());
    }

    if products.is_empty() {
        println!("No products found for your query.");
    } else {
        for product in products {
            print_product(product);
        }
    }
    Ok(())
}

pub async fn run_list<S: ProductStore>(store: &S, args: ListArgs) -> Result<()> {
    let products = store.get_all().await?;
    print_products(&products, args.json)
}

pub async fn run_get<S: ProductStore>(store: &S, args: GetArgs) -> Result<()> {
    match store.get_by_id(args.id).await? {
        Some(product) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&product)?);
            } else {
                print_product(&product);
            }
            Ok(())
        }
        None => bail!("product {} not found", args.id),
    }
}

pub async fn run_find<S: ProductStore>(store: &S, args: FindArgs) -> Result<()> {
    let products = store.find_by_name(&args.pattern).await?;
    print_products(&products, args.json)
}

pub async fn run_add<S: ProductStore>(store: &S, args: AddArgs) -> Result<()> {
    let affected = store
        .create(&NewProduct::new(args.name, args.price))
        .await?;
    println!("{affected} record(s) inserted");
    Ok(())
}

pub async fn run_update<S: ProductStore>(store: &S, args: UpdateArgs) -> Result<()> {
    let affected = store
        .update(&Product {
            id: args.id,
            name: args.name,
            price: args.price,
        })
        .await?;

    if affected == 0 {
        bail!("product {} not found", args.id);
    }
    println!("{affected} record(s) updated");
    Ok(())
}

pub async fn run_remove<S: ProductStore>(store: &S, args: RemoveArgs) -> Result<()> {
    let affected = store.delete(args.id).await?;

    if affected == 0 {
        bail!("product {} not found", args.id);
    }
    println!("{affected} record(s) deleted");
    Ok(())
}

pub async fn run_count<S: ProductStore>(store: &S, _args: CountArgs) -> Result<()> {
    let total = store.count().await?;
    println!("{total} product(s) found");
    Ok(())
}
