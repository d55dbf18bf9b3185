//! prodctl CLI - product catalog maintenance over the store layer
//!
//! Each subcommand maps onto one storage operation; `demo` replays the
//! historical maintenance walk-through (update a known record, search
//! by substring, report the count).

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "prodctl",
    version,
    about = "Product catalog maintenance tool"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every product
    List(commands::catalog::ListArgs),
    /// Fetch a single product by id
    Get(commands::catalog::GetArgs),
    /// Search products by name substring
    Find(commands::catalog::FindArgs),
    /// Insert a new product
    Add(commands::catalog::AddArgs),
    /// Update a product's name and price
    Update(commands::catalog::UpdateArgs),
    /// Delete a product by id
    Remove(commands::catalog::RemoveArgs),
    /// Print the number of products
    Count(commands::catalog::CountArgs),
    /// Run the demonstration sequence
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(cli.debug)?;

    let store = commands::open_store().await?;

    match cli.command {
        Command::List(args) => commands::run_list(&store, args).await,
        Command::Get(args) => commands::run_get(&store, args).await,
        Command::Find(args) => commands::run_find(&store, args).await,
        Command::Add(args) => commands::run_add(&store, args).await,
        Command::Update(args) => commands::run_update(&store, args).await,
        Command::Remove(args) => commands::run_remove(&store, args).await,
        Command::Count(args) => commands::run_count(&store, args).await,
        Command::Demo => commands::run_demo(&store).await,
    }
}
