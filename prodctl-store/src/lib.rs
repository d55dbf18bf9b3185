//! prodctl-store: pool, schema bootstrap, and the product repository
//!
//! # Design
//!
//! - Connection pool handle injected into the repository - no per-call
//!   connection open/close
//! - Every operation is one parameterized statement
//! - Zero rows matched on update/delete is a result, not an error
//! - The manager wraps the repository behind the same trait and adds
//!   operation logging

pub mod manager;
pub mod pool;
pub mod repo;
pub mod schema;

pub use manager::ProductManager;
pub use pool::{connect, connect_with_options, create_pool};
pub use repo::{ProductRepo, ProductStore};
