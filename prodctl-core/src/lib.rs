//! prodctl-core: shared types for the prodctl tools
//!
//! Holds the product entity, the storage error type, and the connection
//! configuration used by prodctl-store and prodctl-cli.

pub mod config;
pub mod error;
pub mod product;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use product::{NewProduct, Product};
