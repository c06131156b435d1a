//! SQLite ingestion of generated Shopforge datasets.
//!
//! The store recreates a constrained schema (drop-and-reload, so a
//! re-run is idempotent) and bulk-inserts rows in dependency order.
//! Referential and value validation is delegated to SQLite's declared
//! constraints; a violating row aborts the whole batch for its table.

mod db;
mod error;
mod loader;
mod schema;

pub use db::*;
pub use error::*;
pub use loader::*;
