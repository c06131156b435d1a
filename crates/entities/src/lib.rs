//! Core entity definitions for Shopforge.
//!
//! This crate defines the five entity tables that make up a generated
//! dataset (users, products, orders, order items, payments) plus the
//! enumerations and money rounding rule shared by the generator and the
//! SQLite loader. Field names double as CSV column names.

mod dataset;
mod money;
mod order;
mod order_item;
mod payment;
mod product;
mod user;

pub use dataset::*;
pub use money::*;
pub use order::*;
pub use order_item::*;
pub use payment::*;
pub use product::*;
pub use user::*;
