//! Synthetic e-commerce dataset generation for Shopforge.
//!
//! Generation is a staged, single-pass pipeline: users and products are
//! sampled independently, orders reference users, order items reference
//! orders and products, order totals are back-filled from the line
//! totals, and payments are derived last because their amounts depend
//! on the finalized totals.

mod error;
mod export;
mod generator;
mod names;
mod sampler;

pub use error::*;
pub use export::*;
pub use generator::*;
pub use sampler::*;
