//! Order item (line item) entity definition.

use serde::{Deserialize, Serialize};

/// A single line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Sequential identifier starting at 1, across all orders.
    pub item_id: u32,
    /// Owning order.
    pub order_id: u32,
    /// Purchased product.
    pub product_id: u32,
    /// Units purchased, between 1 and 5.
    pub quantity: u32,
    /// Price charged per unit, within ±10% of the product base price,
    /// rounded to 2 decimals.
    pub unit_price: f64,
    /// `round2(quantity * unit_price)`. Never negative.
    pub line_total: f64,
}
