//! A complete generated dataset and its on-disk file names.

use serde::{Deserialize, Serialize};

use crate::{Order, OrderItem, Payment, Product, User};

/// CSV file name for each entity table, in dependency order
/// (parents before children).
pub const USERS_CSV: &str = "users.csv";
pub const PRODUCTS_CSV: &str = "products.csv";
pub const ORDERS_CSV: &str = "orders.csv";
pub const ORDER_ITEMS_CSV: &str = "order_items.csv";
pub const PAYMENTS_CSV: &str = "payments.csv";

/// The five entity tables of one dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
}

impl Dataset {
    /// Total number of rows across all tables.
    pub fn row_count(&self) -> usize {
        self.users.len()
            + self.products.len()
            + self.orders.len()
            + self.order_items.len()
            + self.payments.len()
    }
}
