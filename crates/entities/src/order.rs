//! Order entity and status enumeration.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Every status, paired with its sampling weight where the
    /// generator needs one.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Completed, Self::Cancelled];

    /// Returns the snake_case wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placed order.
///
/// `total_amount` is a placeholder (0.0) until order item generation
/// completes; [`crate::OrderItem`] line totals are then aggregated and
/// back-filled. An order total is not valid before that stage has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Sequential identifier starting at 1.
    pub order_id: u32,
    /// Owning user.
    pub user_id: u32,
    /// Order date, never before the owning user's signup date.
    pub order_date: NaiveDate,
    /// Sum of the order's line totals, rounded to 2 decimals.
    pub total_amount: f64,
    /// Status.
    pub order_status: OrderStatus,
}
