//! Payment entity, method and status enumerations.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Upi,
    NetBanking,
}

impl PaymentMethod {
    /// Every method, sampled uniformly by the generator.
    pub const ALL: [Self; 4] = [
        Self::CreditCard,
        Self::DebitCard,
        Self::Upi,
        Self::NetBanking,
    ];

    /// Returns the snake_case wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::DebitCard => "debit_card",
            Self::Upi => "upi",
            Self::NetBanking => "net_banking",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Successful,
    Failed,
    Pending,
}

impl PaymentStatus {
    /// Every status.
    pub const ALL: [Self; 3] = [Self::Successful, Self::Failed, Self::Pending];

    /// Returns the snake_case wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Successful => "successful",
            Self::Failed => "failed",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payment against an order.
///
/// Payments are 1:1 with orders: `payment_id` reuses the order id, so
/// there is no ledger of retried or partial payments for one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Identifier, equal to `order_id`.
    pub payment_id: u32,
    /// Paid order.
    pub order_id: u32,
    /// Method.
    pub payment_method: PaymentMethod,
    /// Status.
    pub payment_status: PaymentStatus,
    /// Payment date, never before the order date.
    pub payment_date: NaiveDate,
    /// Amount paid. Equals the order total when successful; always at
    /// least 0.01.
    pub amount_paid: f64,
}
