//! User entity definition.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered shop user.
///
/// Serde field names are the CSV column names, in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Sequential identifier starting at 1.
    pub user_id: u32,
    /// Display name.
    pub full_name: String,
    /// Globally unique email address.
    pub email: String,
    /// Date the user signed up (ISO `YYYY-MM-DD`).
    pub signup_date: NaiveDate,
    /// Globally unique MSISDN-style phone number.
    pub phone_number: String,
}
