//! Product entity and category enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Electronics,
    Fashion,
    Home,
    Beauty,
    Books,
    Sports,
}

impl ProductCategory {
    /// Every category, in the order used for uniform sampling and the
    /// SQLite check constraint.
    pub const ALL: [Self; 6] = [
        Self::Electronics,
        Self::Fashion,
        Self::Home,
        Self::Beauty,
        Self::Books,
        Self::Sports,
    ];

    /// Returns the snake_case wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Fashion => "fashion",
            Self::Home => "home",
            Self::Beauty => "beauty",
            Self::Books => "books",
            Self::Sports => "sports",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Sequential identifier starting at 1.
    pub product_id: u32,
    /// Display name.
    pub product_name: String,
    /// Category.
    pub category: ProductCategory,
    /// Base price, rounded to 2 decimals. Always positive.
    pub price: f64,
    /// Units in stock. Never negative.
    pub stock_quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_matches_as_str() {
        for category in ProductCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
