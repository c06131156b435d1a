//! Money rounding shared by the generator and the loader.

/// Rounds a monetary amount to 2 decimal places.
///
/// All amounts in the dataset (prices, line totals, order totals,
/// payments) are stored rounded through this single rule so that
/// derived sums compare equal across the pipeline.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Tolerance for comparing two already-rounded amounts.
pub const MONEY_EPSILON: f64 = 1e-6;

/// Compares two rounded amounts for equality within [`MONEY_EPSILON`].
pub fn money_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < MONEY_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.005), 1.0); // 1.005 is stored as 1.00499..
        assert_eq!(round2(12.344999), 12.34);
        assert_eq!(round2(12.345001), 12.35);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_money_eq() {
        assert!(money_eq(10.0, 10.0 + 1e-9));
        assert!(!money_eq(10.0, 10.01));
    }
}
