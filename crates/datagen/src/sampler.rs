//! Reusable sampling primitives.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use crate::{GenerateError, GenerateResult};

/// Discrete distribution over `(value, weight)` pairs.
///
/// Order status and payment status both draw from fixed weighted
/// categoricals; this wrapper keeps that logic in one place instead of
/// duplicating ad hoc range arithmetic per call site.
#[derive(Debug, Clone)]
pub struct Categorical<T: Copy> {
    values: Vec<T>,
    index: WeightedIndex<f64>,
}

impl<T: Copy> Categorical<T> {
    /// Builds a sampler from `(value, weight)` pairs. Weights must be
    /// non-negative and sum to something positive.
    pub fn new(pairs: &[(T, f64)]) -> GenerateResult<Self> {
        let values = pairs.iter().map(|(value, _)| *value).collect();
        let index = WeightedIndex::new(pairs.iter().map(|(_, weight)| *weight))?;
        Ok(Self { values, index })
    }

    /// Draws one value proportionally to its weight.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.values[self.index.sample(rng)]
    }
}

/// Draws a date uniformly from the inclusive range `[start, end]`.
///
/// When `end` precedes `start` the range collapses to `start`, so the
/// result never violates a `>= start` invariant.
pub fn date_between<R: Rng + ?Sized>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days();
    if span <= 0 {
        return start;
    }
    start + Duration::days(rng.random_range(0..=span))
}

/// Rejection-sampling pool that guarantees globally unique strings.
///
/// Mirrors the semantics of a faker `unique` proxy: a candidate that
/// collides with an earlier draw is retried, and a bounded number of
/// consecutive collisions is treated as pool exhaustion and surfaced as
/// a fatal error rather than looping forever.
#[derive(Debug, Default)]
pub struct UniquePool {
    seen: HashSet<String>,
}

impl UniquePool {
    /// Consecutive collisions tolerated before declaring exhaustion.
    const MAX_ATTEMPTS: usize = 64;

    pub fn new() -> Self {
        Self::default()
    }

    /// Draws a fresh value from `generate`, retrying on collision.
    pub fn draw<R, F>(
        &mut self,
        rng: &mut R,
        field: &'static str,
        mut generate: F,
    ) -> GenerateResult<String>
    where
        R: Rng + ?Sized,
        F: FnMut(&mut R) -> String,
    {
        for _ in 0..Self::MAX_ATTEMPTS {
            let candidate = generate(rng);
            if self.seen.insert(candidate.clone()) {
                return Ok(candidate);
            }
        }
        Err(GenerateError::UniquePoolExhausted {
            field,
            attempts: Self::MAX_ATTEMPTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_categorical_respects_zero_weight() {
        let mut rng = StdRng::seed_from_u64(7);
        let sampler = Categorical::new(&[("a", 0.0), ("b", 1.0)]).unwrap();
        for _ in 0..100 {
            assert_eq!(sampler.sample(&mut rng), "b");
        }
    }

    #[test]
    fn test_categorical_rejects_all_zero_weights() {
        assert!(Categorical::new(&[("a", 0.0), ("b", 0.0)]).is_err());
    }

    #[test]
    fn test_date_between_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        for _ in 0..500 {
            let date = date_between(&mut rng, start, end);
            assert!(date >= start && date <= end);
        }
    }

    #[test]
    fn test_date_between_collapsed_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(date_between(&mut rng, day, day), day);
    }

    #[test]
    fn test_unique_pool_exhaustion() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = UniquePool::new();
        assert!(pool.draw(&mut rng, "email", |_| "same".to_string()).is_ok());
        let err = pool.draw(&mut rng, "email", |_| "same".to_string());
        assert!(matches!(
            err,
            Err(GenerateError::UniquePoolExhausted { field: "email", .. })
        ));
    }
}
