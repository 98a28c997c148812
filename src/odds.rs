use std::collections::BTreeMap;

use crate::{error::SimulationError, models::SimulationConfig};

/// Number of ways to choose `k` items out of `n`.
pub fn binomial(
  n: u64,
  k: u64,
) -> u128 {
  if k > n {
    return 0;
  }
  let k = k.min(n - k);
  let mut result: u128 = 1;
  for i in 0..k {
    // exact at every step: result * (n - i) is divisible by (i + 1)
    result = result * (n - i) as u128 / (i + 1) as u128;
  }
  result
}

/// Hypergeometric probability that a draw of `picks_per_draw` numbers from
/// `universe_size` shares exactly `matches` numbers with `choice_count`
/// chosen ones.
pub fn match_probability(
  universe_size: u64,
  picks_per_draw: u64,
  choice_count: u64,
  matches: u64,
) -> f64 {
  let total = binomial(universe_size, picks_per_draw);
  if total == 0 || matches > picks_per_draw || choice_count > universe_size {
    return 0.0;
  }
  let hits = binomial(choice_count, matches);
  let misses = binomial(universe_size - choice_count, picks_per_draw - matches);
  (hits * misses) as f64 / total as f64
}

/// Expected number of rounds per reported bucket.
pub fn expected_counts(
  config: &SimulationConfig,
  rounds: u32,
) -> Result<BTreeMap<u8, f64>, SimulationError> {
  let universe = config.validate()?;
  let k = config.number_count as u64;
  Ok(
    config
      .reported_buckets
      .iter()
      .map(|bucket| {
        let p = match_probability(universe.len() as u64, k, k, *bucket as u64);
        (*bucket, p * rounds as f64)
      })
      .collect(),
  )
}
