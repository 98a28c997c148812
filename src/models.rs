use std::collections::{BTreeMap, BTreeSet, HashSet};

use cosmwasm_schema::cw_serde;

use crate::error::SimulationError;

pub const DEFAULT_MIN_NUMBER: u16 = 1;
pub const DEFAULT_MAX_NUMBER: u16 = 35;
pub const DEFAULT_NUMBER_COUNT: u8 = 7;
pub const DEFAULT_MIN_ROUNDS: u32 = 1;
pub const DEFAULT_MAX_ROUNDS: u32 = 999_999;

/// Settings for a simulation run. Every field falls back to its default when
/// missing from a JSON config file.
#[cw_serde]
#[serde(default)]
pub struct SimulationConfig {
  pub min_number: u16,
  pub max_number: u16,
  pub number_count: u8,
  pub min_rounds: u32,
  pub max_rounds: u32,
  pub reported_buckets: BTreeSet<u8>,
}

impl Default for SimulationConfig {
  fn default() -> Self {
    Self {
      min_number: DEFAULT_MIN_NUMBER,
      max_number: DEFAULT_MAX_NUMBER,
      number_count: DEFAULT_NUMBER_COUNT,
      min_rounds: DEFAULT_MIN_ROUNDS,
      max_rounds: DEFAULT_MAX_ROUNDS,
      reported_buckets: (2..=DEFAULT_NUMBER_COUNT).collect(),
    }
  }
}

impl SimulationConfig {
  /// Only tracks the top three match counts (5, 6 and 7 of 7).
  pub fn jackpot_only() -> Self {
    Self::default().with_reported_buckets(5..=7)
  }

  pub fn with_universe(
    mut self,
    min_number: u16,
    max_number: u16,
  ) -> Self {
    self.min_number = min_number;
    self.max_number = max_number;
    self
  }

  pub fn with_number_count(
    mut self,
    number_count: u8,
  ) -> Self {
    self.number_count = number_count;
    self
  }

  pub fn with_reported_buckets(
    mut self,
    buckets: impl IntoIterator<Item = u8>,
  ) -> Self {
    self.reported_buckets = buckets.into_iter().collect();
    self
  }

  pub fn with_round_limits(
    mut self,
    min_rounds: u32,
    max_rounds: u32,
  ) -> Self {
    self.min_rounds = min_rounds;
    self.max_rounds = max_rounds;
    self
  }

  pub fn universe(&self) -> Result<Universe, SimulationError> {
    Universe::new(self.min_number, self.max_number)
  }

  /// Checks the draw parameters and returns the universe they describe.
  pub fn validate(&self) -> Result<Universe, SimulationError> {
    let universe = self.universe()?;
    require_valid_pick_count(&universe, self.number_count)?;
    if self.min_rounds > self.max_rounds {
      return Err(SimulationError::invalid_parameters(format!(
        "min rounds {} exceeds max rounds {}",
        self.min_rounds, self.max_rounds
      )));
    }
    Ok(universe)
  }

  pub fn validate_rounds(
    &self,
    rounds: u32,
  ) -> Result<(), SimulationError> {
    if rounds < self.min_rounds || rounds > self.max_rounds {
      return Err(SimulationError::InvalidRoundCount);
    }
    Ok(())
  }
}

pub(crate) fn require_valid_pick_count(
  universe: &Universe,
  number_count: u8,
) -> Result<(), SimulationError> {
  if number_count == 0 {
    return Err(SimulationError::invalid_parameters(
      "picks per draw must be positive",
    ));
  }
  if number_count as usize > universe.len() {
    return Err(SimulationError::invalid_parameters(format!(
      "{} picks per draw exceeds universe of {} numbers",
      number_count,
      universe.len()
    )));
  }
  Ok(())
}

/// Inclusive range of drawable numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Universe {
  low: u16,
  high: u16,
}

impl Universe {
  pub fn new(
    low: u16,
    high: u16,
  ) -> Result<Self, SimulationError> {
    if low > high {
      return Err(SimulationError::invalid_parameters(format!(
        "lower bound {} exceeds upper bound {}",
        low, high
      )));
    }
    Ok(Self { low, high })
  }

  pub fn low(&self) -> u16 {
    self.low
  }

  pub fn high(&self) -> u16 {
    self.high
  }

  pub fn len(&self) -> usize {
    (self.high - self.low) as usize + 1
  }

  pub fn contains(
    &self,
    n: u16,
  ) -> bool {
    self.low <= n && n <= self.high
  }

  pub fn numbers(&self) -> Vec<u16> {
    (self.low..=self.high).collect()
  }
}

/// The player's picks.
#[cw_serde]
pub struct ChoiceSet {
  numbers: BTreeSet<u16>,
}

impl ChoiceSet {
  /// Builds a choice set from raw picks, rejecting the wrong number of picks,
  /// repeated picks and picks outside the universe.
  pub fn new(
    numbers: &[u16],
    universe: &Universe,
    number_count: u8,
  ) -> Result<Self, SimulationError> {
    if numbers.len() != number_count as usize {
      return Err(SimulationError::InvalidNumberCount);
    }

    let mut visited: HashSet<u16> = HashSet::with_capacity(numbers.len());
    for n in numbers.iter() {
      if visited.contains(n) {
        return Err(SimulationError::DuplicateNumber);
      }
      if !universe.contains(*n) {
        return Err(SimulationError::NumberOutOfBounds);
      }
      visited.insert(*n);
    }

    Ok(Self {
      numbers: numbers.iter().copied().collect(),
    })
  }

  pub fn len(&self) -> usize {
    self.numbers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.numbers.is_empty()
  }

  pub fn contains(
    &self,
    n: u16,
  ) -> bool {
    self.numbers.contains(&n)
  }

  pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
    self.numbers.iter().copied()
  }

  pub fn to_vec(&self) -> Vec<u16> {
    self.iter().collect()
  }
}

/// Wraps an already-validated set. The simulator still checks its size and
/// bounds before running.
impl From<BTreeSet<u16>> for ChoiceSet {
  fn from(numbers: BTreeSet<u16>) -> Self {
    Self { numbers }
  }
}

/// Numbers drawn in a single round, sorted ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draw {
  numbers: Vec<u16>,
}

impl Draw {
  pub(crate) fn new(mut numbers: Vec<u16>) -> Self {
    numbers.sort_unstable();
    Self { numbers }
  }

  pub fn numbers(&self) -> &[u16] {
    &self.numbers
  }

  pub fn len(&self) -> usize {
    self.numbers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.numbers.is_empty()
  }

  pub fn contains(
    &self,
    n: u16,
  ) -> bool {
    self.numbers.binary_search(&n).is_ok()
  }
}

/// Number of rounds per reported match count.
#[cw_serde]
pub struct Tally {
  rounds: u32,
  match_counts: BTreeMap<u8, u32>,
}

impl Tally {
  pub fn new(buckets: &BTreeSet<u8>) -> Self {
    Self {
      rounds: 0,
      match_counts: buckets.iter().map(|b| (*b, 0)).collect(),
    }
  }

  /// Counts one round. Scores outside the reported buckets only bump the
  /// round counter.
  pub(crate) fn record(
    &mut self,
    score: u8,
  ) {
    self.rounds += 1;
    if let Some(n) = self.match_counts.get_mut(&score) {
      *n += 1;
    }
  }

  pub fn rounds(&self) -> u32 {
    self.rounds
  }

  pub fn get(
    &self,
    bucket: u8,
  ) -> Option<u32> {
    self.match_counts.get(&bucket).copied()
  }

  pub fn match_counts(&self) -> &BTreeMap<u8, u32> {
    &self.match_counts
  }

  pub fn into_match_counts(self) -> BTreeMap<u8, u32> {
    self.match_counts
  }

  /// Sum over all buckets; never more than `rounds`.
  pub fn total(&self) -> u64 {
    self.match_counts.values().map(|n| *n as u64).sum()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn universe() -> Universe {
    Universe::new(1, 35).unwrap()
  }

  #[test]
  fn default_config_matches_classic_game() {
    let config = SimulationConfig::default();
    assert_eq!(config.min_number, 1);
    assert_eq!(config.max_number, 35);
    assert_eq!(config.number_count, 7);
    assert_eq!(config.max_rounds, 999_999);
    assert_eq!(
      config.reported_buckets,
      BTreeSet::from([2, 3, 4, 5, 6, 7])
    );
    assert_eq!(config.validate().unwrap().len(), 35);
  }

  #[test]
  fn jackpot_only_reports_top_buckets() {
    let config = SimulationConfig::jackpot_only();
    assert_eq!(config.reported_buckets, BTreeSet::from([5, 6, 7]));
  }

  #[test]
  fn config_accepts_bucket_above_pick_count() {
    let config = SimulationConfig::default().with_reported_buckets([3, 8]);
    assert!(config.validate().is_ok());

    let mut tally = Tally::new(&config.reported_buckets);
    tally.record(7);
    assert_eq!(tally.get(8), Some(0));
  }

  #[test]
  fn config_rejects_too_many_picks() {
    let config = SimulationConfig::default()
      .with_universe(1, 7)
      .with_number_count(8);
    assert!(matches!(
      config.validate(),
      Err(SimulationError::InvalidParameters(_))
    ));
  }

  #[test]
  fn config_rejects_inverted_round_limits() {
    let config = SimulationConfig::default().with_round_limits(10, 5);
    assert!(matches!(
      config.validate(),
      Err(SimulationError::InvalidParameters(_))
    ));
  }

  #[test]
  fn round_limits_are_inclusive() {
    let config = SimulationConfig::default();
    assert!(config.validate_rounds(1).is_ok());
    assert!(config.validate_rounds(999_999).is_ok());
    assert_eq!(
      config.validate_rounds(0),
      Err(SimulationError::InvalidRoundCount)
    );
    assert_eq!(
      config.validate_rounds(1_000_000),
      Err(SimulationError::InvalidRoundCount)
    );
  }

  #[test]
  fn config_json_fills_missing_fields() {
    let config: SimulationConfig =
      serde_json::from_str(r#"{"max_number": 40, "reported_buckets": [6, 7]}"#).unwrap();
    assert_eq!(config.min_number, 1);
    assert_eq!(config.max_number, 40);
    assert_eq!(config.number_count, 7);
    assert_eq!(config.reported_buckets, BTreeSet::from([6, 7]));
  }

  #[test]
  fn config_json_rejects_unknown_fields() {
    let result = serde_json::from_str::<SimulationConfig>(r#"{"max_numbr": 40}"#);
    assert!(result.is_err());
  }

  #[test]
  fn universe_bounds() {
    let u = Universe::new(5, 5).unwrap();
    assert_eq!(u.len(), 1);
    assert_eq!(u.numbers(), vec![5]);
    assert!(Universe::new(6, 5).is_err());
    assert!(universe().contains(1));
    assert!(universe().contains(35));
    assert!(!universe().contains(0));
    assert!(!universe().contains(36));
  }

  #[test]
  fn choice_set_accepts_valid_picks() {
    let choices = ChoiceSet::new(&[35, 1, 7, 12, 19, 24, 30], &universe(), 7).unwrap();
    assert_eq!(choices.len(), 7);
    assert_eq!(choices.to_vec(), vec![1, 7, 12, 19, 24, 30, 35]);
  }

  #[test]
  fn choice_set_rejects_wrong_count() {
    assert_eq!(
      ChoiceSet::new(&[1, 2, 3], &universe(), 7),
      Err(SimulationError::InvalidNumberCount)
    );
  }

  #[test]
  fn choice_set_rejects_duplicates() {
    assert_eq!(
      ChoiceSet::new(&[1, 2, 3, 4, 5, 6, 6], &universe(), 7),
      Err(SimulationError::DuplicateNumber)
    );
  }

  #[test]
  fn choice_set_rejects_out_of_bounds() {
    assert_eq!(
      ChoiceSet::new(&[0, 2, 3, 4, 5, 6, 7], &universe(), 7),
      Err(SimulationError::NumberOutOfBounds)
    );
    assert_eq!(
      ChoiceSet::new(&[1, 2, 3, 4, 5, 6, 36], &universe(), 7),
      Err(SimulationError::NumberOutOfBounds)
    );
  }

  #[test]
  fn tally_ignores_unreported_scores() {
    let mut tally = Tally::new(&BTreeSet::from([5, 6, 7]));
    tally.record(0);
    tally.record(5);
    tally.record(7);
    tally.record(7);
    assert_eq!(tally.rounds(), 4);
    assert_eq!(tally.get(5), Some(1));
    assert_eq!(tally.get(6), Some(0));
    assert_eq!(tally.get(7), Some(2));
    assert_eq!(tally.get(0), None);
    assert_eq!(tally.total(), 3);
  }

  #[test]
  fn draw_is_sorted() {
    let draw = Draw::new(vec![9, 3, 27]);
    assert_eq!(draw.numbers(), &[3, 9, 27]);
    assert!(draw.contains(27));
    assert!(!draw.contains(4));
  }
}
