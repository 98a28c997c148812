use std::collections::{BTreeMap, BTreeSet};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

use crate::{
  engine::{draw_unchecked, score, CancellationToken},
  error::SimulationError,
  models::{ChoiceSet, SimulationConfig, Tally, Universe},
  util::format_numbers,
};

/// Runs draw rounds against a fixed choice set and tallies the scores.
pub struct Simulator<R> {
  config: SimulationConfig,
  universe: Universe,
  rng: R,
}

impl Simulator<StdRng> {
  /// Simulator seeded from the operating system.
  pub fn from_os_rng(config: SimulationConfig) -> Result<Self, SimulationError> {
    Self::new(config, StdRng::from_os_rng())
  }
}

impl<R: Rng> Simulator<R> {
  pub fn new(
    config: SimulationConfig,
    rng: R,
  ) -> Result<Self, SimulationError> {
    let universe = config.validate()?;
    Ok(Self {
      config,
      universe,
      rng,
    })
  }

  pub fn config(&self) -> &SimulationConfig {
    &self.config
  }

  pub fn universe(&self) -> &Universe {
    &self.universe
  }

  /// Runs `rounds` rounds. Zero rounds yields an all-zero tally.
  pub fn run(
    &mut self,
    choices: &ChoiceSet,
    rounds: u32,
  ) -> Result<Tally, SimulationError> {
    self.run_rounds(choices, rounds, None)
  }

  /// Like [`Simulator::run`], but checks `token` before every round and
  /// returns [`SimulationError::Cancelled`] once it is set.
  pub fn run_cancellable(
    &mut self,
    choices: &ChoiceSet,
    rounds: u32,
    token: &CancellationToken,
  ) -> Result<Tally, SimulationError> {
    self.run_rounds(choices, rounds, Some(token))
  }

  fn run_rounds(
    &mut self,
    choices: &ChoiceSet,
    rounds: u32,
    token: Option<&CancellationToken>,
  ) -> Result<Tally, SimulationError> {
    self.require_valid_choices(choices)?;

    let number_count = self.config.number_count;
    let mut tally = Tally::new(&self.config.reported_buckets);

    debug!(
      rounds,
      number_count,
      low = self.universe.low(),
      high = self.universe.high(),
      choices = %format_numbers(&choices.to_vec()),
      "simulation started"
    );

    for round in 0..rounds {
      if token.is_some_and(|t| t.is_cancelled()) {
        debug!(completed_rounds = round, "simulation cancelled");
        return Err(SimulationError::Cancelled {
          completed_rounds: round,
        });
      }

      // Pick count was checked in `Simulator::new`. The draw is dropped at
      // the end of each iteration.
      let winning_numbers = draw_unchecked(&mut self.rng, &self.universe, number_count);
      let n_matching_numbers = score(&winning_numbers, choices);

      trace!(
        round,
        numbers = %format_numbers(winning_numbers.numbers()),
        n_matching_numbers,
        "round scored"
      );

      tally.record(n_matching_numbers);
    }

    debug!(match_counts = ?tally.match_counts(), "simulation finished");

    Ok(tally)
  }

  fn require_valid_choices(
    &self,
    choices: &ChoiceSet,
  ) -> Result<(), SimulationError> {
    if choices.len() != self.config.number_count as usize {
      return Err(SimulationError::invalid_parameters(format!(
        "{} choices for {} picks per draw",
        choices.len(),
        self.config.number_count
      )));
    }
    if let Some(n) = choices.iter().find(|n| !self.universe.contains(*n)) {
      return Err(SimulationError::invalid_parameters(format!(
        "choice {} outside {}..={}",
        n,
        self.universe.low(),
        self.universe.high()
      )));
    }
    Ok(())
  }
}

/// One-shot simulation with an OS-seeded random source. Returns one count per
/// reported bucket.
pub fn simulate(
  universe_low: u16,
  universe_high: u16,
  picks_per_draw: u8,
  choices: &BTreeSet<u16>,
  rounds: u32,
  reported_buckets: &BTreeSet<u8>,
) -> Result<BTreeMap<u8, u32>, SimulationError> {
  let config = SimulationConfig::default()
    .with_universe(universe_low, universe_high)
    .with_number_count(picks_per_draw)
    .with_reported_buckets(reported_buckets.iter().copied());
  let choices = ChoiceSet::from(choices.clone());
  let mut simulator = Simulator::from_os_rng(config)?;
  Ok(simulator.run(&choices, rounds)?.into_match_counts())
}
