use std::collections::BTreeMap;

use cosmwasm_schema::cw_serde;

use crate::{
  error::SimulationError,
  models::{ChoiceSet, SimulationConfig, Tally},
  odds::expected_counts,
};

/// Everything the CLI prints for one run.
#[cw_serde]
pub struct SimulationReport {
  pub config: SimulationConfig,
  pub choices: Vec<u16>,
  pub seed: Option<u32>,
  pub tally: Tally,
  pub expected: BTreeMap<u8, f64>,
}

impl SimulationReport {
  pub fn new(
    config: SimulationConfig,
    choices: &ChoiceSet,
    seed: Option<u32>,
    tally: Tally,
  ) -> Result<Self, SimulationError> {
    let expected = expected_counts(&config, tally.rounds())?;
    Ok(Self {
      config,
      choices: choices.to_vec(),
      seed,
      tally,
      expected,
    })
  }

  /// One line per reported bucket, highest match count first.
  pub fn lines(&self) -> Vec<String> {
    self
      .tally
      .match_counts()
      .iter()
      .rev()
      .map(|(n, count)| {
        let expected = self.expected.get(n).copied().unwrap_or_default();
        format!("{} correct: {} (expected {:.2})", n, count, expected)
      })
      .collect()
  }
}
