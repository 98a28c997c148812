use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
  #[error("{0}")]
  ParseInt(#[from] ParseIntError),

  #[error("InvalidParameters: {0}")]
  InvalidParameters(String),

  #[error("InvalidNumberCount")]
  InvalidNumberCount,

  #[error("DuplicateNumber")]
  DuplicateNumber,

  #[error("NumberOutOfBounds")]
  NumberOutOfBounds,

  #[error("InvalidRoundCount")]
  InvalidRoundCount,

  #[error("Cancelled after {completed_rounds} rounds")]
  Cancelled { completed_rounds: u32 },
}

impl SimulationError {
  pub fn invalid_parameters(reason: impl Into<String>) -> Self {
    Self::InvalidParameters(reason.into())
  }
}
