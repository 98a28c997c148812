use rand::Rng;

use crate::{
  error::SimulationError,
  models::{require_valid_pick_count, Draw, Universe},
};

/// Draws `number_count` distinct numbers from `universe`, every subset
/// equally likely.
pub fn draw<R: Rng + ?Sized>(
  rng: &mut R,
  universe: &Universe,
  number_count: u8,
) -> Result<Draw, SimulationError> {
  require_valid_pick_count(universe, number_count)?;
  Ok(draw_unchecked(rng, universe, number_count))
}

/// [`draw`] without the pick-count check, for callers that validated it once
/// up front.
pub(crate) fn draw_unchecked<R: Rng + ?Sized>(
  rng: &mut R,
  universe: &Universe,
  number_count: u8,
) -> Draw {
  // Numbers still in the drum. Each pick removes one, so nothing is drawn
  // twice within the round.
  let mut remaining = universe.numbers();
  let mut winning_numbers: Vec<u16> = Vec::with_capacity(number_count as usize);

  while winning_numbers.len() < number_count as usize {
    let i = rng.random_range(0..remaining.len());
    winning_numbers.push(remaining.swap_remove(i));
  }

  Draw::new(winning_numbers)
}
