use crate::models::{ChoiceSet, Draw};

/// Number of drawn numbers the player picked.
pub fn score(
  draw: &Draw,
  choices: &ChoiceSet,
) -> u8 {
  let mut n_matching_numbers: u8 = 0;
  for x in draw.numbers() {
    if choices.contains(*x) {
      n_matching_numbers += 1;
    }
  }
  n_matching_numbers
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use proptest::prelude::*;

  use super::*;
  use crate::{engine::draw, models::Universe, xorshift32::Xorshift32};

  fn choices(numbers: &[u16]) -> ChoiceSet {
    let universe = Universe::new(1, 35).unwrap();
    ChoiceSet::new(numbers, &universe, numbers.len() as u8).unwrap()
  }

  #[test]
  fn counts_shared_numbers() {
    let d = Draw::new(vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(score(&d, &choices(&[1, 2, 3, 8, 9, 10, 11])), 3);
  }

  #[test]
  fn disjoint_scores_zero() {
    let d = Draw::new(vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(score(&d, &choices(&[8, 9, 10, 11, 12, 13, 14])), 0);
  }

  #[test]
  fn full_match_scores_pick_count() {
    let d = Draw::new(vec![35, 3, 21, 9, 14, 27, 1]);
    assert_eq!(score(&d, &choices(&[1, 3, 9, 14, 21, 27, 35])), 7);
  }

  #[test]
  fn smaller_choice_set_caps_score() {
    let d = Draw::new(vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(score(&d, &choices(&[2, 4])), 2);
  }

  proptest! {
    #[test]
    fn score_never_exceeds_pick_count(seed in any::<u32>()) {
      let universe = Universe::new(1, 35).unwrap();
      let mut rng = Xorshift32::new(seed);
      let picked = choices(draw(&mut rng, &universe, 7).unwrap().numbers());
      let d = draw(&mut rng, &universe, 7).unwrap();
      let s = score(&d, &picked);
      let drawn: HashSet<u16> = d.numbers().iter().copied().collect();
      let mine: HashSet<u16> = picked.iter().collect();
      let expected = drawn.intersection(&mine).count();
      prop_assert!(s <= 7);
      prop_assert_eq!(s as usize, expected);
    }
  }
}
