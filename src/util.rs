use crate::error::SimulationError;

/// Renders numbers in ascending order joined by `:`, e.g. `3:7:12`.
pub fn format_numbers(numbers: &[u16]) -> String {
  let mut sorted = numbers.to_vec();
  sorted.sort_unstable();
  let parts: Vec<String> = sorted.iter().map(|n| n.to_string()).collect();
  parts.join(":")
}

/// Parses a list of numbers separated by commas, colons or whitespace.
pub fn parse_numbers(text: &str) -> Result<Vec<u16>, SimulationError> {
  text
    .split(|c: char| c == ',' || c == ':' || c.is_whitespace())
    .filter(|s| !s.is_empty())
    .map(|s| s.parse::<u16>().map_err(SimulationError::from))
    .collect()
}

/// Like [`parse_numbers`] for match-count buckets.
pub fn parse_buckets(text: &str) -> Result<Vec<u8>, SimulationError> {
  text
    .split(|c: char| c == ',' || c == ':' || c.is_whitespace())
    .filter(|s| !s.is_empty())
    .map(|s| s.parse::<u8>().map_err(SimulationError::from))
    .collect()
}
