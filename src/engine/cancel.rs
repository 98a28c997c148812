use std::sync::{
  atomic::{AtomicBool, Ordering},
  Arc,
};

/// Shared flag a caller can set to stop a run between rounds.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
  cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn cancel(&self) {
    self.cancelled.store(true, Ordering::Relaxed);
  }

  pub fn is_cancelled(&self) -> bool {
    self.cancelled.load(Ordering::Relaxed)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn clones_share_state() {
    let token = CancellationToken::new();
    let handle = token.clone();
    assert!(!token.is_cancelled());
    handle.cancel();
    assert!(token.is_cancelled());
  }
}
