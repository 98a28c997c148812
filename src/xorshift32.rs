use rand::{RngCore, SeedableRng};

/// Substituted for a zero seed, which xorshift can never leave.
const ZERO_SEED_REPLACEMENT: u32 = 0x9E37_79B9;

/// Small seedable generator used for reproducible simulation runs.
///
/// Plugged into the engine through `rand`'s traits, so index selection goes
/// through `rand`'s unbiased range sampling instead of `next_u32() % n`.
#[derive(Clone, Debug)]
pub struct Xorshift32 {
  state: u32,
}

impl Xorshift32 {
  pub fn new(seed: u32) -> Self {
    Self {
      state: if seed == 0 {
        ZERO_SEED_REPLACEMENT
      } else {
        seed
      },
    }
  }

  fn next(&mut self) -> u32 {
    let mut x = self.state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    self.state = x;
    x
  }
}

impl RngCore for Xorshift32 {
  fn next_u32(&mut self) -> u32 {
    self.next()
  }

  fn next_u64(&mut self) -> u64 {
    let hi = self.next() as u64;
    let lo = self.next() as u64;
    (hi << 32) | lo
  }

  fn fill_bytes(
    &mut self,
    dest: &mut [u8],
  ) {
    for chunk in dest.chunks_mut(4) {
      let bytes = self.next().to_le_bytes();
      chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
  }
}

impl SeedableRng for Xorshift32 {
  type Seed = [u8; 4];

  fn from_seed(seed: Self::Seed) -> Self {
    Self::new(u32::from_le_bytes(seed))
  }
}
