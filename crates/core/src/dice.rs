//! Seeded dice used by generation and combat effects.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::config::RollRange;

pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform draw from `min..=max`.
    pub fn roll(&mut self, min_value: i32, max_value: i32) -> i32 {
        debug_assert!(min_value <= max_value);
        let range_size = (i64::from(max_value) - i64::from(min_value) + 1) as u64;
        let offset = self.rng.next_u64() % range_size;
        (i64::from(min_value) + offset as i64) as i32
    }

    pub fn roll_range(&mut self, range: RollRange) -> u32 {
        debug_assert!(range.min <= range.max);
        let range_size = u64::from(range.max - range.min) + 1;
        range.min + (self.rng.next_u64() % range_size) as u32
    }

    /// Fair 0/1 draw; `true` is heads.
    pub fn coin(&mut self) -> bool {
        self.roll(0, 1) == 1
    }
}
