use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::prelude::*;

use crate::*;

/// Source of distinct linear cell indices used to place mines.
pub trait MineSampler {
    /// Returns `n` distinct integers in `[0, max)`.
    fn sample(&mut self, n: CellCount, max: CellCount) -> Result<BTreeSet<CellCount>>;
}

/// Uniform sampling without replacement, driven by a seeded RNG so a game can be replayed from its seed.
#[derive(Clone, Debug)]
pub struct RandomSampler {
    rng: SmallRng,
}

impl RandomSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Draw-and-retry into a set, fine while the set stays sparse.
    fn rejection(&mut self, n: CellCount, max: CellCount) -> BTreeSet<CellCount> {
        let mut picked = BTreeSet::new();
        while picked.len() < usize::from(n) {
            picked.insert(self.rng.random_range(0..max));
        }
        picked
    }

    /// Partial Fisher-Yates: only the first `n` slots get shuffled.
    fn partial_shuffle(&mut self, n: CellCount, max: CellCount) -> BTreeSet<CellCount> {
        let mut values: Vec<CellCount> = (0..max).collect();
        let len = values.len();
        for i in 0..usize::from(n) {
            let j = self.rng.random_range(i..len);
            values.swap(i, j);
        }
        values.truncate(usize::from(n));
        values.into_iter().collect()
    }
}

impl MineSampler for RandomSampler {
    fn sample(&mut self, n: CellCount, max: CellCount) -> Result<BTreeSet<CellCount>> {
        if n > max {
            return Err(GameError::SampleTooLarge {
                requested: n,
                available: max,
            });
        }

        if n == 0 {
            return Ok(BTreeSet::new());
        }

        // past half full, rejections start to dominate
        if u32::from(n) * 2 <= u32::from(max) {
            Ok(self.rejection(n, max))
        } else {
            Ok(self.partial_shuffle(n, max))
        }
    }
}
