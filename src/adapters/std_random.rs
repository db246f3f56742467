//! `StdRng`-backed random source.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::ports::RandomSource;

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Uniform random source over a standard RNG.
///
/// # Examples
///
/// ```
/// use oxo::{adapters::StdRandom, ports::RandomSource};
///
/// let mut a = StdRandom::with_seed(7);
/// let mut b = StdRandom::with_seed(7);
/// assert_eq!(a.choose_index(9), b.choose_index(9));
/// ```
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
    seed: Option<u64>,
}

impl StdRandom {
    /// Create a source from an optional seed; `None` draws one from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: build_rng(seed),
            seed,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Non-deterministic source
    pub fn from_entropy() -> Self {
        Self::new(None)
    }

    /// Seed this source was last built from, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandom {
    fn choose_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "choose_index called with no alternatives");
        self.rng.random_range(0..len)
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = Some(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_range() {
        let mut source = StdRandom::with_seed(1);
        for len in 1..=9 {
            for _ in 0..50 {
                assert!(source.choose_index(len) < len);
            }
        }
    }

    #[test]
    fn reseed_restarts_sequence() {
        let mut source = StdRandom::with_seed(3);
        let first: Vec<usize> = (0..10).map(|_| source.choose_index(9)).collect();
        source.reseed(3);
        let second: Vec<usize> = (0..10).map(|_| source.choose_index(9)).collect();
        assert_eq!(first, second);
        assert_eq!(source.seed(), Some(3));
    }
}
