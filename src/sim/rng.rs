//! Random number seam
//!
//! The simulation only ever asks for uniform integers in an inclusive range.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform integer source
pub trait RandomSource {
    /// Uniform integer in `[lo, hi]`, both ends inclusive
    fn random_int(&mut self, lo: i32, hi: i32) -> i32;
}

/// Seeded PCG generator for real play
#[derive(Debug, Clone)]
pub struct PcgRandom {
    seed: u64,
    rng: Pcg32,
}

impl PcgRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for PcgRandom {
    fn random_int(&mut self, lo: i32, hi: i32) -> i32 {
        if lo >= hi {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Each value is clamped into the requested range so one script can feed
/// draws with different bounds.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<i32>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    /// Number of draws served so far
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRandom {
    fn random_int(&mut self, lo: i32, hi: i32) -> i32 {
        if self.values.is_empty() {
            return lo;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(lo.min(hi), hi.max(lo))
    }
}
