//! Deterministic simulation RNG.
//!
//! The simulation itself never draws random numbers: boarding order, drop-off
//! and route consumption are fully determined by the command sequence.  The
//! RNG only feeds the scenario generator, which must produce the same
//! commands for the same seed on every platform.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG for scenario generation.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, so independent
    /// generation passes (stops, taxis, passengers) don't shift each other's
    /// streams when one of them draws more numbers.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Choose an index in `0..len` different from `avoid`.
    ///
    /// Returns `None` when `len < 2`, where no such index exists.
    pub fn index_other_than(&mut self, len: usize, avoid: usize) -> Option<usize> {
        if len < 2 {
            return None;
        }
        // Draw from len-1 slots and skip over `avoid`.
        let i = self.0.gen_range(0..len - 1);
        Some(if i >= avoid { i + 1 } else { i })
    }
}
