//! Random sources used by the network generator.
//!
//! Generation draws all of its randomness through [`RandomSource`], so tests
//! and callers can substitute a seeded or scripted source for the operating
//! system's entropy.

use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::speed::{SpeedClass, SpeedDistribution};

/// The random draws needed to generate a network.
///
/// Implemented for every [`rand::Rng`].
pub trait RandomSource {
    /// Returns a uniformly random index in `0..bound`.
    ///
    /// `bound` is never zero.
    fn index(&mut self, bound: usize) -> usize;

    /// Shuffles `items` into a uniformly random permutation.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Draws a speed class from `speeds`.
    fn speed(&mut self, speeds: &SpeedDistribution) -> SpeedClass;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }

    #[inline]
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }

    #[inline]
    fn speed(&mut self, speeds: &SpeedDistribution) -> SpeedClass {
        speeds.sample(self)
    }
}

/// A generator seeded from the operating system's entropy.
pub fn preseeded_rng() -> StdRng {
    StdRng::from_os_rng()
}

/// A reproducible generator seeded with `seed`.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
