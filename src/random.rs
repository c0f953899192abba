//! Random sources for flourishes and probabilistic grammar transforms
//!
//! Every random decision in the pipeline goes through the [`RandomSource`]
//! trait, so callers decide where randomness comes from: the thread-local
//! generator, a seeded generator for reproducible runs, or a
//! [`MockRandom`](crate::mock::MockRandom) in tests.
//!
//! # Example
//!
//! ```ignore
//! use oath_dialects::random::{RandomSource, RngSource};
//!
//! let mut rng = RngSource::seeded(42);
//! if rng.chance(0.25) {
//!     let index = rng.pick(5);
//!     println!("picked {}", index);
//! }
//! ```

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, RngCore, SeedableRng};

/// A source of random draws
pub trait RandomSource {
    /// Draw a value in `[0.0, 1.0)`
    fn next_f64(&mut self) -> f64;

    /// Pick an index in `0..len`
    ///
    /// Returns 0 when `len` is 0 so callers can index a non-empty pool
    /// without special-casing.
    fn pick(&mut self, len: usize) -> usize;

    /// Returns true with the given probability
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

/// Adapter that turns any `rand` generator into a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Source backed by the thread-local generator
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Source backed by a seeded generator; equal seeds give equal draws
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Source whose draws never fire a probability; pools pick their first entry
///
/// Used for deterministic runs where every random flourish and probabilistic
/// transform must be skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl RandomSource for Silent {
    fn next_f64(&mut self) -> f64 {
        1.0
    }

    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}
