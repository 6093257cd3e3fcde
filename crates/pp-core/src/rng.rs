//! Deterministic, splittable random streams.
//!
//! # Determinism strategy
//!
//! A sampler never touches a global or thread-local generator.  It draws from
//! the `StreamRng` it is handed, so a fixed seed reproduces a realization bit
//! for bit.
//!
//! Batch repetitions get their own sub-stream seeded by:
//!
//!   seed = global_seed XOR (index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive indices uniformly across the seed space.  This
//! means:
//!
//! - Repetitions never share RNG state (no locking, no ordering dependency).
//! - Repetition `i` draws the same numbers whether the batch runs
//!   sequentially or on a thread pool.

use rand::distributions::Open01;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp1, Poisson};

use crate::{PpError, PpResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// A seeded stream of uniform, exponential and Poisson variates.
///
/// One instance belongs to exactly one sampling call at a time.  The type is
/// `Send` but not shared: parallel workers each take their own
/// sub-stream via [`StreamRng::substream`] or [`StreamRng::child`].
pub struct StreamRng(SmallRng);

impl StreamRng {
    /// Seed a new stream.  Every `u64` is a valid seed.
    pub fn new(seed: u64) -> Self {
        StreamRng(SmallRng::seed_from_u64(seed))
    }

    /// The `index`-th independent sub-stream of `global_seed`.
    pub fn substream(global_seed: u64, index: u64) -> Self {
        let seed = global_seed ^ index.wrapping_mul(MIXING_CONSTANT);
        StreamRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child stream from this one, advancing `self` by one draw.
    pub fn child(&mut self, offset: u64) -> StreamRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        StreamRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand_distr` distribution
    /// types (`rng.inner().sample(...)`).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Uniform variate on the open interval (0, 1).
    ///
    /// Never returns 0, so `ln(u)` is always finite.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.sample(Open01)
    }

    /// Uniform variate on `[lo, hi)`.  Requires `lo < hi`.
    #[inline]
    pub fn uniform_in(&mut self, lo: f64, hi: f64) -> f64 {
        self.0.gen_range(lo..hi)
    }

    /// `true` with probability `p`.
    ///
    /// Compares a fresh uniform draw against `p`, so `p >= 1` always succeeds
    /// and `p <= 0` never does.
    #[inline]
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.uniform() < p
    }

    /// Exponential variate with the given `rate` (mean `1 / rate`).
    pub fn exponential(&mut self, rate: f64) -> PpResult<f64> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(PpError::invalid("rate", rate, "exponential rate must be finite and > 0"));
        }
        let unit: f64 = Exp1.sample(&mut self.0);
        Ok(unit / rate)
    }

    /// Poisson-distributed count with the given `mean`.
    ///
    /// A zero mean yields zero without consuming any randomness.
    pub fn poisson(&mut self, mean: f64) -> PpResult<u64> {
        if !mean.is_finite() || mean < 0.0 {
            return Err(PpError::invalid("mean", mean, "Poisson mean must be finite and >= 0"));
        }
        if mean == 0.0 {
            return Ok(0);
        }
        let dist = Poisson::new(mean)
            .map_err(|_| PpError::invalid("mean", mean, "rejected by the Poisson sampler"))?;
        let count: f64 = dist.sample(&mut self.0);
        Ok(count as u64)
    }
}
