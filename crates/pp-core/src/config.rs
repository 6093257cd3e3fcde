//! Run configuration.
//!
//! Plain structs with `Default` impls; applications may build them in code
//! or (with the `serde` feature) deserialize them from a config file.

use crate::BoundCheck;

/// Per-realization safety limits applied by every sampler.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingLimits {
    /// Abort with `ResourceExceeded` once a realization would hold more than
    /// this many events.  `None` means unbounded (the horizon alone bounds
    /// the run, which is not enough for a supercritical Hawkes process).
    pub max_events: Option<usize>,

    /// Whether thinning samplers verify the majorizing bound.
    pub bound_check: BoundCheck,
}

impl SamplingLimits {
    /// Limits with an event cap and the default bound check.
    pub fn capped(max_events: usize) -> Self {
        Self { max_events: Some(max_events), ..Self::default() }
    }

    /// `true` if a realization holding `count` events is over the cap.
    #[inline]
    pub fn exceeded(&self, count: usize) -> bool {
        self.max_events.is_some_and(|cap| count > cap)
    }
}

/// Top-level configuration for batch runs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Master RNG seed.  The same seed always produces identical batches.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses the global pool.
    /// Ignored without the `parallel` feature of `pp-batch`.
    pub num_threads: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { seed: 42, num_threads: None }
    }
}

impl RunConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }
}
