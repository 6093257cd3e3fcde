//! Batch runner.

use pp_core::{PpResult, RunConfig, Sampler, StreamRng};

use crate::Batch;

/// Draws `count` independent realizations from a sampler.
///
/// ```rust,ignore
/// let runner = BatchRunner::new(RunConfig::with_seed(7));
/// let batch = runner.run(&HawkesExp::constant(100.0, 0.5, 1.0, 1.0)?, 1_000)?;
/// let mean = batch.successes().map(|(_, r)| r.len()).sum::<usize>() as f64 / batch.len() as f64;
/// ```
#[derive(Clone, Debug, Default)]
pub struct BatchRunner {
    config: RunConfig,
}

impl BatchRunner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run `count` repetitions of `sampler`.
    ///
    /// Per-repetition failures are kept in the returned [`Batch`].  The call
    /// itself fails only if a dedicated thread pool cannot be built.
    pub fn run<S: Sampler>(&self, sampler: &S, count: usize) -> PpResult<Batch<S::Output>> {
        let seed = self.config.seed;
        log::info!("batch: {count} repetitions, seed {seed}");

        let items = self.sample_all(sampler, count)?;
        let batch = Batch::from_items(items);

        for (i, err) in batch.failures() {
            log::warn!("batch: repetition {i} failed: {err}");
        }
        log::info!("batch: {} of {} repetitions succeeded", batch.success_count(), batch.len());
        Ok(batch)
    }

    #[cfg(not(feature = "parallel"))]
    fn sample_all<S: Sampler>(&self, sampler: &S, count: usize) -> PpResult<Vec<PpResult<S::Output>>> {
        let seed = self.config.seed;
        Ok((0..count).map(|i| sample_one(sampler, seed, i)).collect())
    }

    #[cfg(feature = "parallel")]
    fn sample_all<S: Sampler>(&self, sampler: &S, count: usize) -> PpResult<Vec<PpResult<S::Output>>> {
        use rayon::prelude::*;

        let seed = self.config.seed;
        let work = || {
            (0..count)
                .into_par_iter()
                .map(|i| sample_one(sampler, seed, i))
                .collect::<Vec<_>>()
        };

        match self.config.num_threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| pp_core::PpError::Config(format!("thread pool: {e}")))?;
                Ok(pool.install(work))
            }
            None => Ok(work()),
        }
    }
}

#[inline]
fn sample_one<S: Sampler>(sampler: &S, seed: u64, index: usize) -> PpResult<S::Output> {
    let mut rng = StreamRng::substream(seed, index as u64);
    sampler.sample(&mut rng)
}
