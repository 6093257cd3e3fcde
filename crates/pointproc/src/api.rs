//! Free-function call surface.
//!
//! Each function builds the matching sampler or evaluator, runs it once and
//! returns the result.  Callers that sample the same configuration many
//! times, or need [`SamplingLimits`](pp_core::SamplingLimits), should build
//! the sampler structs directly.

use pp_batch::{Batch, BatchRunner};
use pp_core::{
    HawkesRealization, Point, PpResult, Realization, RunConfig, Sampler, SpatialRealization,
    StreamRng,
};
use pp_inference::{HawkesLikelihood, HawkesParams};
use pp_spatial::{SpatialPoisson, VariableSpatialPoisson};
use pp_temporal::{HawkesExp, HomogeneousPoisson, MarkGenerator, VariablePoisson};

// ── Temporal ──────────────────────────────────────────────────────────────────

/// Homogeneous Poisson process of rate `rate` on `[0, horizon)`.
pub fn poisson_process(horizon: f64, rate: f64, rng: &mut StreamRng) -> PpResult<Realization> {
    HomogeneousPoisson::new(horizon, rate)?.sample(rng)
}

/// Inhomogeneous Poisson process by thinning, with `intensity <= max_rate`
/// checked at every candidate.
pub fn variable_poisson<F>(
    horizon:   f64,
    intensity: F,
    max_rate:  f64,
    rng:       &mut StreamRng,
) -> PpResult<Realization>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    VariablePoisson::new(horizon, intensity, max_rate)?.sample(rng)
}

/// Exponential-kernel Hawkes process whose jump sizes come from `marks`.
pub fn hawkes_exp<M: MarkGenerator>(
    horizon:  f64,
    decay:    f64,
    baseline: f64,
    marks:    M,
    rng:      &mut StreamRng,
) -> PpResult<HawkesRealization> {
    HawkesExp::new(horizon, decay, baseline, marks)?.sample(rng)
}

// ── Spatial ───────────────────────────────────────────────────────────────────

/// Homogeneous Poisson process on the rectangle spanned by `close`, `far`.
pub fn spatial_poisson(
    rate:  f64,
    close: [f64; 2],
    far:   [f64; 2],
    rng:   &mut StreamRng,
) -> PpResult<SpatialRealization> {
    SpatialPoisson::rectangle(rate, close, far)?.sample(rng)
}

/// Inhomogeneous planar Poisson process by thinning.
pub fn spatial_variable_poisson<F>(
    intensity: F,
    max_rate:  f64,
    close:     [f64; 2],
    far:       [f64; 2],
    rng:       &mut StreamRng,
) -> PpResult<SpatialRealization>
where
    F: Fn(Point) -> f64 + Send + Sync,
{
    VariableSpatialPoisson::rectangle(intensity, max_rate, close, far)?.sample(rng)
}

// ── Batch ─────────────────────────────────────────────────────────────────────

/// `count` independent constant-jump Hawkes realizations.
///
/// Repetition `i` draws from sub-stream `i` of `config.seed`.
pub fn batch_hawkes_exp(
    horizon:  f64,
    alpha:    f64,
    decay:    f64,
    baseline: f64,
    count:    usize,
    config:   RunConfig,
) -> PpResult<Batch<HawkesRealization>> {
    let process = HawkesExp::constant(horizon, alpha, decay, baseline)?;
    BatchRunner::new(config).run(&process, count)
}

// ── Likelihood ────────────────────────────────────────────────────────────────

/// Log-likelihood of `realization` observed on `[0, horizon)` under the
/// constant-jump model `(baseline, alpha, decay)`.
///
/// For repeated evaluation build a [`HawkesLikelihood`] once instead.
pub fn hawkes_likelihood(
    realization: &HawkesRealization,
    baseline:    f64,
    alpha:       f64,
    decay:       f64,
    horizon:     f64,
) -> PpResult<f64> {
    let params = HawkesParams::new(baseline, alpha, decay)?;
    HawkesLikelihood::with_horizon(realization, horizon)?.log_likelihood(params)
}
