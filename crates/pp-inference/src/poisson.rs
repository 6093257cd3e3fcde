//! Poisson-process log-likelihoods.

use pp_core::{BoundCheck, PpResult, Realization, check_intensity, require_finite_non_negative};

/// `n ln λ - λT` for a homogeneous process of rate `rate`.
///
/// A zero rate gives `0` for the empty sequence and `-∞` otherwise.
pub fn poisson_log_likelihood(realization: &Realization, rate: f64) -> PpResult<f64> {
    let rate = require_finite_non_negative("rate", rate)?;
    let n = realization.len() as f64;
    if rate == 0.0 {
        return Ok(if realization.is_empty() { 0.0 } else { f64::NEG_INFINITY });
    }
    Ok(n * rate.ln() - rate * realization.horizon())
}

/// Maximum-likelihood rate of a homogeneous process, `n / T`.
#[inline]
pub fn poisson_rate_mle(realization: &Realization) -> f64 {
    realization.empirical_rate()
}

/// `Σ ln λ(t_i) - Λ` for an inhomogeneous process.
///
/// `compensator` is `∫₀ᵀ λ`, supplied by the caller since only they know a
/// closed form.  Any `λ(t_i) = 0` makes the sequence impossible (`-∞`).
pub fn inhomogeneous_poisson_log_likelihood<F>(
    realization: &Realization,
    intensity:   F,
    compensator: f64,
) -> PpResult<f64>
where
    F: Fn(f64) -> f64,
{
    let compensator = require_finite_non_negative("compensator", compensator)?;
    let mut log_sum = 0.0;
    for &t in realization.times() {
        let lambda = check_intensity(intensity(t), f64::INFINITY, BoundCheck::Unchecked, format_args!("t = {t}"))?;
        log_sum += lambda.ln();
    }
    Ok(log_sum - compensator)
}
