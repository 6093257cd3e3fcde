//! Inhomogeneous Poisson process by Lewis–Shedler thinning.
//!
//! # Algorithm
//!
//! ```text
//! t ← 0
//! loop:
//!   t ← t + Exp(λ_max)            candidate from the homogeneous majorant
//!   if t ≥ T: stop
//!   accept t with probability λ(t) / λ_max
//! ```
//!
//! Candidates arrive at rate `λ_max` whether or not the previous one was
//! accepted; the acceptance ratio is always evaluated at the current
//! candidate time.

use pp_core::{
    PpError, PpResult, Realization, Sampler, SamplingLimits, StreamRng, check_intensity,
    require_finite_non_negative, require_positive,
};

/// Poisson process with a deterministic, time-varying rate λ(t).
///
/// `max_rate` must majorize `intensity` on `[0, horizon)`.  Under the default
/// [`BoundCheck::Checked`](pp_core::BoundCheck) a candidate where
/// `λ(t) > max_rate` fails the call instead of silently biasing the
/// acceptance rate.
pub struct VariablePoisson<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    horizon:   f64,
    intensity: F,
    max_rate:  f64,
    limits:    SamplingLimits,
}

impl<F> VariablePoisson<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    /// Requires `horizon > 0` and `max_rate >= 0`.
    pub fn new(horizon: f64, intensity: F, max_rate: f64) -> PpResult<Self> {
        Ok(Self {
            horizon:  require_positive("horizon", horizon)?,
            intensity,
            max_rate: require_finite_non_negative("max_rate", max_rate)?,
            limits:   SamplingLimits::default(),
        })
    }

    pub fn with_limits(mut self, limits: SamplingLimits) -> Self {
        self.limits = limits;
        self
    }

    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// The majorizing constant.
    #[inline]
    pub fn max_rate(&self) -> f64 {
        self.max_rate
    }

    /// Evaluate the caller's rate at `t`.
    #[inline]
    pub fn intensity(&self, t: f64) -> f64 {
        (self.intensity)(t)
    }
}

impl<F> Sampler for VariablePoisson<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    type Output = Realization;

    fn sample(&self, rng: &mut StreamRng) -> PpResult<Realization> {
        if self.max_rate == 0.0 {
            return Ok(Realization::empty(self.horizon));
        }

        let mut times = Vec::new();
        let mut candidates = 0usize;
        let mut t = 0.0;
        loop {
            t += rng.exponential(self.max_rate)?;
            if t >= self.horizon {
                break;
            }
            candidates += 1;

            let lambda = check_intensity(
                (self.intensity)(t),
                self.max_rate,
                self.limits.bound_check,
                format_args!("t = {t}"),
            )?;
            if !rng.bernoulli(lambda / self.max_rate) {
                continue;
            }

            if self.limits.exceeded(times.len() + 1) {
                return Err(PpError::ResourceExceeded {
                    limit: self.limits.max_events.unwrap_or_default(),
                });
            }
            times.push(t);
        }

        log::debug!(
            "thinning: kept {} of {} candidates on [0, {})",
            times.len(),
            candidates,
            self.horizon,
        );
        Ok(Realization::new_unchecked(self.horizon, times))
    }
}
