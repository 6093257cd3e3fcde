//! Homogeneous Poisson process on `[0, horizon)`.

use pp_core::{
    PpError, PpResult, Realization, Sampler, SamplingLimits, StreamRng,
    require_finite_non_negative, require_positive,
};

/// Constant-rate Poisson process.
///
/// Events are built by accumulating exponential(λ) inter-arrival gaps until
/// the first arrival at or past the horizon, which is discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct HomogeneousPoisson {
    horizon: f64,
    rate:    f64,
    limits:  SamplingLimits,
}

impl HomogeneousPoisson {
    /// Requires `horizon > 0` and `rate >= 0`.
    pub fn new(horizon: f64, rate: f64) -> PpResult<Self> {
        Ok(Self {
            horizon: require_positive("horizon", horizon)?,
            rate:    require_finite_non_negative("rate", rate)?,
            limits:  SamplingLimits::default(),
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

    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Sampler for HomogeneousPoisson {
    type Output = Realization;

    fn sample(&self, rng: &mut StreamRng) -> PpResult<Realization> {
        if self.rate == 0.0 {
            return Ok(Realization::empty(self.horizon));
        }

        let mut times = Vec::new();
        let mut t = 0.0;
        loop {
            t += rng.exponential(self.rate)?;
            if t >= self.horizon {
                break;
            }
            if self.limits.exceeded(times.len() + 1) {
                return Err(PpError::ResourceExceeded {
                    limit: self.limits.max_events.unwrap_or_default(),
                });
            }
            times.push(t);
        }

        log::debug!("poisson: {} events on [0, {})", times.len(), self.horizon);
        Ok(Realization::new_unchecked(self.horizon, times))
    }
}
