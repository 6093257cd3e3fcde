//! Inhomogeneous planar Poisson process by thinning.

use pp_core::{
    Point, PpError, PpResult, Rectangle, Region, Sampler, SamplingLimits, SpatialRealization,
    StreamRng, check_intensity, require_finite_non_negative,
};

use crate::{candidate_count, uniform_point};

/// Poisson process on a region with rate λ(p) majorized by `max_rate`.
///
/// Homogeneous candidates at `max_rate` are accepted independently with
/// probability `λ(p) / max_rate`.  As in the temporal case, the bound is
/// verified at every candidate unless the limits say
/// [`BoundCheck::Unchecked`](pp_core::BoundCheck).
pub struct VariableSpatialPoisson<F, R = Rectangle>
where
    F: Fn(Point) -> f64 + Send + Sync,
    R: Region,
{
    intensity: F,
    max_rate:  f64,
    region:    R,
    limits:    SamplingLimits,
}

impl<F> VariableSpatialPoisson<F, Rectangle>
where
    F: Fn(Point) -> f64 + Send + Sync,
{
    /// Process on the rectangle spanned by `close` and `far`.
    pub fn rectangle(intensity: F, max_rate: f64, close: [f64; 2], far: [f64; 2]) -> PpResult<Self> {
        Self::new(intensity, max_rate, Rectangle::new(close, far)?)
    }
}

impl<F, R> VariableSpatialPoisson<F, R>
where
    F: Fn(Point) -> f64 + Send + Sync,
    R: Region,
{
    /// Requires `max_rate >= 0`.
    pub fn new(intensity: F, max_rate: f64, region: R) -> PpResult<Self> {
        Ok(Self {
            intensity,
            max_rate: require_finite_non_negative("max_rate", max_rate)?,
            region,
            limits: SamplingLimits::default(),
        })
    }

    pub fn with_limits(mut self, limits: SamplingLimits) -> Self {
        self.limits = limits;
        self
    }

    #[inline]
    pub fn max_rate(&self) -> f64 {
        self.max_rate
    }

    pub fn region(&self) -> &R {
        &self.region
    }
}

impl<F, R> Sampler for VariableSpatialPoisson<F, R>
where
    F: Fn(Point) -> f64 + Send + Sync,
    R: Region,
{
    type Output = SpatialRealization;

    fn sample(&self, rng: &mut StreamRng) -> PpResult<SpatialRealization> {
        let bbox = self.region.bounding_box();
        let candidates = candidate_count(&bbox, self.max_rate, rng)? as usize;

        let mut points = Vec::new();
        for _ in 0..candidates {
            let p = uniform_point(&bbox, rng);
            if !self.region.contains(&p) {
                continue;
            }
            let lambda = check_intensity(
                (self.intensity)(p),
                self.max_rate,
                self.limits.bound_check,
                p,
            )?;
            if !rng.bernoulli(lambda / self.max_rate) {
                continue;
            }
            if self.limits.exceeded(points.len() + 1) {
                return Err(PpError::ResourceExceeded {
                    limit: self.limits.max_events.unwrap_or_default(),
                });
            }
            points.push(p);
        }

        log::debug!("spatial thinning: kept {} of {} candidates", points.len(), candidates);
        Ok(SpatialRealization::new(points))
    }
}
