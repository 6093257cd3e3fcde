//! Homogeneous planar Poisson process.

use pp_core::{
    PpError, PpResult, Rectangle, Region, Sampler, SamplingLimits, SpatialRealization, StreamRng,
    require_finite_non_negative,
};

use crate::{candidate_count, uniform_point};

/// Constant-rate Poisson process on a bounded region.
///
/// The count in the region's bounding box is Poisson(λ · area); points are
/// then placed independently and uniformly.  A zero-area region always
/// yields the empty set.
#[derive(Clone, Debug, PartialEq)]
pub struct SpatialPoisson<R: Region = Rectangle> {
    rate:   f64,
    region: R,
    limits: SamplingLimits,
}

impl SpatialPoisson<Rectangle> {
    /// Process on the rectangle spanned by `close` and `far`.
    pub fn rectangle(rate: f64, close: [f64; 2], far: [f64; 2]) -> PpResult<Self> {
        Self::new(rate, Rectangle::new(close, far)?)
    }
}

impl<R: Region> SpatialPoisson<R> {
    /// Requires `rate >= 0`.
    pub fn new(rate: f64, region: R) -> PpResult<Self> {
        Ok(Self {
            rate: require_finite_non_negative("rate", rate)?,
            region,
            limits: SamplingLimits::default(),
        })
    }

    pub fn with_limits(mut self, limits: SamplingLimits) -> Self {
        self.limits = limits;
        self
    }

    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn region(&self) -> &R {
        &self.region
    }
}

impl<R: Region> Sampler for SpatialPoisson<R> {
    type Output = SpatialRealization;

    fn sample(&self, rng: &mut StreamRng) -> PpResult<SpatialRealization> {
        let bbox = self.region.bounding_box();
        let candidates = candidate_count(&bbox, self.rate, rng)? as usize;

        let mut points = Vec::new();
        for _ in 0..candidates {
            let p = uniform_point(&bbox, rng);
            if !self.region.contains(&p) {
                continue;
            }
            if self.limits.exceeded(points.len() + 1) {
                return Err(PpError::ResourceExceeded {
                    limit: self.limits.max_events.unwrap_or_default(),
                });
            }
            points.push(p);
        }

        log::debug!("spatial poisson: {} of {} candidates inside the region", points.len(), candidates);
        Ok(SpatialRealization::new(points))
    }
}
