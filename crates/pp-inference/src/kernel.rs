//! Fixed-bandwidth regression kernels `K_h(x, x') = D(|x - x'| / h)`.
//!
//! Weights need not be normalized: the Nadaraya–Watson smoother divides by
//! the total weight.

use pp_core::{PpResult, require_positive};

/// Weight given to a sample at `xi` when predicting at `x`.
pub trait RegKernel: Send + Sync {
    fn weight(&self, x: f64, xi: f64) -> f64;

    fn bandwidth(&self) -> f64;
}

// ── Gaussian ──────────────────────────────────────────────────────────────────

/// `exp(-(x - x')² / 2h²)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    bandwidth: f64,
}

impl GaussianKernel {
    pub fn new(bandwidth: f64) -> PpResult<Self> {
        Ok(Self { bandwidth: require_positive("bandwidth", bandwidth)? })
    }
}

impl RegKernel for GaussianKernel {
    #[inline]
    fn weight(&self, x: f64, xi: f64) -> f64 {
        let z = (x - xi) / self.bandwidth;
        (-0.5 * z * z).exp()
    }

    fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

// ── Uniform ───────────────────────────────────────────────────────────────────

/// Nearest-neighbour window: weight 1 when `|x - x'| < h`, else 0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UniformKernel {
    bandwidth: f64,
}

impl UniformKernel {
    pub fn new(bandwidth: f64) -> PpResult<Self> {
        Ok(Self { bandwidth: require_positive("bandwidth", bandwidth)? })
    }

    /// Length of `[a, b] ∩ (x - h, x + h)`.
    pub fn mass(&self, x: f64, a: f64, b: f64) -> f64 {
        let hi = b.min(x + self.bandwidth);
        let lo = a.max(x - self.bandwidth);
        (hi - lo).max(0.0)
    }
}

impl RegKernel for UniformKernel {
    #[inline]
    fn weight(&self, x: f64, xi: f64) -> f64 {
        if (x - xi).abs() < self.bandwidth { 1.0 } else { 0.0 }
    }

    fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

// ── Epanechnikov ──────────────────────────────────────────────────────────────

/// `¾ (1 - u²)` for `|u| <= 1`, `u = (x - x') / h`; zero outside.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EpanechnikovKernel {
    bandwidth: f64,
}

impl EpanechnikovKernel {
    pub fn new(bandwidth: f64) -> PpResult<Self> {
        Ok(Self { bandwidth: require_positive("bandwidth", bandwidth)? })
    }
}

impl RegKernel for EpanechnikovKernel {
    #[inline]
    fn weight(&self, x: f64, xi: f64) -> f64 {
        let u = (x - xi) / self.bandwidth;
        if u.abs() > 1.0 { 0.0 } else { 0.75 * (1.0 - u * u) }
    }

    fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}
