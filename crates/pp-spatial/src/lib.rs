//! `pp-spatial`: Poisson processes in the plane.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`poisson`]  | `SpatialPoisson<R>`: constant rate over any [`Region`]           |
//! | [`thinning`] | `VariableSpatialPoisson<F, R>`: rate λ(x, y) by 2-D thinning     |
//!
//! # Sampling over a region
//!
//! Both samplers draw `N ~ Poisson(λ_max · |B|)` candidates uniformly in the
//! region's bounding box `B`, drop those outside the region, and (for the
//! variable sampler) keep each survivor with probability `λ(p) / λ_max`.
//! For a [`Rectangle`] the box is the region itself and nothing is dropped.
//!
//! [`Region`]: pp_core::Region
//! [`Rectangle`]: pp_core::Rectangle

pub mod poisson;
pub mod thinning;


pub use poisson::SpatialPoisson;
pub use thinning::VariableSpatialPoisson;

use pp_core::{Point, PpResult, Rectangle, Region, StreamRng};

/// Number of homogeneous candidates at `rate` in `bbox`.
///
/// Returns zero candidates for a zero-area box without drawing anything.
pub(crate) fn candidate_count(bbox: &Rectangle, rate: f64, rng: &mut StreamRng) -> PpResult<u64> {
    let area = bbox.area();
    if area == 0.0 || rate == 0.0 {
        return Ok(0);
    }
    rng.poisson(rate * area)
}

/// A point uniformly distributed in `bbox`.  Requires positive area.
#[inline]
pub(crate) fn uniform_point(bbox: &Rectangle, rng: &mut StreamRng) -> Point {
    let (close, far) = (bbox.close(), bbox.far());
    Point::new(rng.uniform_in(close.x, far.x), rng.uniform_in(close.y, far.y))
}
