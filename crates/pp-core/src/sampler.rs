//! The `Sampler` trait: the seam between processes and the batch runner.

use crate::{PpResult, StreamRng};

/// A configured point process that can draw realizations.
///
/// Implementors hold only immutable configuration (horizon, rates, intensity
/// closures, limits).  All per-draw state lives on the stack of
/// [`sample`](Self::sample), so one sampler can be shared by reference
/// across Rayon workers, each with its own [`StreamRng`].
///
/// # Example
///
/// ```rust,ignore
/// let process = HomogeneousPoisson::new(10.0, 2.0)?;
/// let mut rng = StreamRng::new(7);
/// let realization = process.sample(&mut rng)?;
/// ```
pub trait Sampler: Send + Sync {
    type Output: Send;

    /// Draw one realization from `rng`.
    fn sample(&self, rng: &mut StreamRng) -> PpResult<Self::Output>;
}

impl<S: Sampler + ?Sized> Sampler for &S {
    type Output = S::Output;

    fn sample(&self, rng: &mut StreamRng) -> PpResult<Self::Output> {
        (**self).sample(rng)
    }
}
