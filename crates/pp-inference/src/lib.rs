//! `pp-inference`: evaluating and estimating point-process models.
//!
//! This crate depends only on the data model in `pp-core`; it never samples.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                           |
//! |---------------|--------------------------------------------------------------------|
//! | [`hawkes`]    | `HawkesLikelihood`: O(n) log-likelihood and gradient, `HawkesParams`  |
//! | [`poisson`]   | Homogeneous / inhomogeneous Poisson log-likelihoods                |
//! | [`kernel`]    | `RegKernel` trait and Gaussian, uniform, Epanechnikov kernels      |
//! | [`estimator`] | Binned intensity estimate and the Nadaraya–Watson smoother         |
//!
//! # Grid search
//!
//! ```rust,ignore
//! let lik = HawkesLikelihood::new(&realization)?;
//! let best = alphas.iter()
//!     .flat_map(|&a| betas.iter().map(move |&b| (a, b)))
//!     .max_by(|x, y| {
//!         let lx = lik.log_likelihood(HawkesParams::new(1.0, x.0, x.1).unwrap()).unwrap();
//!         let ly = lik.log_likelihood(HawkesParams::new(1.0, y.0, y.1).unwrap()).unwrap();
//!         lx.total_cmp(&ly)
//!     });
//! ```

pub mod estimator;
pub mod hawkes;
pub mod kernel;
pub mod poisson;

#[cfg(test)]
mod tests;

pub use estimator::{NadarayaWatson, binned_intensity};
pub use hawkes::{HawkesLikelihood, HawkesParams, LikelihoodEval};
pub use kernel::{EpanechnikovKernel, GaussianKernel, RegKernel, UniformKernel};
pub use poisson::{inhomogeneous_poisson_log_likelihood, poisson_log_likelihood, poisson_rate_mle};
