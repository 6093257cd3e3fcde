//! `pointproc`: simulate point processes and evaluate their likelihood.
//!
//! This crate is the single entry point: it re-exports every `pp-*` crate
//! and adds the free-function call surface in [`api`].
//!
//! # Crate map
//!
//! | Crate          | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | `pp-core`      | `StreamRng`, realizations, regions, `ExpDecay`, `Sampler`, `PpError` |
//! | `pp-temporal`  | `HomogeneousPoisson`, `VariablePoisson`, `HawkesExp`, mark generators |
//! | `pp-spatial`   | `SpatialPoisson`, `VariableSpatialPoisson`                    |
//! | `pp-inference` | `HawkesLikelihood`, Poisson likelihoods, kernel estimators   |
//! | `pp-batch`     | `BatchRunner`, `Batch`                                       |
//!
//! # Quick start
//!
//! ```rust,ignore
//! use pointproc::prelude::*;
//!
//! let mut rng = StreamRng::new(42);
//! let events = pointproc::hawkes_exp(90.0, 1.2, 1.0, ConstantMark(0.7), &mut rng)?;
//! let ll = pointproc::hawkes_likelihood(&events, 1.0, 0.7, 1.2, 90.0)?;
//! ```
//!
//! # Feature flags
//!
//! | Flag       | Effect                                               |
//! |------------|------------------------------------------------------|
//! | `parallel` | Batch repetitions run on Rayon                       |
//! | `serde`    | `Serialize`/`Deserialize` on all public data types   |

pub mod api;


pub use pp_batch;
pub use pp_core;
pub use pp_inference;
pub use pp_spatial;
pub use pp_temporal;
pub use rand_distr;

pub use api::{
    batch_hawkes_exp, hawkes_exp, hawkes_likelihood, poisson_process, spatial_poisson,
    spatial_variable_poisson, variable_poisson,
};

/// Everything needed for typical use.
pub mod prelude {
    pub use pp_batch::{Batch, BatchRunner};
    pub use pp_core::{
        BoundCheck, Disk, ErrorKind, HawkesEvent, HawkesRealization, Point, PpError, PpResult,
        Realization, Rectangle, Region, RunConfig, Sampler, SamplingLimits, SpatialRealization,
        StreamRng,
    };
    pub use pp_inference::{HawkesLikelihood, HawkesParams};
    pub use pp_spatial::{SpatialPoisson, VariableSpatialPoisson};
    pub use pp_temporal::{
        ConstantMark, HawkesExp, HomogeneousPoisson, MarkGenerator, MarkSequence, RandomMarks,
        VariablePoisson,
    };
}
