//! `pp-core`: foundational types for the `pointproc` point-process engine.
//!
//! This crate is a dependency of every other `pp-*` crate.  It has no `pp-*`
//! dependencies and minimal external ones (`rand`, `rand_distr`, `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`rng`]       | `StreamRng`: seedable, splittable random stream             |
//! | [`event`]     | `Realization`, `HawkesEvent`, `HawkesRealization`, `SpatialRealization` |
//! | [`region`]    | `Point`, `Rectangle`, `Disk`, the `Region` trait            |
//! | [`decay`]     | `ExpDecay`: O(1) exponential-kernel intensity accumulator   |
//! | [`intensity`] | `BoundCheck`, checked evaluation of user intensity values   |
//! | [`config`]    | `SamplingLimits`, `RunConfig`                               |
//! | [`sampler`]   | The `Sampler` trait every process implements                |
//! | [`error`]     | `PpError`, `PpResult`, `ErrorKind`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod decay;
pub mod error;
pub mod event;
pub mod intensity;
pub mod region;
pub mod rng;
pub mod sampler;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{RunConfig, SamplingLimits};
pub use decay::ExpDecay;
pub use error::{ErrorKind, PpError, PpResult};
pub use event::{HawkesEvent, HawkesRealization, Realization, SpatialRealization};
pub use intensity::{BoundCheck, check_intensity, require_finite_non_negative, require_positive};
pub use region::{Disk, Point, Rectangle, Region};
pub use rng::StreamRng;
pub use sampler::Sampler;
