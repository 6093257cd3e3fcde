//! `pp-temporal`: samplers for point processes on the half-line.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`poisson`]   | `HomogeneousPoisson`: constant rate, exponential gaps         |
//! | [`thinning`]  | `VariablePoisson<F>`: Lewis–Shedler thinning of a rate λ(t)   |
//! | [`hawkes`]    | `HawkesExp<M>`: Ogata thinning with O(1) intensity updates    |
//! | [`marks`]     | `MarkGenerator` trait and the built-in jump-size generators   |
//!
//! Every sampler implements [`pp_core::Sampler`], validates its parameters at
//! construction, and honours [`pp_core::SamplingLimits`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pp_core::{Sampler, StreamRng};
//! use pp_temporal::{ConstantMark, HawkesExp};
//!
//! let hawkes = HawkesExp::new(90.0, 1.2, 1.0, ConstantMark(0.7))?;
//! let events = hawkes.sample(&mut StreamRng::new(42))?;
//! ```

pub mod hawkes;
pub mod marks;
pub mod poisson;
pub mod thinning;


pub use hawkes::HawkesExp;
pub use marks::{ConstantMark, MarkGenerator, MarkSequence, RandomMarks};
pub use poisson::HomogeneousPoisson;
pub use thinning::VariablePoisson;
