//! `pp-batch`: many independent realizations of one sampler.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`runner`] | `BatchRunner`: sequential or Rayon-parallel repetition     |
//! | [`batch`]  | `Batch<T>`: per-repetition results in index order         |
//!
//! # Determinism
//!
//! Repetition `i` draws from `StreamRng::substream(seed, i)`.  It never
//! shares a generator with any other repetition, so the batch is the same
//! whether it runs on one thread or many, and in whatever order Rayon
//! schedules the work.
//!
//! # Feature flags
//!
//! | Feature    | Effect                                       |
//! |------------|----------------------------------------------|
//! | `parallel` | Repetitions run on Rayon (optionally on a dedicated pool of `RunConfig::num_threads` workers) |

pub mod batch;
pub mod runner;


pub use batch::Batch;
pub use runner::BatchRunner;
