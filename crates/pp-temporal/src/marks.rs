//! Jump sizes for self-exciting processes.
//!
//! A Hawkes simulation asks its generator for one mark per accepted event.
//! The uniform-jump model (every event adds α) and the marked model (event
//! `i` adds `m_i`) are both just generators:
//!
//! | Generator          | Marks produced                                   |
//! |--------------------|--------------------------------------------------|
//! | [`ConstantMark`]   | α, forever                                       |
//! | [`MarkSequence`]   | a fixed array, in order; runs out at its end     |
//! | [`RandomMarks`]    | i.i.d. draws from any `rand_distr` distribution  |

use std::sync::Arc;

use pp_core::StreamRng;
use rand_distr::Distribution;

/// Source of successive jump sizes.
///
/// Samplers clone the generator at the start of every realization, so a
/// stateful generator such as [`MarkSequence`] restarts from its first mark
/// in each batch repetition.
pub trait MarkGenerator: Clone + Send + Sync {
    /// The next mark, or `None` if the generator is exhausted.
    fn next_mark(&mut self, rng: &mut StreamRng) -> Option<f64>;
}

/// Every event adds the same jump `α`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstantMark(pub f64);

impl MarkGenerator for ConstantMark {
    #[inline]
    fn next_mark(&mut self, _rng: &mut StreamRng) -> Option<f64> {
        Some(self.0)
    }
}

/// A fixed per-event array of marks.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkSequence {
    marks: Arc<[f64]>,
    next:  usize,
}

impl MarkSequence {
    pub fn new(marks: impl Into<Arc<[f64]>>) -> Self {
        Self { marks: marks.into(), next: 0 }
    }

    /// Marks not yet handed out.
    pub fn remaining(&self) -> usize {
        self.marks.len() - self.next
    }
}

impl MarkGenerator for MarkSequence {
    fn next_mark(&mut self, _rng: &mut StreamRng) -> Option<f64> {
        let mark = self.marks.get(self.next).copied()?;
        self.next += 1;
        Some(mark)
    }
}

/// Independent marks drawn from `D` using the simulation's own stream.
#[derive(Clone, Debug)]
pub struct RandomMarks<D>(pub D);

impl<D> MarkGenerator for RandomMarks<D>
where
    D: Distribution<f64> + Clone + Send + Sync,
{
    #[inline]
    fn next_mark(&mut self, rng: &mut StreamRng) -> Option<f64> {
        Some(self.0.sample(rng.inner()))
    }
}
