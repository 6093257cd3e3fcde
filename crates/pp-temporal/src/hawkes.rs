//! Self-exciting (Hawkes) process with an exponential kernel.
//!
//! # Model
//!
//! ```text
//! λ(t) = λ0 + Σ_{t_i < t} m_i · exp(-β·(t - t_i))
//! ```
//!
//! # Algorithm (Ogata's modified thinning)
//!
//! Between events λ only decays, so the intensity just after the current
//! time bounds it until the next event:
//!
//! ```text
//! M ← λ(t⁺)
//! w ← Exp(M);  t' ← t + w;  stop if t' ≥ T
//! λ(t') ← λ0 + (λ(t⁺) - λ0)·exp(-β·w)
//! accept t' with probability λ(t') / M
//!   accepted → record (t', m, λ(t')), λ(t'⁺) ← λ(t') + m
//!   rejected → λ continues decaying from λ(t'), no jump
//! ```
//!
//! The carried intensity is updated with the closed-form decay of
//! [`ExpDecay`]; the event history is never re-summed, so a realization costs
//! O(candidates).

use pp_core::{
    ExpDecay, HawkesEvent, HawkesRealization, PpError, PpResult, Sampler, SamplingLimits,
    StreamRng, require_finite_non_negative, require_positive,
};

use crate::{ConstantMark, MarkGenerator};

/// Exponential-kernel Hawkes process on `[0, horizon)`.
///
/// Stability (`α/β < 1` for constant marks) is not assumed; a supercritical
/// configuration simply runs until the horizon or until
/// [`SamplingLimits::max_events`] aborts it.
#[derive(Clone, Debug)]
pub struct HawkesExp<M: MarkGenerator> {
    horizon:  f64,
    decay:    f64,
    baseline: f64,
    marks:    M,
    limits:   SamplingLimits,
}

impl<M: MarkGenerator> HawkesExp<M> {
    /// Requires `horizon > 0`, `decay > 0` and `baseline >= 0`.
    pub fn new(horizon: f64, decay: f64, baseline: f64, marks: M) -> PpResult<Self> {
        Ok(Self {
            horizon:  require_positive("horizon", horizon)?,
            decay:    require_positive("decay", decay)?,
            baseline: require_finite_non_negative("baseline", baseline)?,
            marks,
            limits:   SamplingLimits::default(),
        })
    }

    pub fn with_limits(mut self, limits: SamplingLimits) -> Self {
        self.limits = limits;
        self
    }

    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    #[inline]
    pub fn decay(&self) -> f64 {
        self.decay
    }

    #[inline]
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn marks(&self) -> &M {
        &self.marks
    }
}

impl HawkesExp<ConstantMark> {
    /// Uniform jump size `alpha` on every event.  Requires `alpha >= 0`.
    pub fn constant(horizon: f64, alpha: f64, decay: f64, baseline: f64) -> PpResult<Self> {
        let alpha = require_finite_non_negative("alpha", alpha)?;
        Self::new(horizon, decay, baseline, ConstantMark(alpha))
    }

    /// Expected offspring per event, `α/β`.
    pub fn branching_ratio(&self) -> f64 {
        self.marks.0 / self.decay
    }
}

impl<M: MarkGenerator> Sampler for HawkesExp<M> {
    type Output = HawkesRealization;

    fn sample(&self, rng: &mut StreamRng) -> PpResult<HawkesRealization> {
        let mut marks = self.marks.clone();
        let mut state = ExpDecay::new(self.baseline, self.decay)?;
        let mut events = Vec::new();
        let mut candidates = 0usize;

        // λ(t⁺): bounds the intensity until the next accepted event.
        let mut upper = state.intensity();
        while upper > 0.0 {
            let t = state.time() + rng.exponential(upper)?;
            if t >= self.horizon {
                break;
            }
            candidates += 1;

            let lambda = state.advance_to(t);
            if rng.bernoulli(lambda / upper) {
                let mark = marks
                    .next_mark(rng)
                    .ok_or(PpError::MarksExhausted { accepted: events.len() })?;
                if !mark.is_finite() || mark < 0.0 {
                    return Err(PpError::NumericalInstability {
                        what:     "mark generator",
                        value:    mark,
                        location: format!("t = {t}"),
                    });
                }
                if self.limits.exceeded(events.len() + 1) {
                    return Err(PpError::ResourceExceeded {
                        limit: self.limits.max_events.unwrap_or_default(),
                    });
                }
                events.push(HawkesEvent { time: t, mark, intensity: lambda });
                state.jump(mark);
            }
            upper = state.intensity();
        }

        log::debug!(
            "hawkes: accepted {} of {} candidates on [0, {})",
            events.len(),
            candidates,
            self.horizon,
        );
        Ok(HawkesRealization::new_unchecked(self.horizon, events))
    }
}
