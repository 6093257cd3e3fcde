//! Running intensity of an exponential-kernel self-exciting process.
//!
//! For the kernel `m · exp(-β·Δt)` the excitation carried by all past events
//! decays as one number:
//!
//!   λ(t) = λ0 + E(s) · exp(-β·(t - s))       for s ≤ t with no event in (s, t]
//!
//! where `E(s)` is the excess over baseline at time `s`.  Advancing the clock
//! and adding a jump are both O(1), so a whole realization is processed in
//! one linear pass.  `ExpDecay` is a local accumulator: each simulation or
//! likelihood evaluation owns its own.

use crate::{PpError, PpResult};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExpDecay {
    baseline: f64,
    decay:    f64,
    /// λ(time) - baseline.
    excess:   f64,
    time:     f64,
}

impl ExpDecay {
    /// Start at `time = 0` with no excitation.
    pub fn new(baseline: f64, decay: f64) -> PpResult<Self> {
        if !baseline.is_finite() || baseline < 0.0 {
            return Err(PpError::invalid("baseline", baseline, "must be finite and >= 0"));
        }
        if !decay.is_finite() || decay <= 0.0 {
            return Err(PpError::invalid("decay", decay, "must be finite and > 0"));
        }
        Ok(Self { baseline, decay, excess: 0.0, time: 0.0 })
    }

    /// Decay the excess forward to time `t` and return λ(t).
    ///
    /// `t` earlier than the current time is treated as the current time.
    #[inline]
    pub fn advance_to(&mut self, t: f64) -> f64 {
        let dt = t - self.time;
        if dt > 0.0 {
            self.excess *= (-self.decay * dt).exp();
            self.time = t;
        }
        self.intensity()
    }

    /// Add a jump of size `mark` at the current time.
    #[inline]
    pub fn jump(&mut self, mark: f64) {
        self.excess += mark;
    }

    /// Current λ.
    #[inline]
    pub fn intensity(&self) -> f64 {
        self.baseline + self.excess
    }

    /// Current λ - λ0.
    #[inline]
    pub fn excess(&self) -> f64 {
        self.excess
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[inline]
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    #[inline]
    pub fn decay(&self) -> f64 {
        self.decay
    }
}
