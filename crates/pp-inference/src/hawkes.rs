//! Log-likelihood of an exponential-kernel Hawkes process.
//!
//! # Formula
//!
//! ```text
//! ℓ = Σ_i ln λ(t_i⁻) - ∫₀ᵀ λ(s) ds
//!
//! λ(t_i⁻) = λ0 + Σ_{j<i} m_j · exp(-β (t_i - t_j))
//! ∫₀ᵀ λ   = λ0·T + Σ_i (m_i / β) · (1 - exp(-β (T - t_i)))
//! ```
//!
//! With constant jumps `m_j = α` the point sum is `λ0 + α·R_i` where
//!
//! ```text
//! R_i = Σ_{j<i} exp(-β (t_i - t_j)) = exp(-β Δ_i) · (R_{i-1} + 1)
//! ```
//!
//! so both terms are accumulated in one O(n) pass.  The gradient reuses the
//! same pass with one more recursive sum:
//!
//! ```text
//! B_i = Σ_{j<i} (t_i - t_j) · exp(-β (t_i - t_j)) = exp(-β Δ_i) · (B_{i-1} + Δ_i (R_{i-1} + 1))
//! ```
//!
//! since `∂R_i/∂β = -B_i`.

use pp_core::{
    ExpDecay, HawkesRealization, PpError, PpResult, Realization, require_finite_non_negative,
    require_positive,
};

/// Parameters of the constant-jump model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HawkesParams {
    /// Background rate λ0.
    pub baseline: f64,
    /// Jump added by every event.
    pub alpha:    f64,
    /// Kernel decay rate β.
    pub decay:    f64,
}

impl HawkesParams {
    /// Requires `baseline >= 0`, `alpha >= 0` and `decay > 0`.
    pub fn new(baseline: f64, alpha: f64, decay: f64) -> PpResult<Self> {
        Ok(Self {
            baseline: require_finite_non_negative("baseline", baseline)?,
            alpha:    require_finite_non_negative("alpha", alpha)?,
            decay:    require_positive("decay", decay)?,
        })
    }

    /// Expected offspring per event, `α/β`.
    pub fn branching_ratio(&self) -> f64 {
        self.alpha / self.decay
    }

    fn validate(&self) -> PpResult<()> {
        Self::new(self.baseline, self.alpha, self.decay).map(|_| ())
    }
}

/// Value and gradient of the log-likelihood at one parameter point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LikelihoodEval {
    pub value:    f64,
    /// `[∂ℓ/∂λ0, ∂ℓ/∂α, ∂ℓ/∂β]`.
    pub gradient: [f64; 3],
}

/// An observed sequence, prepared for repeated likelihood evaluation.
///
/// Construct once, then evaluate at as many parameter points as a grid
/// search or optimizer needs.  Every evaluation is a single linear pass.
///
/// If some `λ(t_i⁻)` is zero (baseline 0 and no prior excitation) the
/// sequence is impossible under those parameters and the log-likelihood is
/// `-∞`.
#[derive(Clone, Debug, PartialEq)]
pub struct HawkesLikelihood {
    horizon: f64,
    times:   Vec<f64>,
    /// Per-event jump sizes, when the data carries them.
    marks:   Option<Vec<f64>>,
}

impl HawkesLikelihood {
    /// Use the realization's own horizon and recorded marks.
    pub fn new(realization: &HawkesRealization) -> PpResult<Self> {
        Self::with_horizon(realization, realization.horizon())
    }

    /// Evaluate `realization` as if observed on `[0, horizon)`.
    ///
    /// Every event must fall inside the new horizon.
    pub fn with_horizon(realization: &HawkesRealization, horizon: f64) -> PpResult<Self> {
        let times = Realization::new(horizon, realization.times())?.into_times();
        Ok(Self { horizon, times, marks: Some(realization.marks()) })
    }

    /// Unmarked event times on `[0, horizon)`.  Only the constant-jump
    /// model can be evaluated.
    pub fn from_times(times: &[f64], horizon: f64) -> PpResult<Self> {
        let times = Realization::new(horizon, times.to_vec())?.into_times();
        Ok(Self { horizon, times, marks: None })
    }

    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// ℓ under the constant-jump model.  Recorded marks are ignored.
    pub fn log_likelihood(&self, params: HawkesParams) -> PpResult<f64> {
        params.validate()?;
        let alpha = params.alpha;
        self.log_likelihood_with(params.baseline, params.decay, |_| alpha)
    }

    /// ℓ using the recorded per-event marks as jump sizes.
    pub fn marked_log_likelihood(&self, baseline: f64, decay: f64) -> PpResult<f64> {
        let marks = self.marks.as_deref().ok_or_else(|| {
            PpError::InvalidRealization("the sequence carries no marks".to_string())
        })?;
        self.log_likelihood_with(baseline, decay, |i| marks[i])
    }

    /// ℓ and its gradient under the constant-jump model, in one pass.
    pub fn evaluate(&self, params: HawkesParams) -> PpResult<LikelihoodEval> {
        params.validate()?;
        let HawkesParams { baseline, alpha, decay } = params;
        let horizon = self.horizon;

        let mut r = 0.0; // R_i
        let mut b = 0.0; // B_i
        let mut prev: Option<f64> = None;

        let mut log_sum = 0.0;
        let mut tail_mass = 0.0; // Σ (1 - e^{-β(T - t_i)})
        let mut d_baseline = 0.0;
        let mut d_alpha = 0.0;
        let mut d_decay = 0.0;

        for &t in &self.times {
            if let Some(p) = prev {
                let dt = t - p;
                let e = (-decay * dt).exp();
                b = e * (b + dt * (r + 1.0));
                r = e * (r + 1.0);
            }
            prev = Some(t);

            let lambda = baseline + alpha * r;
            log_sum += lambda.ln();
            d_baseline += 1.0 / lambda;
            d_alpha += r / lambda;
            d_decay -= alpha * b / lambda;

            let tau = horizon - t;
            let e_tail = (-decay * tau).exp();
            tail_mass += 1.0 - e_tail;
            d_decay += alpha / (decay * decay) * (1.0 - e_tail) - alpha / decay * tau * e_tail;
        }

        let value = log_sum - (baseline * horizon + alpha / decay * tail_mass);
        Ok(LikelihoodEval {
            value,
            gradient: [d_baseline - horizon, d_alpha - tail_mass / decay, d_decay],
        })
    }

    /// Gradient `[∂ℓ/∂λ0, ∂ℓ/∂α, ∂ℓ/∂β]` under the constant-jump model.
    pub fn gradient(&self, params: HawkesParams) -> PpResult<[f64; 3]> {
        Ok(self.evaluate(params)?.gradient)
    }

    /// Shared pass for any jump sizes, carrying λ(t⁻) in an [`ExpDecay`].
    fn log_likelihood_with(
        &self,
        baseline: f64,
        decay:    f64,
        mark:     impl Fn(usize) -> f64,
    ) -> PpResult<f64> {
        let mut state = ExpDecay::new(baseline, decay)?;
        let mut log_sum = 0.0;
        let mut jump_mass = 0.0;

        for (i, &t) in self.times.iter().enumerate() {
            let m = mark(i);
            log_sum += state.advance_to(t).ln();
            state.jump(m);
            jump_mass += m / decay * (1.0 - (-decay * (self.horizon - t)).exp());
        }

        let compensator = baseline * self.horizon + jump_mass;
        log::trace!("hawkes likelihood: n = {}, compensator = {compensator}", self.times.len());
        Ok(log_sum - compensator)
    }
}
