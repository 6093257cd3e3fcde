//! Realization types returned by the samplers.
//!
//! All realizations are plain values: a sampler builds one, hands it to the
//! caller, and never touches it again.

use crate::{Point, PpError, PpResult};

// ── Realization ───────────────────────────────────────────────────────────────

/// Event times of a temporal process on `[0, horizon)`, strictly increasing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Realization {
    horizon: f64,
    times:   Vec<f64>,
}

impl Realization {
    /// Wrap externally observed event times, validating ordering and bounds.
    pub fn new(horizon: f64, times: Vec<f64>) -> PpResult<Self> {
        validate_times(horizon, times.iter().copied())?;
        Ok(Self { horizon, times })
    }

    /// Wrap times a sampler produced in increasing order inside the horizon.
    ///
    /// No validation is performed.
    pub fn new_unchecked(horizon: f64, times: Vec<f64>) -> Self {
        Self { horizon, times }
    }

    /// The empty realization.
    pub fn empty(horizon: f64) -> Self {
        Self { horizon, times: Vec::new() }
    }

    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Counting process N(t): number of events at or before `t`.
    pub fn counting(&self, t: f64) -> usize {
        self.times.partition_point(|&s| s <= t)
    }

    /// Events per unit time over the whole horizon.
    pub fn empirical_rate(&self) -> f64 {
        self.times.len() as f64 / self.horizon
    }

    /// Re-check ordering and bounds, e.g. after deserialization.
    pub fn validate(&self) -> PpResult<()> {
        validate_times(self.horizon, self.times.iter().copied())
    }

    pub fn into_times(self) -> Vec<f64> {
        self.times
    }
}

// ── Hawkes ────────────────────────────────────────────────────────────────────

/// One accepted event of a self-exciting process.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HawkesEvent {
    pub time:      f64,
    /// Jump added to the intensity at `time`.
    pub mark:      f64,
    /// Intensity just before the jump, λ(time⁻).  Kept for diagnostics.
    pub intensity: f64,
}

/// Marked events of a Hawkes process on `[0, horizon)`, strictly increasing
/// in time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HawkesRealization {
    horizon: f64,
    events:  Vec<HawkesEvent>,
}

impl HawkesRealization {
    /// Wrap observed `(time, mark)` pairs, validating ordering, bounds and
    /// marks.  The cached intensities are left at `NaN`; they are not
    /// needed for inference.
    pub fn from_observed(horizon: f64, observed: &[(f64, f64)]) -> PpResult<Self> {
        validate_times(horizon, observed.iter().map(|&(t, _)| t))?;
        validate_marks(observed.iter().copied())?;
        let events = observed
            .iter()
            .map(|&(time, mark)| HawkesEvent { time, mark, intensity: f64::NAN })
            .collect();
        Ok(Self { horizon, events })
    }

    /// Wrap events a sampler produced in increasing order inside the
    /// horizon.  No validation is performed.
    pub fn new_unchecked(horizon: f64, events: Vec<HawkesEvent>) -> Self {
        Self { horizon, events }
    }

    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    #[inline]
    pub fn events(&self) -> &[HawkesEvent] {
        &self.events
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn times(&self) -> Vec<f64> {
        self.events.iter().map(|e| e.time).collect()
    }

    pub fn marks(&self) -> Vec<f64> {
        self.events.iter().map(|e| e.mark).collect()
    }

    /// Re-check ordering, bounds and marks.
    pub fn validate(&self) -> PpResult<()> {
        validate_times(self.horizon, self.events.iter().map(|e| e.time))?;
        validate_marks(self.events.iter().map(|e| (e.time, e.mark)))
    }

    /// Drop marks and cached intensities.
    pub fn to_realization(&self) -> Realization {
        Realization::new_unchecked(self.horizon, self.times())
    }

    /// λ(t) by direct summation over every event strictly before `t`.
    ///
    /// O(n) per query.  Samplers and the likelihood use the recursive
    /// [`ExpDecay`](crate::ExpDecay) instead; this is the reference it is
    /// checked against.
    pub fn intensity_at(&self, baseline: f64, decay: f64, t: f64) -> f64 {
        baseline
            + self
                .events
                .iter()
                .take_while(|e| e.time < t)
                .map(|e| e.mark * (-decay * (t - e.time)).exp())
                .sum::<f64>()
    }
}

// ── Spatial ───────────────────────────────────────────────────────────────────

/// Points of a spatial process.  Order carries no meaning.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpatialRealization {
    pub points: Vec<Point>,
}

impl SpatialRealization {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

fn validate_times(horizon: f64, times: impl Iterator<Item = f64>) -> PpResult<()> {
    if !horizon.is_finite() || horizon <= 0.0 {
        return Err(PpError::invalid("horizon", horizon, "must be finite and > 0"));
    }
    let mut prev = f64::NEG_INFINITY;
    for (i, t) in times.enumerate() {
        if !(0.0..horizon).contains(&t) {
            return Err(PpError::InvalidRealization(format!(
                "event {i} at t = {t} lies outside [0, {horizon})"
            )));
        }
        if t <= prev {
            return Err(PpError::InvalidRealization(format!(
                "event {i} at t = {t} does not follow the previous event at t = {prev}"
            )));
        }
        prev = t;
    }
    Ok(())
}

fn validate_marks(mut events: impl Iterator<Item = (f64, f64)>) -> PpResult<()> {
    match events.find(|(_, m)| !m.is_finite() || *m < 0.0) {
        Some((t, m)) => Err(PpError::InvalidRealization(format!(
            "mark {m} at t = {t} must be finite and >= 0"
        ))),
        None => Ok(()),
    }
}
