//! Checked evaluation of caller-supplied intensity values.
//!
//! Intensity functions are plain closures (`Fn(f64) -> f64`,
//! `Fn(Point) -> f64`).  The samplers pass each value through
//! [`check_intensity`] before using it as an acceptance ratio.

use std::fmt::Display;

use crate::{PpError, PpResult};

/// Whether thinning samplers verify `λ(x) <= λ_max` at every candidate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundCheck {
    /// A value above the bound fails the call with
    /// [`PpError::BoundViolation`].
    #[default]
    Checked,
    /// The bound is the caller's responsibility.  A value above it is
    /// accepted with probability 1.
    Unchecked,
}

/// Validate one intensity value.
///
/// NaN, infinite and negative values are always reported as
/// [`PpError::NumericalInstability`]; the majorizing bound is enforced only
/// under [`BoundCheck::Checked`].
#[inline]
pub fn check_intensity(
    value:    f64,
    bound:    f64,
    mode:     BoundCheck,
    location: impl Display,
) -> PpResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(PpError::NumericalInstability {
            what:     "intensity function",
            value,
            location: location.to_string(),
        });
    }
    if mode == BoundCheck::Checked && value > bound {
        return Err(PpError::BoundViolation {
            location: location.to_string(),
            value,
            bound,
        });
    }
    Ok(value)
}

/// Reject NaN, infinite or negative parameter values.
pub fn require_finite_non_negative(name: &'static str, value: f64) -> PpResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(PpError::invalid(name, value, "must be finite and >= 0"));
    }
    Ok(value)
}

/// Reject non-finite or non-positive parameter values.
pub fn require_positive(name: &'static str, value: f64) -> PpResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PpError::invalid(name, value, "must be finite and > 0"));
    }
    Ok(value)
}
