//! Engine error type.
//!
//! Every failure is surfaced to the caller as a `PpError`; nothing is clamped
//! or recovered silently.  [`PpError::kind`] groups variants into the three
//! broad failure classes callers usually branch on.

use thiserror::Error;

/// The error type shared by all `pp-*` crates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PpError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name:   &'static str,
        value:  f64,
        reason: &'static str,
    },

    #[error("intensity {value} exceeds the majorizing bound {bound} at {location}")]
    BoundViolation {
        location: String,
        value:    f64,
        bound:    f64,
    },

    #[error("mark sequence exhausted after {accepted} accepted events")]
    MarksExhausted { accepted: usize },

    #[error("invalid realization: {0}")]
    InvalidRealization(String),

    #[error("event count exceeded the configured cap of {limit}")]
    ResourceExceeded { limit: usize },

    #[error("{what} evaluated to {value} at {location}")]
    NumericalInstability {
        what:     &'static str,
        value:    f64,
        location: String,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Broad failure classes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidParameter,
    ResourceExceeded,
    NumericalInstability,
}

impl PpError {
    /// Shorthand constructor for [`PpError::InvalidParameter`].
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        PpError::InvalidParameter { name, value, reason }
    }

    /// The failure class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PpError::InvalidParameter { .. }
            | PpError::BoundViolation { .. }
            | PpError::MarksExhausted { .. }
            | PpError::InvalidRealization(_)
            | PpError::Config(_) => ErrorKind::InvalidParameter,
            PpError::ResourceExceeded { .. } => ErrorKind::ResourceExceeded,
            PpError::NumericalInstability { .. } => ErrorKind::NumericalInstability,
        }
    }
}

/// Shorthand result type for all `pp-*` crates.
pub type PpResult<T> = Result<T, PpError>;
