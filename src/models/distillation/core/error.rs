use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that reject a column specification.
///
/// Numerical trouble during the design itself is never an error; see
/// [`Warning`](crate::support::fallback::Warning).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DesignError {
    /// A composition lies outside `(0, 1)` or the ordering
    /// `x_bottoms < x_feed < x_distillate` is violated.
    #[error("invalid composition: {context}")]
    InvalidComposition { context: String },

    /// The feed rate is not strictly positive.
    #[error("invalid feed rate")]
    InvalidFeedRate(#[source] ConstraintError),

    /// The reflux factor is below the supported minimum.
    #[error("reflux factor {reflux_factor} is below the minimum of {minimum}")]
    RefluxFactorTooLow { reflux_factor: f64, minimum: f64 },

    /// The q-factor is not a finite number.
    #[error("q-factor {0} is not finite")]
    InvalidQFactor(f64),
}

impl DesignError {
    /// Creates an invalid composition error with context.
    pub(super) fn composition(context: impl Into<String>) -> Self {
        Self::InvalidComposition {
            context: context.into(),
        }
    }
}
