//! Named fallback policies and the warnings recorded when they are applied.
//!
//! Several computations have no physically meaningful answer for some inputs
//! (a negative minimum reflux, a stripping line through a single point, a tie
//! line of zero length). Instead of failing, they substitute a fixed value from
//! a [`FallbackPolicy`]. Each substitution is logged and recorded as a
//! [`Warning`] on the result so callers can tell a fallback from a solution.

use thiserror::Error;

/// Values substituted when a computation degenerates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackPolicy {
    /// Minimum reflux ratio used when the computed value is negative or not finite.
    pub negative_min_reflux: f64,

    /// Stripping-line slope used when the feed intersection lies on `x = x_b`.
    pub degenerate_stripping_slope: f64,

    /// Vapor fraction used when the liquid and vapor compositions coincide.
    pub degenerate_lever_split: f64,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            negative_min_reflux: 0.5,
            degenerate_stripping_slope: 1.0,
            degenerate_lever_split: 0.5,
        }
    }
}

/// A recoverable condition encountered during a computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Warning {
    /// A root find did not converge and an analytic fallback was used.
    #[error("{context} did not converge ({detail}); using fallback {fallback}")]
    NonConvergence {
        context: &'static str,
        detail: String,
        fallback: f64,
    },

    /// A zero-length or zero-denominator construction was replaced by a default.
    #[error("degenerate {context}; using fallback {fallback}")]
    DegenerateGeometry {
        context: &'static str,
        fallback: f64,
    },

    /// The computed minimum reflux ratio was negative or not finite.
    #[error("minimum reflux ratio {computed} is not physical; using fallback {fallback}")]
    NegativeMinimumReflux { computed: f64, fallback: f64 },

    /// Stage stepping stopped at the stage limit before reaching the bottoms.
    #[error("stage stepping stopped at the limit of {max_stages} stages before reaching the bottoms composition")]
    StageLimitReached { max_stages: usize },
}

impl Warning {
    /// Logs this warning and appends it to `warnings`.
    pub(crate) fn report(self, warnings: &mut Vec<Warning>) {
        log::warn!("{self}");
        warnings.push(self);
    }
}
