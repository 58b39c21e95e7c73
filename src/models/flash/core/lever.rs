//! Lever rule on a tie line.

use crate::support::fallback::{FallbackPolicy, Warning};

use super::{Phase, PhaseEquilibriumPoint};

/// Splits feed `z` between liquid `x` and vapor `y`.
///
/// The vapor fraction is `(z - x) / (y - x)`, clamped to `[0, 1]`. A tie line
/// of zero length uses [`FallbackPolicy::degenerate_lever_split`].
///
/// `(y - z) / (y - x)` is the liquid fraction, not the vapor fraction: it is
/// 1 at the bubble boundary where the feed is all liquid.
pub(super) fn split(
    z: f64,
    x: f64,
    y: f64,
    fallbacks: &FallbackPolicy,
    warnings: &mut Vec<Warning>,
) -> PhaseEquilibriumPoint {
    let span = y - x;

    let vapor_fraction = if span.abs() > f64::EPSILON {
        ((z - x) / span).clamp(0.0, 1.0)
    } else {
        Warning::DegenerateGeometry {
            context: "tie line",
            fallback: fallbacks.degenerate_lever_split,
        }
        .report(warnings);
        fallbacks.degenerate_lever_split
    };

    PhaseEquilibriumPoint {
        phase: Phase::TwoPhase,
        x_liquid: x,
        y_vapor: y,
        vapor_fraction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn feed_at_tie_line_ends() {
        let fallbacks = FallbackPolicy::default();
        let mut warnings = Vec::new();

        let at_bubble = split(0.3, 0.3, 0.6, &fallbacks, &mut warnings);
        let at_dew = split(0.6, 0.3, 0.6, &fallbacks, &mut warnings);
        let middle = split(0.4, 0.3, 0.6, &fallbacks, &mut warnings);

        assert_relative_eq!(at_bubble.vapor_fraction, 0.0);
        assert_relative_eq!(at_dew.vapor_fraction, 1.0);
        assert_relative_eq!(middle.vapor_fraction, 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(middle.liquid_fraction(), 2.0 / 3.0, epsilon = 1e-12);
        assert!(warnings.is_empty());
    }

    #[test]
    fn clamps_outside_tie_line() {
        let point = split(0.7, 0.3, 0.6, &FallbackPolicy::default(), &mut Vec::new());
        assert_relative_eq!(point.vapor_fraction, 1.0);
    }

    #[test]
    fn zero_length_tie_line_uses_fallback() {
        let mut warnings = Vec::new();
        let point = split(0.5, 0.5, 0.5, &FallbackPolicy::default(), &mut warnings);

        assert_relative_eq!(point.vapor_fraction, 0.5);
        assert_eq!(
            warnings,
            vec![Warning::DegenerateGeometry {
                context: "tie line",
                fallback: 0.5
            }]
        );
    }
}
