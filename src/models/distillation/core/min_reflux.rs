//! Minimum reflux from the feed-line pinch.

use crate::support::{
    equilibrium::EquilibriumCurve,
    fallback::{FallbackPolicy, Warning},
    geometry::Point,
    root::RootConfig,
};

use super::{DesignSpec, FeedLine};

/// The pinch point and the minimum reflux ratio it implies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumReflux {
    /// Intersection of the feed line with the equilibrium curve.
    pub pinch: Point,

    /// Minimum reflux ratio `R_min = (x_d - y*) / (y* - x*)`.
    pub ratio: f64,
}

/// Locates the pinch and derives `R_min`.
///
/// If the root find fails the pinch falls back to the equilibrium point at the
/// feed composition. A negative or non-finite `R_min` is replaced by
/// [`FallbackPolicy::negative_min_reflux`]. Both substitutions are reported.
pub(super) fn minimum_reflux(
    spec: &DesignSpec,
    feed_line: &FeedLine,
    curve: &impl EquilibriumCurve,
    root: &RootConfig,
    fallbacks: &FallbackPolicy,
    warnings: &mut Vec<Warning>,
) -> MinimumReflux {
    let pinch = feed_line
        .intersect_curve(curve, spec.x_feed, root)
        .unwrap_or_else(|err| {
            Warning::NonConvergence {
                context: "feed-line pinch",
                detail: err.to_string(),
                fallback: spec.x_feed,
            }
            .report(warnings);
            Point::new(spec.x_feed, curve.to_vapor(spec.x_feed))
        });

    let computed = (spec.x_distillate - pinch.y) / (pinch.y - pinch.x);

    let ratio = if computed.is_finite() && computed >= 0.0 {
        computed
    } else {
        Warning::NegativeMinimumReflux {
            computed,
            fallback: fallbacks.negative_min_reflux,
        }
        .report(warnings);
        fallbacks.negative_min_reflux
    };

    MinimumReflux { pinch, ratio }
}
