//! The q-line through the feed point.

use crate::support::{
    equilibrium::EquilibriumCurve,
    geometry::Point,
    root::{RootConfig, RootError, find_root},
};

/// `q` values closer than this to one are treated as a saturated-liquid feed.
pub(super) const VERTICAL_Q_TOLERANCE: f64 = 1e-9;

/// The feed line, `y = q/(q-1)·x - x_f/(q-1)`.
///
/// At `q = 1` the slope is unbounded and the line is the vertical `x = x_f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedLine {
    Sloped { slope: f64, intercept: f64 },
    Vertical { x: f64 },
}

impl FeedLine {
    #[must_use]
    pub fn new(q: f64, x_feed: f64) -> Self {
        if (q - 1.0).abs() < VERTICAL_Q_TOLERANCE {
            Self::Vertical { x: x_feed }
        } else {
            Self::Sloped {
                slope: q / (q - 1.0),
                intercept: -x_feed / (q - 1.0),
            }
        }
    }

    /// Intersection with an equilibrium curve.
    ///
    /// For a sloped line the root is bracketed between the feed composition
    /// and the pure component on the side the line rises toward the curve:
    /// `[x_f, 1]` when the slope exceeds one, `[0, x_f]` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`RootError`] if the root find fails.
    pub fn intersect_curve(
        &self,
        curve: &impl EquilibriumCurve,
        x_feed: f64,
        config: &RootConfig,
    ) -> Result<Point, RootError> {
        match *self {
            Self::Vertical { x } => Ok(Point::new(x, curve.to_vapor(x))),
            Self::Sloped { slope, intercept } => {
                let bracket = if slope > 1.0 {
                    [x_feed, 1.0]
                } else {
                    [0.0, x_feed]
                };
                let x = find_root(
                    |x| slope * x + intercept - curve.to_vapor(x),
                    bracket,
                    config,
                )?;
                Ok(Point::new(x, curve.to_vapor(x)))
            }
        }
    }

    /// Intersection with the line `y = slope·x + intercept`.
    ///
    /// Returns `None` if the lines are parallel.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn intersect_line(&self, slope: f64, intercept: f64) -> Option<Point> {
        match *self {
            Self::Vertical { x } => Some(Point::new(x, slope * x + intercept)),
            Self::Sloped {
                slope: feed_slope,
                intercept: feed_intercept,
            } => {
                if feed_slope == slope {
                    return None;
                }
                let x = (feed_intercept - intercept) / (slope - feed_slope);
                Some(Point::new(x, slope * x + intercept))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::equilibrium::RelativeVolatility;
    use approx::assert_relative_eq;

    #[test]
    fn passes_through_feed_point_on_diagonal() {
        let FeedLine::Sloped { slope, intercept } = FeedLine::new(1.167, 0.5) else {
            panic!("expected a sloped feed line");
        };
        assert_relative_eq!(slope * 0.5 + intercept, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn saturated_liquid_feed_is_vertical() {
        assert_eq!(FeedLine::new(1.0, 0.4), FeedLine::Vertical { x: 0.4 });
    }

    #[test]
    fn pinch_for_subcooled_feed() {
        let curve = RelativeVolatility::ACETONE_ETHANOL;
        let pinch = FeedLine::new(1.167, 0.5)
            .intersect_curve(&curve, 0.5, &RootConfig::default())
            .unwrap();
        assert_relative_eq!(pinch.x, 0.533_316, epsilon = 1e-5);
        assert_relative_eq!(pinch.y, 0.732_811, epsilon = 1e-5);
    }

    #[test]
    fn pinch_for_vapor_feeds_lies_left_of_feed() {
        let curve = RelativeVolatility::ACETONE_ETHANOL;
        for q in [0.5, 0.0, -0.5] {
            let line = FeedLine::new(q, 0.5);
            let pinch = line
                .intersect_curve(&curve, 0.5, &RootConfig::default())
                .unwrap();
            assert!(pinch.x < 0.5, "q={q}: pinch at {}", pinch.x);
            assert_relative_eq!(pinch.y, curve.to_vapor(pinch.x));
        }
    }

    #[test]
    fn saturated_vapor_feed_pinch_is_at_feed_vapor_composition() {
        let curve = RelativeVolatility::ACETONE_ETHANOL;
        let pinch = FeedLine::new(0.0, 0.5)
            .intersect_curve(&curve, 0.5, &RootConfig::default())
            .unwrap();
        assert_relative_eq!(pinch.y, 0.5, epsilon = 1e-8);
    }

    #[test]
    fn line_intersection() {
        let vertical = FeedLine::Vertical { x: 0.5 };
        let point = vertical.intersect_line(0.5, 0.4).unwrap();
        assert_relative_eq!(point.x, 0.5);
        assert_relative_eq!(point.y, 0.65, epsilon = 1e-12);

        let sloped = FeedLine::new(2.0, 0.5);
        let point = sloped.intersect_line(0.5, 0.4).unwrap();
        assert_relative_eq!(point.y, 2.0 * point.x - 0.5, epsilon = 1e-12);

        let FeedLine::Sloped { slope, .. } = sloped else {
            unreachable!()
        };
        assert_eq!(sloped.intersect_line(slope, 0.0), None);
    }
}
