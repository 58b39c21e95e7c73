//! Results types for a McCabe-Thiele design.

use crate::support::{fallback::Warning, geometry::Point};

use super::{MaterialBalance, OperatingLine, Section};

/// One theoretical stage from the graphical construction.
///
/// A stage is a horizontal step at `y_vapor` from `x_next` onto the
/// equilibrium curve at `x_liquid`, followed by a vertical step down to the
/// operating line at `y_next`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    /// One-based stage number, counted from the top of the column.
    pub index: usize,

    /// Section whose operating line closes the stage.
    pub section: Section,

    /// Liquid composition leaving the stage.
    pub x_liquid: f64,

    /// Vapor composition leaving the stage.
    pub y_vapor: f64,

    /// Liquid composition the step started from.
    pub x_next: f64,

    /// Vapor composition rising from the stage below.
    pub y_next: f64,
}

/// How stage stepping ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The liquid composition reached the bottoms tolerance.
    Converged,

    /// The stage limit was reached first; the stage counts are a lower bound
    /// and the design cannot be completed with this reflux and feed condition.
    StageLimitReached,
}

/// Internal liquid and vapor rates in both column sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InternalFlows {
    /// Rectifying vapor `V = D·(R + 1)`.
    pub vapor: f64,

    /// Rectifying liquid `L = R·D`.
    pub liquid: f64,

    /// Stripping vapor `V' = V - (1 - q)·F`.
    pub stripping_vapor: f64,

    /// Stripping liquid `L' = L + q·F`.
    pub stripping_liquid: f64,
}

impl InternalFlows {
    pub(super) fn new(balance: &MaterialBalance, reflux: f64, q: f64) -> Self {
        let vapor = balance.distillate * (reflux + 1.0);
        let liquid = reflux * balance.distillate;
        Self {
            vapor,
            liquid,
            stripping_vapor: vapor - (1.0 - q) * balance.feed,
            stripping_liquid: liquid + q * balance.feed,
        }
    }
}

/// Complete McCabe-Thiele design for one [`DesignSpec`](super::DesignSpec).
///
/// Recomputed in full whenever the specification changes.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignResult {
    pub balance: MaterialBalance,

    /// Minimum reflux ratio `R_min`.
    pub min_reflux: f64,

    /// Operating reflux ratio `R = reflux_factor · R_min`.
    pub reflux: f64,

    /// Feed-line intersection with the equilibrium curve.
    pub pinch: Point,

    /// Feed-line intersection with both operating lines.
    pub feed_intersection: Point,

    pub rectifying: OperatingLine,
    pub stripping: OperatingLine,

    /// Stages in stepping order, top to bottom.
    pub stages: Vec<Stage>,

    pub stages_rectifying: usize,
    pub stages_stripping: usize,

    /// Stage at which stepping switched to the stripping line.
    pub feed_stage: usize,

    pub flows: InternalFlows,
    pub termination: Termination,

    /// Fallbacks applied while computing this result.
    pub warnings: Vec<Warning>,
}

impl DesignResult {
    /// Total theoretical stages.
    #[must_use]
    pub fn total_stages(&self) -> usize {
        self.stages_rectifying + self.stages_stripping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn internal_flows_close_around_the_feed() {
        let balance = MaterialBalance {
            feed: 100.0,
            distillate: 50.0,
            bottoms: 50.0,
        };
        let q = 1.2;
        let flows = InternalFlows::new(&balance, 1.5, q);

        assert_relative_eq!(flows.vapor, 125.0);
        assert_relative_eq!(flows.liquid, 75.0);
        assert_relative_eq!(flows.stripping_liquid, 195.0);
        assert_relative_eq!(flows.stripping_vapor, 145.0);
        // Bottoms leave as the difference of stripping flows.
        assert_relative_eq!(
            flows.stripping_liquid - flows.stripping_vapor,
            balance.bottoms,
            epsilon = 1e-9
        );
    }
}
