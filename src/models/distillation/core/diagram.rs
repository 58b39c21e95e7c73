//! Geometric primitives for drawing a McCabe-Thiele diagram.

use crate::support::{
    equilibrium::EquilibriumCurve,
    geometry::{Point, Segment, sample_unit_interval},
};

use super::{DesignResult, DesignSpec};

/// Everything needed to draw a design, in `(x, y)` composition coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct McCabeThieleDiagram {
    /// Samples of the equilibrium curve over `[0, 1]`.
    pub equilibrium: Vec<Point>,

    /// The `y = x` reference line.
    pub diagonal: Segment,

    pub rectifying: Segment,
    pub stripping: Segment,

    /// Feed line from the feed point on the diagonal to the pinch.
    pub feed_line: Segment,

    pub distillate: Point,
    pub bottoms: Point,
    pub feed: Point,
    pub feed_stage: Point,

    /// Alternating horizontal (equilibrium) and vertical (operating line)
    /// steps, two per stage.
    pub steps: Vec<Segment>,
}

impl McCabeThieleDiagram {
    /// Builds the diagram for `result`, sampling the curve at
    /// `curve_intervals + 1` points.
    #[must_use]
    pub fn new(
        spec: &DesignSpec,
        result: &DesignResult,
        curve: &impl EquilibriumCurve,
        curve_intervals: usize,
    ) -> Self {
        let on_diagonal = |x| Point::new(x, x);

        let steps = result
            .stages
            .iter()
            .flat_map(|stage| {
                let corner = Point::new(stage.x_liquid, stage.y_vapor);
                [
                    Segment::new(Point::new(stage.x_next, stage.y_vapor), corner),
                    Segment::new(corner, Point::new(stage.x_liquid, stage.y_next)),
                ]
            })
            .collect();

        Self {
            equilibrium: sample_unit_interval(curve_intervals, |x| curve.to_vapor(x)),
            diagonal: Segment::new(on_diagonal(0.0), on_diagonal(1.0)),
            rectifying: result.rectifying.segment(),
            stripping: result.stripping.segment(),
            feed_line: Segment::new(on_diagonal(spec.x_feed), result.pinch),
            distillate: on_diagonal(spec.x_distillate),
            bottoms: on_diagonal(spec.x_bottoms),
            feed: on_diagonal(spec.x_feed),
            feed_stage: result.feed_intersection,
            steps,
        }
    }
}
