//! Rectifying and stripping operating lines.

use crate::support::{
    fallback::{FallbackPolicy, Warning},
    geometry::{Point, Segment},
};

use super::{DesignSpec, FeedLine};

/// Column section an operating line or stage belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Above the feed.
    Rectifying,
    /// Below the feed.
    Stripping,
}

/// A straight operating line, valid over `[x_low, x_high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingLine {
    pub section: Section,
    pub slope: f64,
    pub intercept: f64,
    pub x_low: f64,
    pub x_high: f64,
}

impl OperatingLine {
    /// Vapor composition on the line at liquid composition `x`.
    ///
    /// The value is only physically meaningful inside the validity domain.
    #[must_use]
    pub fn vapor_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Returns `true` if `x` lies inside the validity domain.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        (self.x_low..=self.x_high).contains(&x)
    }

    /// The line restricted to its validity domain.
    #[must_use]
    pub fn segment(&self) -> Segment {
        Segment::new(
            Point::new(self.x_low, self.vapor_at(self.x_low)),
            Point::new(self.x_high, self.vapor_at(self.x_high)),
        )
    }
}

/// Both operating lines and the point where they meet on the feed line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingLines {
    pub rectifying: OperatingLine,
    pub stripping: OperatingLine,
    pub feed_intersection: Point,
}

impl OperatingLines {
    /// Builds the operating lines for reflux ratio `reflux`.
    ///
    /// The rectifying line has slope `R/(R+1)` and intercept `x_d/(R+1)`. Its
    /// intersection with the feed line is solved in closed form; if the two are
    /// parallel the intersection falls back to the rectifying line at `x_f`.
    /// The stripping line joins `(x_b, x_b)` to that intersection.
    pub(super) fn build(
        spec: &DesignSpec,
        reflux: f64,
        feed_line: &FeedLine,
        fallbacks: &FallbackPolicy,
        warnings: &mut Vec<Warning>,
    ) -> Self {
        let slope = reflux / (reflux + 1.0);
        let intercept = spec.x_distillate / (reflux + 1.0);

        let feed_intersection = feed_line
            .intersect_line(slope, intercept)
            .unwrap_or_else(|| {
                Warning::DegenerateGeometry {
                    context: "feed line parallel to rectifying line",
                    fallback: spec.x_feed,
                }
                .report(warnings);
                Point::new(spec.x_feed, slope * spec.x_feed + intercept)
            });

        let rectifying = OperatingLine {
            section: Section::Rectifying,
            slope,
            intercept,
            x_low: feed_intersection.x,
            x_high: spec.x_distillate,
        };

        let stripping = stripping_line(spec.x_bottoms, feed_intersection, fallbacks, warnings);

        Self {
            rectifying,
            stripping,
            feed_intersection,
        }
    }

    /// The operating line for `section`.
    #[must_use]
    pub fn line(&self, section: Section) -> &OperatingLine {
        match section {
            Section::Rectifying => &self.rectifying,
            Section::Stripping => &self.stripping,
        }
    }
}

/// Line through `(x_b, x_b)` and the feed intersection.
#[allow(clippy::float_cmp)]
fn stripping_line(
    x_bottoms: f64,
    feed_intersection: Point,
    fallbacks: &FallbackPolicy,
    warnings: &mut Vec<Warning>,
) -> OperatingLine {
    let slope = if feed_intersection.x == x_bottoms {
        Warning::DegenerateGeometry {
            context: "stripping line",
            fallback: fallbacks.degenerate_stripping_slope,
        }
        .report(warnings);
        fallbacks.degenerate_stripping_slope
    } else {
        (feed_intersection.y - x_bottoms) / (feed_intersection.x - x_bottoms)
    };

    OperatingLine {
        section: Section::Stripping,
        slope,
        intercept: x_bottoms * (1.0 - slope),
        x_low: x_bottoms,
        x_high: feed_intersection.x,
    }
}
