//! Plain geometric primitives handed to a rendering collaborator.

/// A point in diagram coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A straight line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Samples `f` at `intervals + 1` evenly spaced abscissae covering `[0, 1]`.
pub fn sample_unit_interval(intervals: usize, f: impl Fn(f64) -> f64) -> Vec<Point> {
    let intervals = intervals.max(1);
    (0..=intervals)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let x = i as f64 / intervals as f64;
            Point::new(x, f(x))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn samples_include_both_endpoints() {
        let points = sample_unit_interval(4, |x| 2.0 * x);
        assert_eq!(points.len(), 5);
        assert_relative_eq!(points[0].x, 0.0);
        assert_relative_eq!(points[4].x, 1.0);
        assert_relative_eq!(points[2].y, 1.0);
    }

    #[test]
    fn zero_intervals_still_spans_the_interval() {
        let points = sample_unit_interval(0, |x| x);
        assert_eq!(points, vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
    }
}
