//! Declared ranges for interactive numeric inputs.

/// The `min`/`max`/`step` an input widget declares for a numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputRange {
    #[must_use]
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamps `value` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let range = InputRange::new(0.01, 0.99, 0.01);
        assert!(range.contains(0.01));
        assert!(range.contains(0.99));
        assert!(!range.contains(1.0));
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn clamps_out_of_range_values() {
        let range = InputRange::new(1.1, 3.0, 0.05);
        assert_eq!(range.clamp(0.5), 1.1);
        assert_eq!(range.clamp(4.0), 3.0);
        assert_eq!(range.clamp(2.0), 2.0);
    }
}
