use crate::support::constraint::{Constrained, ConstraintResult, GreaterThanOne};

use super::EquilibriumCurve;

/// Constant relative volatility equilibrium, `y = αx / (1 + (α - 1)x)`.
///
/// # Example
///
/// ```
/// use binary_vle::support::equilibrium::{EquilibriumCurve, RelativeVolatility};
///
/// let alpha = RelativeVolatility::new(2.4).unwrap();
/// let y = alpha.to_vapor(0.5);
/// assert!((y - 1.2 / 1.7).abs() < 1e-12);
/// assert!((alpha.to_liquid(y) - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeVolatility(Constrained<f64, GreaterThanOne>);

impl RelativeVolatility {
    /// Acetone relative to ethanol, `α = 2.4`.
    pub const ACETONE_ETHANOL: Self = Self(Constrained::new_unchecked(2.4));

    /// Creates a relative volatility from `α`.
    ///
    /// # Errors
    ///
    /// Returns `Err` unless `α > 1`.
    pub fn new(alpha: f64) -> ConstraintResult<Self> {
        Ok(Self(GreaterThanOne::new(alpha)?))
    }

    /// Returns `α`.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        *self.0
    }
}

impl EquilibriumCurve for RelativeVolatility {
    fn to_vapor(&self, x: f64) -> f64 {
        let alpha = self.alpha();
        alpha * x / (1.0 + (alpha - 1.0) * x)
    }

    fn to_liquid(&self, y: f64) -> f64 {
        let alpha = self.alpha();
        y / (alpha - y * (alpha - 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn acetone_ethanol_at_equimolar_liquid() {
        let curve = RelativeVolatility::ACETONE_ETHANOL;
        assert_relative_eq!(curve.to_vapor(0.5), 1.2 / 1.7, epsilon = 1e-12);
        assert_relative_eq!(curve.to_liquid(0.70588), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn inverse_round_trips_across_the_interval() {
        for alpha in [1.05, 2.4, 10.0] {
            let curve = RelativeVolatility::new(alpha).unwrap();
            for i in 1..100 {
                let x = f64::from(i) / 100.0;
                assert_relative_eq!(curve.to_liquid(curve.to_vapor(x)), x, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn pure_components_map_to_themselves() {
        let curve = RelativeVolatility::ACETONE_ETHANOL;
        assert_relative_eq!(curve.to_vapor(0.0), 0.0);
        assert_relative_eq!(curve.to_vapor(1.0), 1.0);
        assert_relative_eq!(curve.to_liquid(1.0), 1.0);
    }

    #[test]
    fn preset_satisfies_constraint() {
        assert_eq!(
            RelativeVolatility::new(2.4).unwrap(),
            RelativeVolatility::ACETONE_ETHANOL
        );
    }

    #[test]
    fn rejects_non_volatile_pairs() {
        assert!(RelativeVolatility::new(1.0).is_err());
        assert!(RelativeVolatility::new(0.8).is_err());
    }
}
