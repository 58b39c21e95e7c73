//! Vapor-liquid equilibrium relations for a binary pair.
//!
//! Compositions are mole fractions of the light (more volatile) component.
//!
//! Two relations are provided:
//!
//! - [`RelativeVolatility`]: Constant relative volatility. Implements
//!   [`EquilibriumCurve`] with exact closed-form inverses, and is what the
//!   McCabe-Thiele model steps against.
//! - [`AntoinePair`]: Ideal (Raoult's law) mixture of two components whose
//!   saturation pressures follow the Antoine equation. Bubble and dew pressures
//!   are closed-form at a given temperature; bubble and dew temperatures at a
//!   given pressure need root finding.

mod antoine;
mod relative_volatility;

pub use antoine::{AntoineCoefficients, AntoinePair};
pub use relative_volatility::RelativeVolatility;

/// An isobaric y-x equilibrium curve.
///
/// Implementations must be monotone on `[0, 1]` and map `0 → 0` and `1 → 1`,
/// with [`to_liquid`](Self::to_liquid) the inverse of
/// [`to_vapor`](Self::to_vapor).
pub trait EquilibriumCurve {
    /// Vapor composition in equilibrium with liquid composition `x`.
    fn to_vapor(&self, x: f64) -> f64;

    /// Liquid composition in equilibrium with vapor composition `y`.
    fn to_liquid(&self, y: f64) -> f64;
}
