//! Results types for a flash calculation.

use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::fallback::Warning;

/// Phase state of the mixture at the flash condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Liquid,
    Vapor,
    TwoPhase,
}

/// Phase split at the flash condition.
///
/// For a single phase, `x_liquid = y_vapor = z` and the vapor fraction is 0
/// (liquid) or 1 (vapor).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseEquilibriumPoint {
    pub phase: Phase,

    /// Light-component fraction of the liquid.
    pub x_liquid: f64,

    /// Light-component fraction of the vapor.
    pub y_vapor: f64,

    /// Moles of vapor per mole of feed, in `[0, 1]`.
    pub vapor_fraction: f64,
}

impl PhaseEquilibriumPoint {
    #[must_use]
    pub fn liquid(z: f64) -> Self {
        Self {
            phase: Phase::Liquid,
            x_liquid: z,
            y_vapor: z,
            vapor_fraction: 0.0,
        }
    }

    #[must_use]
    pub fn vapor(z: f64) -> Self {
        Self {
            phase: Phase::Vapor,
            x_liquid: z,
            y_vapor: z,
            vapor_fraction: 1.0,
        }
    }

    /// Moles of liquid per mole of feed, `1 - vapor_fraction`.
    #[must_use]
    pub fn liquid_fraction(&self) -> f64 {
        1.0 - self.vapor_fraction
    }
}

/// Bubble and dew boundaries of the overall composition at the fixed variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundaries {
    /// Isothermal mode: bubble and dew pressures.
    Pressure { bubble: Pressure, dew: Pressure },

    /// Isobaric mode: bubble and dew temperatures.
    Temperature {
        bubble: ThermodynamicTemperature,
        dew: ThermodynamicTemperature,
    },
}

/// Outcome of a flash calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct FlashResult {
    /// Overall composition `z`.
    pub composition: f64,

    pub point: PhaseEquilibriumPoint,
    pub boundaries: Boundaries,

    /// Fallbacks applied while computing this result.
    pub warnings: Vec<Warning>,
}
