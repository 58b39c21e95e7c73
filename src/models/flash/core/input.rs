//! Flash condition inputs.

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::bar,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::{StrictlyPositive, UnitIntervalOpen},
    input_range::InputRange,
};

use super::FlashError;

/// Which variable is held fixed, and the probe value of the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlashMode {
    /// P-x-y: fixed temperature, probed at `pressure`.
    Isothermal {
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    },

    /// T-x-y: fixed pressure, probed at `temperature`.
    ///
    /// Solved against a [`TxyTable`](super::TxyTable) built at `pressure`.
    Isobaric {
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    },
}

/// A flash specification: a mode and the overall light-component fraction `z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlashCondition {
    pub mode: FlashMode,
    pub composition: f64,
}

impl FlashCondition {
    /// Fixed temperature in °C for [`FlashMode::Isothermal`].
    pub const ISOTHERMAL_TEMPERATURE: InputRange = InputRange::new(85.0, 125.0, 1.0);
    /// Probe pressure in bar for [`FlashMode::Isothermal`].
    pub const ISOTHERMAL_PRESSURE: InputRange = InputRange::new(0.5, 4.0, 0.1);
    /// Fixed pressure in bar for [`FlashMode::Isobaric`].
    pub const ISOBARIC_PRESSURE: InputRange = InputRange::new(0.5, 2.0, 0.1);
    /// Probe temperature in °C for [`FlashMode::Isobaric`].
    pub const ISOBARIC_TEMPERATURE: InputRange = InputRange::new(45.0, 155.0, 1.0);
    pub const COMPOSITION: InputRange = InputRange::new(0.01, 0.99, 0.01);

    #[must_use]
    pub fn isothermal(
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        composition: f64,
    ) -> Self {
        Self {
            mode: FlashMode::Isothermal {
                temperature,
                pressure,
            },
            composition,
        }
    }

    #[must_use]
    pub fn isobaric(
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        composition: f64,
    ) -> Self {
        Self {
            mode: FlashMode::Isobaric {
                pressure,
                temperature,
            },
            composition,
        }
    }

    /// The pressure of the condition, fixed or probed.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        match self.mode {
            FlashMode::Isothermal { pressure, .. } | FlashMode::Isobaric { pressure, .. } => {
                pressure
            }
        }
    }

    /// The temperature of the condition, fixed or probed.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        match self.mode {
            FlashMode::Isothermal { temperature, .. }
            | FlashMode::Isobaric { temperature, .. } => temperature,
        }
    }

    /// Checks the physical invariants of the condition.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::InvalidComposition`] unless `0 < z < 1`, and
    /// [`FlashError::InvalidPressure`] for a non-positive pressure.
    pub fn validate(&self) -> Result<(), FlashError> {
        UnitIntervalOpen::new(self.composition).map_err(FlashError::InvalidComposition)?;
        StrictlyPositive::new(self.pressure()).map_err(FlashError::InvalidPressure)?;
        Ok(())
    }
}

impl Default for FlashCondition {
    /// Hexane-heptane at 115 °C probed at 1.5 bar, `z = 0.45`.
    fn default() -> Self {
        Self::isothermal(
            ThermodynamicTemperature::new::<degree_celsius>(115.0),
            Pressure::new::<bar>(1.5),
            0.45,
        )
    }
}
