//! Binary flash with P-x-y and T-x-y modes.
//!
//! # Example
//!
//! ```
//! use binary_vle::models::flash::{BinaryFlash, FlashCondition, Phase};
//! use binary_vle::support::equilibrium::AntoinePair;
//! use twine_core::Model;
//!
//! let model = BinaryFlash::new(AntoinePair::HEXANE_HEPTANE);
//! let result = model.call(&FlashCondition::default()).unwrap();
//!
//! assert_eq!(result.point.phase, Phase::TwoPhase);
//! assert!(result.point.x_liquid < 0.45 && 0.45 < result.point.y_vapor);
//! ```

mod core;

pub use self::core::{
    Boundaries, FlashCondition, FlashConfig, FlashError, FlashMode, FlashResult, Phase,
    PhaseDiagram, PhaseEquilibriumPoint, TxySample, TxyTable, flash, flash_on_table,
};

use twine_core::Model;
use uom::si::f64::Pressure;

use crate::support::{equilibrium::AntoinePair, memo::Memo};

/// Flash of an Antoine pair.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryFlash {
    pair: AntoinePair,
    config: FlashConfig,
}

impl BinaryFlash {
    #[must_use]
    pub fn new(pair: AntoinePair) -> Self {
        Self::with_config(pair, FlashConfig::default())
    }

    #[must_use]
    pub fn with_config(pair: AntoinePair, config: FlashConfig) -> Self {
        Self { pair, config }
    }

    #[must_use]
    pub fn pair(&self) -> &AntoinePair {
        &self.pair
    }

    #[must_use]
    pub fn config(&self) -> &FlashConfig {
        &self.config
    }

    /// Builds the T-x-y table this model uses at `pressure`.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::InvalidPressure`] for a non-positive pressure.
    pub fn table(&self, pressure: Pressure) -> Result<TxyTable, FlashError> {
        TxyTable::build(
            &self.pair,
            pressure,
            self.config.table_intervals,
            &self.config.root,
        )
    }

    /// Phase diagram for `condition` and its flash result.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::InvalidPressure`] if an isobaric table cannot be built.
    pub fn diagram(
        &self,
        condition: &FlashCondition,
        result: &FlashResult,
    ) -> Result<PhaseDiagram, FlashError> {
        match condition.mode {
            FlashMode::Isothermal {
                temperature,
                pressure,
            } => Ok(PhaseDiagram::isothermal(
                &self.pair,
                temperature,
                pressure,
                result,
                self.config.table_intervals,
            )),
            FlashMode::Isobaric {
                pressure,
                temperature,
            } => Ok(PhaseDiagram::isobaric(
                &self.table(pressure)?,
                temperature,
                result,
            )),
        }
    }
}

impl Model for BinaryFlash {
    type Input = FlashCondition;
    type Output = FlashResult;
    type Error = FlashError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        flash(input, &self.pair, &self.config)
    }
}

/// A [`BinaryFlash`] that keeps the result for the current condition and the
/// T-x-y table for the current pressure.
///
/// Changing only the probe temperature or composition of an isobaric condition
/// reuses the table.
#[derive(Debug, Clone)]
pub struct CachedFlash {
    model: BinaryFlash,
    table: Memo<Pressure, Result<TxyTable, FlashError>>,
    result: Memo<FlashCondition, Result<FlashResult, FlashError>>,
}

impl CachedFlash {
    #[must_use]
    pub fn new(model: BinaryFlash) -> Self {
        Self {
            model,
            table: Memo::new(),
            result: Memo::new(),
        }
    }

    /// Returns the flash of `condition`, computing it only if `condition`
    /// changed since the last call.
    ///
    /// # Errors
    ///
    /// Returns the [`FlashError`] for an invalid `condition`.
    pub fn flash(&mut self, condition: &FlashCondition) -> Result<&FlashResult, &FlashError> {
        let Self {
            model,
            table,
            result,
        } = self;

        result
            .get_or_compute(condition, |condition| match condition.mode {
                FlashMode::Isothermal { .. } => model.call(condition),
                FlashMode::Isobaric {
                    pressure,
                    temperature,
                } => {
                    condition.validate()?;
                    let table = table
                        .get_or_compute(&pressure, |&pressure| model.table(pressure))
                        .as_ref()
                        .map_err(Clone::clone)?;
                    flash_on_table(table, temperature, condition.composition, &model.config)
                }
            })
            .as_ref()
    }

    /// Returns `true` if a table for `pressure` is cached.
    #[must_use]
    pub fn has_table(&self, pressure: Pressure) -> bool {
        self.table.is_current(&pressure)
    }

    #[must_use]
    pub fn model(&self) -> &BinaryFlash {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::ThermodynamicTemperature, pressure::bar, thermodynamic_temperature::degree_celsius,
    };

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    #[test]
    fn cached_flash_matches_model() {
        let model = BinaryFlash::new(AntoinePair::HEXANE_HEPTANE);
        let condition = FlashCondition::default();
        let expected = model.call(&condition).unwrap();

        let mut cached = CachedFlash::new(model);
        assert_eq!(cached.flash(&condition).unwrap(), &expected);
        assert_eq!(cached.flash(&condition).unwrap(), &expected);
    }

    #[test]
    fn isobaric_table_is_reused_across_probe_temperatures() {
        let model = BinaryFlash::new(AntoinePair::HEXANE_HEPTANE);
        let one_bar = Pressure::new::<bar>(1.0);
        let mut cached = CachedFlash::new(model.clone());

        for t in [85.0, 100.0, 115.0] {
            let condition = FlashCondition::isobaric(one_bar, celsius(t), 0.45);
            let expected = model.call(&condition).unwrap();
            assert_eq!(cached.flash(&condition).unwrap(), &expected);
            assert!(cached.has_table(one_bar));
        }

        let two_bar = Pressure::new::<bar>(2.0);
        cached
            .flash(&FlashCondition::isobaric(two_bar, celsius(100.0), 0.45))
            .unwrap();
        assert!(cached.has_table(two_bar));
        assert!(!cached.has_table(one_bar));
    }

    #[test]
    fn cached_flash_keeps_errors() {
        let mut cached = CachedFlash::new(BinaryFlash::new(AntoinePair::HEXANE_HEPTANE));
        let condition = FlashCondition::isobaric(Pressure::new::<bar>(1.0), celsius(100.0), 1.5);
        assert!(matches!(
            cached.flash(&condition),
            Err(FlashError::InvalidComposition(_))
        ));
        assert!(!cached.has_table(Pressure::new::<bar>(1.0)));
    }

    #[test]
    fn diagram_matches_mode() {
        let model = BinaryFlash::new(AntoinePair::HEXANE_HEPTANE);
        let condition = FlashCondition::isobaric(Pressure::new::<bar>(1.0), celsius(100.0), 0.45);
        let result = model.call(&condition).unwrap();
        let diagram = model.diagram(&condition, &result).unwrap();

        assert_eq!(diagram.bubble.len(), 101);
        assert!(diagram.tie_line.is_some());
    }
}
