//! Isothermal and isobaric flash of an ideal binary mixture.
//!
//! A flash classifies the overall composition against the bubble and dew
//! boundaries at the fixed variable and, inside the two-phase envelope, splits
//! it into liquid and vapor by the lever rule.

mod config;
mod diagram;
mod error;
mod input;
mod isobaric;
mod isothermal;
mod lever;
mod results;
mod txy_table;

pub use config::FlashConfig;
pub use diagram::PhaseDiagram;
pub use error::FlashError;
pub use input::{FlashCondition, FlashMode};
pub use results::{Boundaries, FlashResult, Phase, PhaseEquilibriumPoint};
pub use txy_table::{TxySample, TxyTable};

use uom::si::f64::ThermodynamicTemperature;

use crate::support::{
    constraint::UnitIntervalOpen,
    equilibrium::AntoinePair,
    fallback::Warning,
};

/// Flashes `condition` for `pair`.
///
/// Isothermal conditions are solved directly from the Antoine model. Isobaric
/// conditions build a [`TxyTable`] at the condition's pressure first; use
/// [`flash_on_table`] to reuse a table across conditions.
///
/// # Errors
///
/// Returns [`FlashError`] if the condition is invalid.
pub fn flash(
    condition: &FlashCondition,
    pair: &AntoinePair,
    config: &FlashConfig,
) -> Result<FlashResult, FlashError> {
    condition.validate()?;

    match condition.mode {
        FlashMode::Isothermal {
            temperature,
            pressure,
        } => {
            let mut warnings = Vec::new();
            let (point, boundaries) = isothermal::solve(
                pair,
                temperature,
                pressure,
                condition.composition,
                config,
                &mut warnings,
            );
            Ok(finish(condition.composition, point, boundaries, warnings))
        }
        FlashMode::Isobaric {
            pressure,
            temperature,
        } => {
            let table = TxyTable::build(pair, pressure, config.table_intervals, &config.root)?;
            flash_on_table(&table, temperature, condition.composition, config)
        }
    }
}

/// Isobaric flash of composition `z` at `temperature` on a prebuilt table.
///
/// The result carries the table's own warnings ahead of any from the flash.
///
/// # Errors
///
/// Returns [`FlashError::InvalidComposition`] unless `0 < z < 1`.
pub fn flash_on_table(
    table: &TxyTable,
    temperature: ThermodynamicTemperature,
    z: f64,
    config: &FlashConfig,
) -> Result<FlashResult, FlashError> {
    UnitIntervalOpen::new(z).map_err(FlashError::InvalidComposition)?;

    let mut warnings = table.warnings().to_vec();
    let (point, boundaries) = isobaric::solve(table, temperature, z, config, &mut warnings);

    Ok(finish(z, point, boundaries, warnings))
}

fn finish(
    composition: f64,
    point: PhaseEquilibriumPoint,
    boundaries: Boundaries,
    warnings: Vec<Warning>,
) -> FlashResult {
    log::debug!(
        "flash: z={composition:.3} -> {:?}, x={:.4}, y={:.4}, V/F={:.4}",
        point.phase,
        point.x_liquid,
        point.y_vapor,
        point.vapor_fraction,
    );

    FlashResult {
        composition,
        point,
        boundaries,
        warnings,
    }
}
