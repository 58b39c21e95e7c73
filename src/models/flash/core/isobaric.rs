//! T-x-y flash at fixed pressure, solved on a [`TxyTable`].

use uom::si::f64::ThermodynamicTemperature;

use crate::support::fallback::Warning;

use super::{Boundaries, FlashConfig, PhaseEquilibriumPoint, TxyTable, lever};

/// Classifies `z` at temperature `t` on `table` and splits it if two-phase.
pub(super) fn solve(
    table: &TxyTable,
    t: ThermodynamicTemperature,
    z: f64,
    config: &FlashConfig,
    warnings: &mut Vec<Warning>,
) -> (PhaseEquilibriumPoint, Boundaries) {
    let bubble = table.bubble_temperature(z);
    let dew = table.dew_temperature(z);
    let boundaries = Boundaries::Temperature { bubble, dew };

    if t > dew {
        return (PhaseEquilibriumPoint::vapor(z), boundaries);
    }
    if t < bubble {
        return (PhaseEquilibriumPoint::liquid(z), boundaries);
    }

    let x = table.liquid_composition(t);
    let y = table.vapor_composition(t);

    (lever::split(z, x, y, &config.fallbacks, warnings), boundaries)
}
