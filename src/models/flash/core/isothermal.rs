//! P-x-y flash at fixed temperature.

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::bar,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    equilibrium::AntoinePair,
    fallback::Warning,
    root::find_root,
};

use super::{Boundaries, FlashConfig, PhaseEquilibriumPoint, lever};

/// Classifies `z` at `(t, p)` and splits it if two-phase.
///
/// Both phase compositions are found by bisection: the liquid on `[0, z]`
/// from the bubble-pressure curve, the vapor on `[z, 1]` from the dew-pressure
/// curve. On non-convergence the closed-form Raoult solution is used instead.
pub(super) fn solve(
    pair: &AntoinePair,
    t: ThermodynamicTemperature,
    p: Pressure,
    z: f64,
    config: &FlashConfig,
    warnings: &mut Vec<Warning>,
) -> (PhaseEquilibriumPoint, Boundaries) {
    let bubble = pair.bubble_pressure(z, t);
    let dew = pair.dew_pressure(z, t);
    let boundaries = Boundaries::Pressure { bubble, dew };

    if p < dew {
        return (PhaseEquilibriumPoint::vapor(z), boundaries);
    }
    if p > bubble {
        return (PhaseEquilibriumPoint::liquid(z), boundaries);
    }

    let t_c = t.get::<degree_celsius>();
    let p_bar = p.get::<bar>();

    let x = find_root(
        |x| pair.bubble_pressure_bar(x, t_c) - p_bar,
        [0.0, z],
        &config.root,
    )
    .unwrap_or_else(|err| {
        let fallback = pair.raoult_liquid_composition(t, p);
        Warning::NonConvergence {
            context: "liquid branch",
            detail: err.to_string(),
            fallback,
        }
        .report(warnings);
        fallback
    });

    let y = find_root(
        |y| pair.dew_pressure_bar(y, t_c) - p_bar,
        [z, 1.0],
        &config.root,
    )
    .unwrap_or_else(|err| {
        let fallback = pair.vapor_composition(pair.raoult_liquid_composition(t, p), t, p);
        Warning::NonConvergence {
            context: "vapor branch",
            detail: err.to_string(),
            fallback,
        }
        .report(warnings);
        fallback
    });

    (lever::split(z, x, y, &config.fallbacks, warnings), boundaries)
}
