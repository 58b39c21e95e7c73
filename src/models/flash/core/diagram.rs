//! Geometric primitives for drawing a P-x-y or T-x-y phase diagram.

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::bar,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    equilibrium::AntoinePair,
    geometry::{Point, Segment, sample_unit_interval},
};

use super::{FlashResult, Phase, TxySample, TxyTable};

/// Boundary curves and the flash point, with composition on the x axis.
///
/// The y axis is pressure in bar for an isothermal diagram and temperature in
/// °C for an isobaric one.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseDiagram {
    pub bubble: Vec<Point>,
    pub dew: Vec<Point>,

    /// Overall composition at the probe value.
    pub operating_point: Point,

    /// Liquid-to-vapor tie line, present only when two-phase.
    pub tie_line: Option<Segment>,
}

impl PhaseDiagram {
    /// P-x-y diagram at `temperature`, sampled at `intervals + 1` points.
    #[must_use]
    pub fn isothermal(
        pair: &AntoinePair,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        result: &FlashResult,
        intervals: usize,
    ) -> Self {
        Self {
            bubble: sample_unit_interval(intervals, |x| {
                pair.bubble_pressure(x, temperature).get::<bar>()
            }),
            dew: sample_unit_interval(intervals, |y| {
                pair.dew_pressure(y, temperature).get::<bar>()
            }),
            ..Self::probe(result, pressure.get::<bar>())
        }
    }

    /// T-x-y diagram from the samples of `table`.
    #[must_use]
    pub fn isobaric(
        table: &TxyTable,
        temperature: ThermodynamicTemperature,
        result: &FlashResult,
    ) -> Self {
        let curve = |t: fn(&TxySample) -> ThermodynamicTemperature| -> Vec<Point> {
            table
                .samples()
                .iter()
                .map(|s| Point::new(s.composition, t(s).get::<degree_celsius>()))
                .collect()
        };

        Self {
            bubble: curve(|s| s.bubble_temperature),
            dew: curve(|s| s.dew_temperature),
            ..Self::probe(result, temperature.get::<degree_celsius>())
        }
    }

    fn probe(result: &FlashResult, level: f64) -> Self {
        let point = &result.point;
        let tie_line = (point.phase == Phase::TwoPhase).then(|| {
            Segment::new(
                Point::new(point.x_liquid, level),
                Point::new(point.y_vapor, level),
            )
        });

        Self {
            bubble: Vec::new(),
            dew: Vec::new(),
            operating_point: Point::new(result.composition, level),
            tie_line,
        }
    }
}
