//! Tabulated T-x-y curves at a fixed pressure.

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::bar,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::StrictlyPositive,
    equilibrium::AntoinePair,
    fallback::Warning,
    root::RootConfig,
};

use super::FlashError;

/// One grid point of a [`TxyTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TxySample {
    /// Grid composition, used as `x` for the bubble curve and `y` for the dew curve.
    pub composition: f64,

    /// Bubble temperature of a liquid at `composition`.
    pub bubble_temperature: ThermodynamicTemperature,

    /// Dew temperature of a vapor at `composition`.
    pub dew_temperature: ThermodynamicTemperature,

    /// Vapor in equilibrium with a liquid at `composition`.
    pub vapor_composition: f64,
}

/// Bubble and dew temperatures sampled on a uniform composition grid.
///
/// The endpoints are the pure-component boiling points. Lookups interpolate
/// linearly between samples, so accuracy is bounded by the grid spacing.
///
/// # Example
///
/// ```
/// use binary_vle::models::flash::TxyTable;
/// use binary_vle::support::{equilibrium::AntoinePair, root::RootConfig};
/// use uom::si::{f64::Pressure, pressure::bar, thermodynamic_temperature::degree_celsius};
///
/// let table = TxyTable::build(
///     &AntoinePair::HEXANE_HEPTANE,
///     Pressure::new::<bar>(1.0),
///     100,
///     &RootConfig::default(),
/// )
/// .unwrap();
///
/// let t_bubble = table.bubble_temperature(0.45).get::<degree_celsius>();
/// assert!((t_bubble - 89.0).abs() < 0.05);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TxyTable {
    pressure: Pressure,
    samples: Vec<TxySample>,
    warnings: Vec<Warning>,
}

impl TxyTable {
    /// Samples `pair` at `intervals + 1` compositions at `pressure`.
    ///
    /// An interior sample whose root find fails falls back to a linear blend
    /// of the boiling points and is listed in [`warnings`](Self::warnings).
    /// A sample with both boundaries blended has equal bubble and dew
    /// temperatures, so the table has no two-phase region there.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::InvalidPressure`] for a non-positive pressure.
    pub fn build(
        pair: &AntoinePair,
        pressure: Pressure,
        intervals: usize,
        root: &RootConfig,
    ) -> Result<Self, FlashError> {
        StrictlyPositive::new(pressure).map_err(FlashError::InvalidPressure)?;

        let intervals = intervals.max(1);
        let t_light = pair.light.saturation_temperature(pressure);
        let t_heavy = pair.heavy.saturation_temperature(pressure);

        let blend = |c: f64| {
            ThermodynamicTemperature::new::<degree_celsius>(
                c * t_light.get::<degree_celsius>() + (1.0 - c) * t_heavy.get::<degree_celsius>(),
            )
        };

        let mut warnings = Vec::new();
        let mut samples = Vec::with_capacity(intervals + 1);

        for i in 0..=intervals {
            #[allow(clippy::cast_precision_loss)]
            let c = i as f64 / intervals as f64;

            let sample = if i == 0 {
                TxySample::pure(0.0, t_heavy)
            } else if i == intervals {
                TxySample::pure(1.0, t_light)
            } else {
                let bubble = pair
                    .bubble_temperature(c, pressure, root)
                    .unwrap_or_else(|err| {
                        let fallback = blend(c);
                        Warning::NonConvergence {
                            context: "table bubble temperature",
                            detail: err.to_string(),
                            fallback: fallback.get::<degree_celsius>(),
                        }
                        .report(&mut warnings);
                        fallback
                    });
                let dew = pair.dew_temperature(c, pressure, root).unwrap_or_else(|err| {
                    let fallback = blend(c);
                    Warning::NonConvergence {
                        context: "table dew temperature",
                        detail: err.to_string(),
                        fallback: fallback.get::<degree_celsius>(),
                    }
                    .report(&mut warnings);
                    fallback
                });

                TxySample {
                    composition: c,
                    bubble_temperature: bubble,
                    dew_temperature: dew,
                    vapor_composition: pair.vapor_composition(c, bubble, pressure),
                }
            };
            samples.push(sample);
        }

        log::debug!(
            "built T-x-y table at {:.3} bar with {} samples",
            pressure.get::<bar>(),
            samples.len()
        );

        Ok(Self {
            pressure,
            samples,
            warnings,
        })
    }

    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    #[must_use]
    pub fn samples(&self) -> &[TxySample] {
        &self.samples
    }

    /// Fallbacks applied while building the table.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Interpolated bubble temperature of liquid `x`.
    #[must_use]
    pub fn bubble_temperature(&self, x: f64) -> ThermodynamicTemperature {
        celsius(self.interpolate(x, bubble_celsius))
    }

    /// Interpolated dew temperature of vapor `y`.
    #[must_use]
    pub fn dew_temperature(&self, y: f64) -> ThermodynamicTemperature {
        celsius(self.interpolate(y, dew_celsius))
    }

    /// Liquid composition whose interpolated bubble temperature is `t`.
    ///
    /// Temperatures outside the boiling range map to the pure components.
    #[must_use]
    pub fn liquid_composition(&self, t: ThermodynamicTemperature) -> f64 {
        self.invert(t.get::<degree_celsius>(), bubble_celsius)
    }

    /// Vapor composition whose interpolated dew temperature is `t`.
    #[must_use]
    pub fn vapor_composition(&self, t: ThermodynamicTemperature) -> f64 {
        self.invert(t.get::<degree_celsius>(), dew_celsius)
    }

    /// The grid segment ending at `split`, kept inside the table.
    fn segment(&self, split: usize) -> (&TxySample, &TxySample) {
        let i = split.clamp(1, self.samples.len() - 1);
        (&self.samples[i - 1], &self.samples[i])
    }

    fn interpolate(&self, c: f64, temp: fn(&TxySample) -> f64) -> f64 {
        let c = c.clamp(0.0, 1.0);
        let (lo, hi) = self.segment(self.samples.partition_point(|s| s.composition < c));

        let f = (c - lo.composition) / (hi.composition - lo.composition);
        temp(lo) + f * (temp(hi) - temp(lo))
    }

    /// Temperatures decrease with composition on both curves.
    fn invert(&self, t: f64, temp: fn(&TxySample) -> f64) -> f64 {
        let (lo, hi) = self.segment(self.samples.partition_point(|s| temp(s) > t));

        let drop = temp(lo) - temp(hi);
        if drop <= 0.0 {
            return lo.composition;
        }

        let f = ((temp(lo) - t) / drop).clamp(0.0, 1.0);
        lo.composition + f * (hi.composition - lo.composition)
    }
}

impl TxySample {
    fn pure(composition: f64, boiling_point: ThermodynamicTemperature) -> Self {
        Self {
            composition,
            bubble_temperature: boiling_point,
            dew_temperature: boiling_point,
            vapor_composition: composition,
        }
    }
}

fn bubble_celsius(sample: &TxySample) -> f64 {
    sample.bubble_temperature.get::<degree_celsius>()
}

fn dew_celsius(sample: &TxySample) -> f64 {
    sample.dew_temperature.get::<degree_celsius>()
}

fn celsius(t: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn table_at(p: f64) -> TxyTable {
        TxyTable::build(
            &AntoinePair::HEXANE_HEPTANE,
            Pressure::new::<bar>(p),
            100,
            &RootConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn endpoints_are_boiling_points() {
        let table = table_at(1.0);
        let samples = table.samples();

        assert_eq!(samples.len(), 101);
        assert_relative_eq!(
            samples[0].bubble_temperature.get::<degree_celsius>(),
            125.341_929,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            samples[100].dew_temperature.get::<degree_celsius>(),
            68.471_862,
            epsilon = 1e-5
        );
        assert!(table.warnings().is_empty());
    }

    #[test]
    fn dew_curve_lies_above_bubble_curve() {
        for sample in &table_at(1.0).samples()[1..100] {
            assert!(sample.dew_temperature > sample.bubble_temperature);
            assert!(sample.vapor_composition > sample.composition);
        }
    }

    #[test]
    fn interpolation_matches_root_finding() {
        let table = table_at(1.0);
        assert_relative_eq!(
            table.bubble_temperature(0.45).get::<degree_celsius>(),
            89.000_959,
            epsilon = 1e-3
        );
        assert_relative_eq!(
            table.dew_temperature(0.45).get::<degree_celsius>(),
            110.130_524,
            epsilon = 1e-3
        );
    }

    #[test]
    fn inversion_recovers_compositions() {
        let table = table_at(1.0);
        let t = celsius(100.0);

        assert_relative_eq!(table.liquid_composition(t), 0.269_114, epsilon = 1e-4);
        assert_relative_eq!(table.vapor_composition(t), 0.659_434, epsilon = 1e-4);

        let x = table.liquid_composition(table.bubble_temperature(0.37));
        assert_relative_eq!(x, 0.37, epsilon = 1e-9);
    }

    #[test]
    fn inversion_clamps_outside_boiling_range() {
        let table = table_at(1.0);
        assert_relative_eq!(table.liquid_composition(celsius(150.0)), 0.0);
        assert_relative_eq!(table.liquid_composition(celsius(40.0)), 1.0);
    }

    #[test]
    fn rejects_non_positive_pressure() {
        let result = TxyTable::build(
            &AntoinePair::HEXANE_HEPTANE,
            Pressure::new::<bar>(-1.0),
            100,
            &RootConfig::default(),
        );
        assert!(matches!(result, Err(FlashError::InvalidPressure(_))));
    }

    #[test]
    fn unconverged_samples_blend_boiling_points() {
        let root = RootConfig {
            max_iters: 1,
            ..RootConfig::default()
        };
        let table = TxyTable::build(
            &AntoinePair::HEXANE_HEPTANE,
            Pressure::new::<bar>(1.0),
            10,
            &root,
        )
        .unwrap();

        // Bubble and dew for each of the nine interior samples.
        assert_eq!(table.warnings().len(), 18);
        assert!(table.warnings().iter().all(|w| matches!(
            w,
            Warning::NonConvergence {
                context: "table bubble temperature" | "table dew temperature",
                ..
            }
        )));

        let samples = table.samples();
        assert_relative_eq!(
            samples[0].bubble_temperature.get::<degree_celsius>(),
            125.341_929,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            samples[10].bubble_temperature.get::<degree_celsius>(),
            68.471_862,
            epsilon = 1e-5
        );

        let midpoint = 0.5 * (68.471_862 + 125.341_929);
        assert_relative_eq!(
            samples[5].bubble_temperature.get::<degree_celsius>(),
            midpoint,
            epsilon = 1e-5
        );
        for sample in &samples[1..10] {
            assert_relative_eq!(
                sample.bubble_temperature.get::<degree_celsius>(),
                sample.dew_temperature.get::<degree_celsius>(),
                epsilon = 1e-9
            );
        }
    }
}
