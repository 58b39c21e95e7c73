use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::bar,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::root::{RootConfig, RootError, find_root};

/// Antoine vapor-pressure coefficients.
///
/// Uses the form `log10(P / bar) = A - B / (T / °C + C)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntoineCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl AntoineCoefficients {
    /// Saturation pressure at temperature `t`.
    #[must_use]
    pub fn saturation_pressure(&self, t: ThermodynamicTemperature) -> Pressure {
        Pressure::new::<bar>(self.saturation_pressure_bar(t.get::<degree_celsius>()))
    }

    /// Saturation (boiling) temperature at pressure `p`.
    ///
    /// This is the closed-form inverse of [`saturation_pressure`](Self::saturation_pressure).
    #[must_use]
    pub fn saturation_temperature(&self, p: Pressure) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(
            self.saturation_temperature_celsius(p.get::<bar>()),
        )
    }

    pub(crate) fn saturation_pressure_bar(&self, t_celsius: f64) -> f64 {
        10_f64.powf(self.a - self.b / (t_celsius + self.c))
    }

    pub(crate) fn saturation_temperature_celsius(&self, p_bar: f64) -> f64 {
        self.b / (self.a - p_bar.log10()) - self.c
    }
}

/// An ideal binary mixture of two Antoine components.
///
/// Component `light` is the more volatile one; compositions are its mole
/// fraction.
///
/// # Example
///
/// ```
/// use binary_vle::support::equilibrium::AntoinePair;
/// use uom::si::{f64::ThermodynamicTemperature, pressure::bar, thermodynamic_temperature::degree_celsius};
///
/// let pair = AntoinePair::HEXANE_HEPTANE;
/// let t = ThermodynamicTemperature::new::<degree_celsius>(115.0);
///
/// let bubble = pair.bubble_pressure(0.45, t).get::<bar>();
/// let dew = pair.dew_pressure(0.45, t).get::<bar>();
/// assert!(dew < bubble);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntoinePair {
    pub light: AntoineCoefficients,
    pub heavy: AntoineCoefficients,
}

impl AntoinePair {
    /// n-Hexane (light) and n-heptane (heavy).
    pub const HEXANE_HEPTANE: Self = Self {
        light: AntoineCoefficients {
            a: 4.002_66,
            b: 1171.53,
            c: 224.216,
        },
        heavy: AntoineCoefficients {
            a: 4.048_67,
            b: 1355.126,
            c: 209.367,
        },
    };

    /// Bubble-point pressure of liquid `x` at temperature `t`.
    ///
    /// `P = x·Psat_light(T) + (1 - x)·Psat_heavy(T)`
    #[must_use]
    pub fn bubble_pressure(&self, x: f64, t: ThermodynamicTemperature) -> Pressure {
        Pressure::new::<bar>(self.bubble_pressure_bar(x, t.get::<degree_celsius>()))
    }

    /// Dew-point pressure of vapor `y` at temperature `t`.
    ///
    /// `P = 1 / (y/Psat_light(T) + (1 - y)/Psat_heavy(T))`
    #[must_use]
    pub fn dew_pressure(&self, y: f64, t: ThermodynamicTemperature) -> Pressure {
        Pressure::new::<bar>(self.dew_pressure_bar(y, t.get::<degree_celsius>()))
    }

    /// Bubble-point temperature of liquid `x` at pressure `p`.
    ///
    /// # Errors
    ///
    /// Returns [`RootError`] if the root find does not converge.
    pub fn bubble_temperature(
        &self,
        x: f64,
        p: Pressure,
        config: &RootConfig,
    ) -> Result<ThermodynamicTemperature, RootError> {
        let p_bar = p.get::<bar>();
        let t = find_root(
            |t| self.bubble_pressure_bar(x, t) - p_bar,
            self.boiling_bracket(p_bar),
            config,
        )?;
        Ok(ThermodynamicTemperature::new::<degree_celsius>(t))
    }

    /// Dew-point temperature of vapor `y` at pressure `p`.
    ///
    /// # Errors
    ///
    /// Returns [`RootError`] if the root find does not converge.
    pub fn dew_temperature(
        &self,
        y: f64,
        p: Pressure,
        config: &RootConfig,
    ) -> Result<ThermodynamicTemperature, RootError> {
        let p_bar = p.get::<bar>();
        let t = find_root(
            |t| self.dew_pressure_bar(y, t) - p_bar,
            self.boiling_bracket(p_bar),
            config,
        )?;
        Ok(ThermodynamicTemperature::new::<degree_celsius>(t))
    }

    /// Raoult's-law vapor composition over liquid `x` at `t` and total pressure `p`.
    #[must_use]
    pub fn vapor_composition(&self, x: f64, t: ThermodynamicTemperature, p: Pressure) -> f64 {
        x * self.light.saturation_pressure_bar(t.get::<degree_celsius>()) / p.get::<bar>()
    }

    /// Liquid composition whose bubble pressure at `t` equals `p`, in closed form.
    #[must_use]
    pub fn raoult_liquid_composition(&self, t: ThermodynamicTemperature, p: Pressure) -> f64 {
        let t = t.get::<degree_celsius>();
        let p_light = self.light.saturation_pressure_bar(t);
        let p_heavy = self.heavy.saturation_pressure_bar(t);
        (p.get::<bar>() - p_heavy) / (p_light - p_heavy)
    }

    pub(crate) fn bubble_pressure_bar(&self, x: f64, t_celsius: f64) -> f64 {
        x * self.light.saturation_pressure_bar(t_celsius)
            + (1.0 - x) * self.heavy.saturation_pressure_bar(t_celsius)
    }

    pub(crate) fn dew_pressure_bar(&self, y: f64, t_celsius: f64) -> f64 {
        1.0 / (y / self.light.saturation_pressure_bar(t_celsius)
            + (1.0 - y) / self.heavy.saturation_pressure_bar(t_celsius))
    }

    /// Pure-component boiling points at `p_bar`, which bracket every mixture
    /// bubble and dew temperature.
    fn boiling_bracket(&self, p_bar: f64) -> [f64; 2] {
        [
            self.light.saturation_temperature_celsius(p_bar),
            self.heavy.saturation_temperature_celsius(p_bar),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    #[test]
    fn saturation_temperature_inverts_pressure() {
        let hexane = AntoinePair::HEXANE_HEPTANE.light;
        let p = hexane.saturation_pressure(celsius(80.0));
        assert_relative_eq!(
            hexane.saturation_temperature(p).get::<degree_celsius>(),
            80.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn pure_component_boiling_points_at_one_bar() {
        let pair = AntoinePair::HEXANE_HEPTANE;
        let one_bar = Pressure::new::<bar>(1.0);
        assert_relative_eq!(
            pair.light.saturation_temperature(one_bar).get::<degree_celsius>(),
            68.471_862,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            pair.heavy.saturation_temperature(one_bar).get::<degree_celsius>(),
            125.341_929,
            epsilon = 1e-5
        );
    }

    #[test]
    fn bubble_and_dew_pressure_at_115_celsius() {
        let pair = AntoinePair::HEXANE_HEPTANE;
        let t = celsius(115.0);
        assert_relative_eq!(pair.bubble_pressure(0.45, t).get::<bar>(), 2.001_641, epsilon = 1e-5);
        assert_relative_eq!(pair.dew_pressure(0.45, t).get::<bar>(), 1.152_761, epsilon = 1e-5);
    }

    #[test]
    fn boundaries_meet_at_pure_components() {
        let pair = AntoinePair::HEXANE_HEPTANE;
        let t = celsius(100.0);
        for x in [0.0, 1.0] {
            assert_relative_eq!(
                pair.bubble_pressure(x, t).get::<bar>(),
                pair.dew_pressure(x, t).get::<bar>(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn bubble_and_dew_temperatures_at_one_bar() {
        let pair = AntoinePair::HEXANE_HEPTANE;
        let one_bar = Pressure::new::<bar>(1.0);
        let config = RootConfig::default();

        let t_bubble = pair.bubble_temperature(0.45, one_bar, &config).unwrap();
        let t_dew = pair.dew_temperature(0.45, one_bar, &config).unwrap();

        assert_relative_eq!(t_bubble.get::<degree_celsius>(), 89.000_959, epsilon = 1e-5);
        assert_relative_eq!(t_dew.get::<degree_celsius>(), 110.130_524, epsilon = 1e-5);
        assert_relative_eq!(
            pair.bubble_pressure(0.45, t_bubble).get::<bar>(),
            1.0,
            epsilon = 1e-8
        );
    }

    #[test]
    fn raoult_liquid_composition_matches_bubble_pressure() {
        let pair = AntoinePair::HEXANE_HEPTANE;
        let t = celsius(115.0);
        let p = Pressure::new::<bar>(1.5);

        let x = pair.raoult_liquid_composition(t, p);
        assert_relative_eq!(x, 0.270_667, epsilon = 1e-5);
        assert_relative_eq!(pair.vapor_composition(x, t, p), 0.638_799, epsilon = 1e-5);
    }
}
