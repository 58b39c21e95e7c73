//! Column design inputs.

use crate::support::input_range::InputRange;

use super::{DesignError, feed_line::VERTICAL_Q_TOLERANCE};

/// Specification of a binary distillation column.
///
/// Compositions are mole fractions of the light component. A physically
/// meaningful column requires `0 < x_bottoms < x_feed < x_distillate < 1`,
/// which [`MaterialBalance::new`](super::MaterialBalance::new) enforces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignSpec {
    /// Feed rate `F`, in any consistent molar flow unit.
    pub feed_rate: f64,

    /// Feed composition `x_f`.
    pub x_feed: f64,

    /// Distillate composition `x_d`.
    pub x_distillate: f64,

    /// Bottoms composition `x_b`.
    pub x_bottoms: f64,

    /// Feed thermal condition `q`, the fraction of feed entering as liquid.
    pub q_factor: f64,

    /// Operating reflux as a multiple of minimum reflux, `R / R_min`.
    pub reflux_factor: f64,
}

impl DesignSpec {
    pub const FEED_RATE: InputRange = InputRange::new(10.0, 1000.0, 1.0);
    pub const X_FEED: InputRange = InputRange::new(0.01, 0.99, 0.01);
    pub const X_DISTILLATE: InputRange = InputRange::new(0.5, 0.99, 0.01);
    pub const X_BOTTOMS: InputRange = InputRange::new(0.01, 0.5, 0.01);
    pub const Q_FACTOR: InputRange = InputRange::new(0.5, 2.0, 0.01);
    pub const REFLUX_FACTOR: InputRange = InputRange::new(1.1, 3.0, 0.05);

    /// Checks the invariants that are not covered by the material balance.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::RefluxFactorTooLow`] if the reflux factor is below
    /// [`Self::REFLUX_FACTOR`]'s minimum (or `NaN`), and
    /// [`DesignError::InvalidQFactor`] if `q` is not finite.
    pub fn validate(&self) -> Result<(), DesignError> {
        // Negated comparison so that NaN is rejected.
        if !(self.reflux_factor >= Self::REFLUX_FACTOR.min) {
            return Err(DesignError::RefluxFactorTooLow {
                reflux_factor: self.reflux_factor,
                minimum: Self::REFLUX_FACTOR.min,
            });
        }
        if !self.q_factor.is_finite() {
            return Err(DesignError::InvalidQFactor(self.q_factor));
        }
        Ok(())
    }

    /// Thermal condition of the feed implied by `q`.
    #[must_use]
    pub fn feed_condition(&self) -> FeedCondition {
        FeedCondition::from_q(self.q_factor)
    }
}

impl Default for DesignSpec {
    /// Acetone-ethanol column with a slightly subcooled feed.
    fn default() -> Self {
        Self {
            feed_rate: 100.0,
            x_feed: 0.5,
            x_distillate: 0.95,
            x_bottoms: 0.05,
            q_factor: 1.167,
            reflux_factor: 1.25,
        }
    }
}

/// Feed thermal condition classified from `q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedCondition {
    /// `q > 1`
    SubcooledLiquid,
    /// `q = 1`
    SaturatedLiquid,
    /// `0 < q < 1`
    PartiallyVaporized,
    /// `q = 0`
    SaturatedVapor,
    /// `q < 0`
    SuperheatedVapor,
}

impl FeedCondition {
    /// Classifies `q`, using the same tolerance around one as the vertical
    /// [`FeedLine`](super::FeedLine).
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_q(q: f64) -> Self {
        if (q - 1.0).abs() < VERTICAL_Q_TOLERANCE {
            Self::SaturatedLiquid
        } else if q > 1.0 {
            Self::SubcooledLiquid
        } else if q > 0.0 {
            Self::PartiallyVaporized
        } else if q == 0.0 {
            Self::SaturatedVapor
        } else {
            Self::SuperheatedVapor
        }
    }
}
