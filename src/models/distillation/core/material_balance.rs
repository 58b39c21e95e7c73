//! Overall and light-component material balance.

use crate::support::constraint::{StrictlyPositive, UnitIntervalOpen};

use super::{DesignError, DesignSpec};

/// Product rates closing the overall and component balances.
///
/// `D + B = F` and `F·x_f = D·x_d + B·x_b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialBalance {
    /// Feed rate `F`.
    pub feed: f64,

    /// Distillate rate `D`.
    pub distillate: f64,

    /// Bottoms rate `B`.
    pub bottoms: f64,
}

impl MaterialBalance {
    /// Solves the balance for a column specification.
    ///
    /// `D = F·(x_f - x_b) / (x_d - x_b)` and `B = F - D`.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::InvalidFeedRate`] for a non-positive feed rate and
    /// [`DesignError::InvalidComposition`] if any composition lies outside
    /// `(0, 1)` or `x_b < x_f < x_d` does not hold. The ordering check also
    /// rules out `x_d = x_b`.
    pub fn new(spec: &DesignSpec) -> Result<Self, DesignError> {
        let feed = StrictlyPositive::new(spec.feed_rate)
            .map_err(DesignError::InvalidFeedRate)?
            .into_inner();

        for (name, value) in [
            ("feed", spec.x_feed),
            ("distillate", spec.x_distillate),
            ("bottoms", spec.x_bottoms),
        ] {
            UnitIntervalOpen::new(value).map_err(|err| {
                DesignError::composition(format!("{name} composition {value}: {err}"))
            })?;
        }

        if !(spec.x_bottoms < spec.x_feed && spec.x_feed < spec.x_distillate) {
            return Err(DesignError::composition(format!(
                "expected x_bottoms < x_feed < x_distillate, got {} / {} / {}",
                spec.x_bottoms, spec.x_feed, spec.x_distillate
            )));
        }

        let distillate =
            feed * (spec.x_feed - spec.x_bottoms) / (spec.x_distillate - spec.x_bottoms);

        Ok(Self {
            feed,
            distillate,
            bottoms: feed - distillate,
        })
    }

    /// Fraction of the light component in the feed recovered in the distillate.
    #[must_use]
    pub fn light_recovery(&self, spec: &DesignSpec) -> f64 {
        self.distillate * spec.x_distillate / (self.feed * spec.x_feed)
    }

    /// Fraction of the heavy component in the feed recovered in the bottoms.
    #[must_use]
    pub fn heavy_recovery(&self, spec: &DesignSpec) -> f64 {
        self.bottoms * (1.0 - spec.x_bottoms) / (self.feed * (1.0 - spec.x_feed))
    }
}
