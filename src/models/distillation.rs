//! McCabe-Thiele distillation design.
//!
//! This module provides a [`twine_core::Model`] implementation for counting the
//! theoretical stages of a binary column, and a memoized wrapper for callers
//! that re-evaluate on every input change.
//!
//! # Example
//!
//! ```
//! use binary_vle::models::distillation::{DesignSpec, McCabeThiele};
//! use binary_vle::support::equilibrium::RelativeVolatility;
//! use twine_core::Model;
//!
//! let model = McCabeThiele::new(RelativeVolatility::ACETONE_ETHANOL);
//! let result = model.call(&DesignSpec::default()).unwrap();
//!
//! assert_eq!(result.total_stages(), 15);
//! assert_eq!(result.feed_stage, 7);
//! ```

mod core;

pub use self::core::{
    DesignConfig, DesignError, DesignResult, DesignSpec, FeedCondition, FeedLine, InternalFlows,
    MaterialBalance, McCabeThieleDiagram, MinimumReflux, OperatingLine, OperatingLines, Section,
    Stage, Termination, design,
};

use twine_core::Model;

use crate::support::{equilibrium::EquilibriumCurve, memo::Memo};

/// McCabe-Thiele stage counting against an equilibrium curve.
#[derive(Debug, Clone)]
pub struct McCabeThiele<C> {
    curve: C,
    config: DesignConfig,
}

impl<C: EquilibriumCurve> McCabeThiele<C> {
    /// Creates a model with the default [`DesignConfig`].
    pub fn new(curve: C) -> Self {
        Self::with_config(curve, DesignConfig::default())
    }

    pub fn with_config(curve: C, config: DesignConfig) -> Self {
        Self { curve, config }
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }

    pub fn config(&self) -> &DesignConfig {
        &self.config
    }

    /// Geometric primitives for drawing `result`.
    pub fn diagram(&self, spec: &DesignSpec, result: &DesignResult) -> McCabeThieleDiagram {
        McCabeThieleDiagram::new(spec, result, &self.curve, 100)
    }
}

impl<C: EquilibriumCurve> Model for McCabeThiele<C> {
    type Input = DesignSpec;
    type Output = DesignResult;
    type Error = DesignError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        design(input, &self.curve, &self.config)
    }
}

/// A [`McCabeThiele`] model that keeps the result for the current spec.
///
/// Recomputes only when called with a spec that differs from the previous one.
#[derive(Debug, Clone)]
pub struct CachedDesign<C> {
    model: McCabeThiele<C>,
    memo: Memo<DesignSpec, Result<DesignResult, DesignError>>,
}

impl<C: EquilibriumCurve> CachedDesign<C> {
    pub fn new(model: McCabeThiele<C>) -> Self {
        Self {
            model,
            memo: Memo::new(),
        }
    }

    /// Returns the design for `spec`, reusing the cached result if `spec` is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns the [`DesignError`] for an invalid `spec`.
    pub fn design(&mut self, spec: &DesignSpec) -> Result<&DesignResult, &DesignError> {
        let model = &self.model;
        self.memo
            .get_or_compute(spec, |spec| model.call(spec))
            .as_ref()
    }

    pub fn model(&self) -> &McCabeThiele<C> {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::equilibrium::RelativeVolatility;

    #[test]
    fn cached_design_matches_direct_call() {
        let model = McCabeThiele::new(RelativeVolatility::ACETONE_ETHANOL);
        let expected = model.call(&DesignSpec::default()).unwrap();

        let mut cached = CachedDesign::new(model);
        assert_eq!(cached.design(&DesignSpec::default()).unwrap(), &expected);
        assert_eq!(cached.design(&DesignSpec::default()).unwrap(), &expected);

        let changed = DesignSpec {
            reflux_factor: 2.0,
            ..DesignSpec::default()
        };
        assert!(cached.design(&changed).unwrap().total_stages() < expected.total_stages());
    }

    #[test]
    fn cached_design_keeps_errors() {
        let mut cached = CachedDesign::new(McCabeThiele::new(RelativeVolatility::ACETONE_ETHANOL));
        let bad = DesignSpec {
            x_distillate: 0.3,
            ..DesignSpec::default()
        };
        assert!(matches!(
            cached.design(&bad),
            Err(DesignError::InvalidComposition { .. })
        ));
    }

    #[test]
    fn diagram_uses_model_curve() {
        let model = McCabeThiele::new(RelativeVolatility::ACETONE_ETHANOL);
        let spec = DesignSpec::default();
        let result = model.call(&spec).unwrap();
        let diagram = model.diagram(&spec, &result);
        assert_eq!(diagram.equilibrium.len(), 101);
    }
}
