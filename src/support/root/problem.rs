//! Problem formulation for scalar root finding.

use std::convert::Infallible;

use twine_core::EquationProblem;
use twine_core::Model;

/// A single residual evaluation.
#[derive(Debug, Clone, Copy)]
pub(super) struct Evaluation {
    pub(super) x: f64,
    pub(super) residual: f64,
}

/// Model adapter wrapping a scalar residual function.
pub(super) struct ResidualModel<F> {
    residual: F,
}

impl<F: Fn(f64) -> f64> ResidualModel<F> {
    pub(super) fn new(residual: F) -> Self {
        Self { residual }
    }
}

impl<F: Fn(f64) -> f64> Model for ResidualModel<F> {
    type Input = f64;
    type Output = Evaluation;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(Evaluation {
            x: *input,
            residual: (self.residual)(*input),
        })
    }
}

/// Equation problem driving the model residual to zero.
pub(super) struct ZeroResidual;

impl EquationProblem<1> for ZeroResidual {
    type Input = f64;
    type Output = Evaluation;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.residual])
    }
}
