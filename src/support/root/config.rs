use twine_solvers::equation::bisection;

/// Solver configuration for bracketed root finding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the search variable.
    pub x_abs_tol: f64,

    /// Absolute tolerance on the residual.
    pub residual_tol: f64,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-10,
            residual_tol: 1e-9,
        }
    }
}

impl RootConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.x_abs_tol,
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }
}
