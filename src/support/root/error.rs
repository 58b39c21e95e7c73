use thiserror::Error;
use twine_solvers::equation::bisection;

/// Errors that can occur while finding a root.
#[derive(Debug, Error)]
pub enum RootError {
    /// The bisection solver encountered an error, such as a bracket without a
    /// sign change.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Smallest absolute residual encountered during iteration.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
