//! Bracketed scalar root finding.
//!
//! Every nonlinear equation in this crate (feed-line pinch, bubble and dew
//! boundaries) is a scalar residual over a known bracket. [`find_root`] adapts
//! such a residual to the [`twine_core`] model/problem pair and solves it with
//! bisection from [`twine_solvers`].
//!
//! Calls are bounded by [`RootConfig::max_iters`]. On failure the caller is
//! expected to substitute its documented analytic fallback.

mod config;
mod error;
mod problem;

pub use config::RootConfig;
pub use error::RootError;

use twine_solvers::equation::bisection;

use problem::{ResidualModel, ZeroResidual};

/// Finds `x` in `bracket` such that `residual(x) = 0`.
///
/// The bracket endpoints may be given in either order, but the residual must
/// change sign across them.
///
/// # Errors
///
/// Returns [`RootError`] if the bracket is invalid or the solver does not
/// converge within the iteration limit.
///
/// # Example
///
/// ```
/// use binary_vle::support::root::{RootConfig, find_root};
///
/// let root = find_root(|x| x * x - 2.0, [0.0, 2.0], &RootConfig::default()).unwrap();
/// assert!((root - 2.0_f64.sqrt()).abs() < 1e-9);
/// ```
pub fn find_root(
    residual: impl Fn(f64) -> f64,
    bracket: [f64; 2],
    config: &RootConfig,
) -> Result<f64, RootError> {
    let model = ResidualModel::new(residual);

    let solution = bisection::solve(
        &model,
        &ZeroResidual,
        bracket,
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(RootError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output.x)
}
