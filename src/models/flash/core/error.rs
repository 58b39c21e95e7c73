use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that reject a flash condition.
///
/// Root-finding trouble is never an error; see
/// [`Warning`](crate::support::fallback::Warning).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlashError {
    /// The overall composition is not in `(0, 1)`.
    #[error("invalid overall composition")]
    InvalidComposition(#[source] ConstraintError),

    /// The pressure is not strictly positive.
    #[error("invalid pressure")]
    InvalidPressure(#[source] ConstraintError),
}
