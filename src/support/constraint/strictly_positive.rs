use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult, compare};

/// Marker for `x > 0`.
///
/// Generic over [`Zero`], so it also applies to `uom` quantities such as
/// [`Pressure`](uom::si::f64::Pressure).
///
/// ```
/// use binary_vle::support::constraint::{ConstraintError, StrictlyPositive};
///
/// assert_eq!(*StrictlyPositive::new(100.0).unwrap(), 100.0);
/// assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// # Errors
    ///
    /// Returns [`ConstraintError::Zero`], [`ConstraintError::Negative`], or
    /// [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> ConstraintResult<()> {
        match compare(value, &T::zero())? {
            Ordering::Greater => Ok(()),
            Ordering::Equal => Err(ConstraintError::Zero),
            Ordering::Less => Err(ConstraintError::Negative),
        }
    }
}
