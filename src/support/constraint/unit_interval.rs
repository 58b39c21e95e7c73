use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult, compare};

/// The bounds `0` and `1` of a mole fraction.
pub trait UnitBounds: PartialOrd {
    const ZERO: Self;
    const ONE: Self;
}

impl UnitBounds for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}

/// Marker for `0 < x < 1`.
///
/// Compositions of a true binary mixture; the pure components are rejected.
///
/// ```
/// use binary_vle::support::constraint::UnitIntervalOpen;
///
/// assert_eq!(*UnitIntervalOpen::new(0.45).unwrap(), 0.45);
/// assert!(UnitIntervalOpen::new(0.0).is_err());
/// assert!(UnitIntervalOpen::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitIntervalOpen;

impl UnitIntervalOpen {
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`] for `x <= 0`,
    /// [`ConstraintError::AboveMaximum`] for `x >= 1`, and
    /// [`ConstraintError::NotANumber`] for `NaN`.
    pub fn new<T: UnitBounds>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalOpen {
    fn check(value: &T) -> ConstraintResult<()> {
        if compare(value, &T::ZERO)? != Ordering::Greater {
            return Err(ConstraintError::BelowMinimum);
        }
        if compare(value, &T::ONE)? != Ordering::Less {
            return Err(ConstraintError::AboveMaximum);
        }
        Ok(())
    }
}
