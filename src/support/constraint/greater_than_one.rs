use std::cmp::Ordering;

use num_traits::One;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult, compare};

/// Marker for `x > 1`.
///
/// ```
/// use binary_vle::support::constraint::GreaterThanOne;
///
/// assert!(GreaterThanOne::new(2.4).is_ok());
/// assert!(GreaterThanOne::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreaterThanOne;

impl GreaterThanOne {
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`] for values of one or less and
    /// [`ConstraintError::NotANumber`] for `NaN`.
    pub fn new<T: PartialOrd + One>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + One> Constraint<T> for GreaterThanOne {
    fn check(value: &T) -> ConstraintResult<()> {
        match compare(value, &T::one())? {
            Ordering::Greater => Ok(()),
            Ordering::Equal | Ordering::Less => Err(ConstraintError::BelowMinimum),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volatilities() {
        assert!(GreaterThanOne::new(1.0001).is_ok());
        assert_eq!(GreaterThanOne::new(1.0), Err(ConstraintError::BelowMinimum));
        assert_eq!(GreaterThanOne::new(0.3), Err(ConstraintError::BelowMinimum));
        assert_eq!(
            GreaterThanOne::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
