//! Physical invariants on numeric inputs, checked once at the boundary.
//!
//! Flow rates and pressures must be positive, mixture compositions must lie
//! strictly between the pure components, and a relative volatility must exceed
//! one. Wrapping a value in [`Constrained<T, C>`] records that the check for
//! marker `C` has passed:
//!
//! - [`StrictlyPositive`]: `x > 0` (feed rate, pressure)
//! - [`UnitIntervalOpen`]: `0 < x < 1` (composition of a true mixture)
//! - [`GreaterThanOne`]: `x > 1` (relative volatility)

mod greater_than_one;
mod strictly_positive;
mod unit_interval;

use std::{cmp::Ordering, marker::PhantomData, ops::Deref};

use thiserror::Error;

pub use greater_than_one::GreaterThanOne;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitIntervalOpen};

/// A check performed by a marker type.
pub trait Constraint<T> {
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing why `value` is rejected.
    fn check(value: &T) -> ConstraintResult<()>;
}

/// Why a value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("value is negative")]
    Negative,
    #[error("value is zero")]
    Zero,
    #[error("value is NaN")]
    NotANumber,
    #[error("value is at or below the lower bound")]
    BelowMinimum,
    #[error("value is at or above the upper bound")]
    AboveMaximum,
}

pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that has passed the check of marker `C`.
///
/// Dereferences to the inner value.
///
/// # Example
///
/// ```
/// use binary_vle::support::constraint::{Constrained, UnitIntervalOpen};
///
/// let x_feed = Constrained::<f64, UnitIntervalOpen>::new(0.5).unwrap();
/// assert_eq!(*x_feed, 0.5);
/// assert!(Constrained::<f64, UnitIntervalOpen>::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] from `C`.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self::new_unchecked(value))
    }

    /// Wraps a value already known to satisfy `C`.
    ///
    /// Only for compile-time presets; the caller upholds the invariant.
    pub(crate) const fn new_unchecked(value: T) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> Deref for Constrained<T, C> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

/// Orders `value` against `bound`, rejecting unordered values such as `NaN`.
fn compare<T: PartialOrd>(value: &T, bound: &T) -> ConstraintResult<Ordering> {
    value
        .partial_cmp(bound)
        .ok_or(ConstraintError::NotANumber)
}
