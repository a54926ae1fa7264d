use std::cmp::Ordering;

use num_traits::One;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly greater than one.
///
/// A ratio of specific heats is constrained this way, since `γ = 1` makes
/// the isentropic exponents `(γ + 1) / (γ - 1)` and `(γ - 1) / γ` degenerate.
///
/// # Examples
///
/// ```
/// use rocket_relations::support::constraint::{AboveOne, Constrained};
///
/// let gamma = AboveOne::new(1.2).unwrap();
/// assert_eq!(gamma.into_inner(), 1.2);
///
/// assert!(Constrained::<_, AboveOne>::new(1.0).is_err());
/// assert!(AboveOne::new(0.9).is_err());
/// assert!(AboveOne::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AboveOne;

impl AboveOne {
    /// Constructs a [`Constrained<T, AboveOne>`] if the value exceeds one.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`] if the value is one or less,
    /// or [`ConstraintError::NotANumber`] if the comparison is undefined.
    pub fn new<T: PartialOrd + One>(value: T) -> Result<Constrained<T, AboveOne>, ConstraintError> {
        Constrained::<T, AboveOne>::new(value)
    }
}

impl<T: PartialOrd + One> Constraint<T> for AboveOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal | Ordering::Less) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Marker type enforcing that a value is one or greater.
///
/// Nozzle area ratios `Ae/A*` are constrained this way: the exit can match
/// the throat but never be smaller.
///
/// # Examples
///
/// ```
/// use rocket_relations::support::constraint::AtLeastOne;
///
/// assert!(AtLeastOne::new(1.0).is_ok());
/// assert!(AtLeastOne::new(10.0).is_ok());
/// assert!(AtLeastOne::new(0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AtLeastOne;

impl AtLeastOne {
    /// Constructs a [`Constrained<T, AtLeastOne>`] if the value is at least one.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`] if the value is less than one,
    /// or [`ConstraintError::NotANumber`] if the comparison is undefined.
    pub fn new<T: PartialOrd + One>(
        value: T,
    ) -> Result<Constrained<T, AtLeastOne>, ConstraintError> {
        Constrained::<T, AtLeastOne>::new(value)
    }
}

impl<T: PartialOrd + One> Constraint<T> for AtLeastOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn above_one_excludes_the_boundary() {
        assert!(AboveOne::new(1.0 + f64::EPSILON).is_ok());
        assert!(AboveOne::new(1.67).is_ok());
        assert_eq!(AboveOne::new(1.0), Err(ConstraintError::BelowMinimum));
        assert_eq!(AboveOne::new(0.9), Err(ConstraintError::BelowMinimum));
        assert_eq!(AboveOne::new(-2.0), Err(ConstraintError::BelowMinimum));
        assert_eq!(AboveOne::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn at_least_one_includes_the_boundary() {
        assert!(AtLeastOne::new(1.0).is_ok());
        assert!(AtLeastOne::new(f64::INFINITY).is_ok());
        assert_eq!(
            AtLeastOne::new(1.0 - f64::EPSILON),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(AtLeastOne::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn integers() {
        assert!(AboveOne::new(2).is_ok());
        assert!(AboveOne::new(1).is_err());
        assert!(AtLeastOne::new(1).is_ok());
        assert!(AtLeastOne::new(0).is_err());
    }
}
