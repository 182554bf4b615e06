//! AND combinator - logical conjunction of validators
//!
//! This module provides the binary [`And`] combinator and the N-ary
//! [`AndAll`]. Both evaluate every child, in order, even after a rejection,
//! so the resulting error lists every reason the value was rejected.
//!
//! # Examples
//!
//! ```rust
//! use sentinel_validator::combinators::and;
//! use sentinel_validator::foundation::Validate;
//! use sentinel_validator::validators::{greater, less};
//!
//! let validator = and(greater(0), less(10));
//! assert!(validator.validate(&5).is_ok());
//!
//! let err = validator.validate(&15).unwrap_err();
//! assert_eq!(err.code, "and");
//! assert_eq!(err.nested.len(), 1);
//! assert_eq!(err.nested[0].code, "less");
//! ```

use crate::combinators::error::CombinatorError;
use crate::foundation::{Validate, ValidationError, ValidationErrors};

/// Combines two validators with logical AND.
///
/// Both validators always run. On rejection the error has code `and` and
/// holds the failing children (one or two) in left-to-right order.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut errors = ValidationErrors::with_capacity(2);
        errors.record(self.left.validate(input));
        errors.record(self.right.validate(input));
        conjunction(errors, 2)
    }
}

impl<L, R> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    /// Chains another validator with AND logic.
    ///
    /// The result nests: `a.and(b).and(c)` reports the failures of `a.and(b)`
    /// as one child. Use [`all_of!`](crate::all_of) for a flat error.
    pub fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = L::Input>,
    {
        And::new(self, other)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Creates an [`AndAll`] combinator from a vector of validators.
///
/// # Panics
///
/// Panics if fewer than two validators are given. Composing zero or one
/// validators is a programming error and is rejected here, never at
/// validation time.
///
/// # Examples
///
/// ```rust
/// use sentinel_validator::combinators::and_all;
/// use sentinel_validator::foundation::Validate;
/// use sentinel_validator::validators::not_equal;
///
/// let validator = and_all(vec![not_equal(1), not_equal(2), not_equal(3)]);
/// assert!(validator.validate(&4).is_ok());
/// assert!(validator.validate(&2).is_err());
/// ```
#[must_use]
pub fn and_all<V>(validators: Vec<V>) -> AndAll<V>
where
    V: Validate,
{
    AndAll::new(validators)
}

/// Combines two or more validators with logical AND.
///
/// Every validator runs, in order. On rejection the error has code `and` and
/// holds only the failing children, in argument order.
///
/// # Type Parameters
///
/// * `V` - The validator type; use
///   [`BoxValidator`](crate::foundation::BoxValidator) to mix types.
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

impl<V> AndAll<V> {
    /// Creates a new `AndAll` combinator.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two validators are given.
    #[must_use]
    pub fn new(validators: Vec<V>) -> Self {
        assert!(
            validators.len() >= 2,
            "and_all requires at least 2 validators but was given {}",
            validators.len()
        );
        Self { validators }
    }

    /// Returns the composed validators, in evaluation order.
    pub fn validators(&self) -> &[V] {
        &self.validators
    }
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut errors = ValidationErrors::with_capacity(self.validators.len());
        for validator in &self.validators {
            errors.record(validator.validate(input));
        }
        conjunction(errors, self.validators.len())
    }
}

fn conjunction(errors: ValidationErrors, total: usize) -> Result<(), ValidationError> {
    if errors.is_empty() {
        return Ok(());
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(failed = errors.len(), total, "conjunction rejected");

    Err(CombinatorError::and_failed(errors.into_vec(), total).into())
}
