//! OR combinator - logical disjunction of validators
//!
//! This module provides the binary [`Or`] combinator and the N-ary
//! [`OrAny`]. Both evaluate every child, in order, even after an acceptance.
//! A rejection therefore always lists the failure of every alternative.
//!
//! # Examples
//!
//! ```rust
//! use sentinel_validator::combinators::or;
//! use sentinel_validator::foundation::Validate;
//! use sentinel_validator::validators::{equal, less};
//!
//! let validator = or(less(0), equal(42));
//! assert!(validator.validate(&-1).is_ok());
//! assert!(validator.validate(&42).is_ok());
//!
//! let err = validator.validate(&7).unwrap_err();
//! assert_eq!(err.code, "or");
//! assert_eq!(err.nested.len(), 2);
//! ```

use crate::combinators::error::CombinatorError;
use crate::foundation::{Validate, ValidationError, ValidationErrors};

/// Combines two validators with logical OR.
///
/// Both validators always run. The combined validator rejects only when both
/// reject; the error has code `or` and holds both failures, left first.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
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

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut errors = ValidationErrors::with_capacity(2);
        errors.record(self.left.validate(input));
        errors.record(self.right.validate(input));
        disjunction(errors, 2)
    }
}

impl<L, R> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    /// Chains another validator with OR logic.
    ///
    /// The result nests; use [`any_of!`](crate::any_of) for a flat error.
    pub fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = L::Input>,
    {
        Or::new(self, other)
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

/// Creates an [`OrAny`] combinator from a vector of validators.
///
/// # Panics
///
/// Panics if fewer than two validators are given.
///
/// # Examples
///
/// ```rust
/// use sentinel_validator::combinators::or_any;
/// use sentinel_validator::foundation::Validate;
/// use sentinel_validator::validators::equal;
///
/// let validator = or_any(vec![equal("red"), equal("green"), equal("blue")]);
/// assert!(validator.validate(&"green").is_ok());
///
/// let err = validator.validate(&"pink").unwrap_err();
/// assert_eq!(err.nested.len(), 3);
/// ```
#[must_use]
pub fn or_any<V>(validators: Vec<V>) -> OrAny<V>
where
    V: Validate,
{
    OrAny::new(validators)
}

/// Combines two or more validators with logical OR.
///
/// Every validator runs, in order. The combined validator rejects only when
/// all of them reject, so its error always holds exactly one failure per
/// child, in argument order.
///
/// # Type Parameters
///
/// * `V` - The validator type
#[derive(Debug, Clone)]
pub struct OrAny<V> {
    validators: Vec<V>,
}

impl<V> OrAny<V> {
    /// Creates a new `OrAny` combinator.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two validators are given.
    #[must_use]
    pub fn new(validators: Vec<V>) -> Self {
        assert!(
            validators.len() >= 2,
            "or_any requires at least 2 validators but was given {}",
            validators.len()
        );
        Self { validators }
    }

    /// Returns the composed validators, in evaluation order.
    pub fn validators(&self) -> &[V] {
        &self.validators
    }
}

impl<V> Validate for OrAny<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut errors = ValidationErrors::with_capacity(self.validators.len());
        for validator in &self.validators {
            errors.record(validator.validate(input));
        }
        disjunction(errors, self.validators.len())
    }
}

fn disjunction(errors: ValidationErrors, total: usize) -> Result<(), ValidationError> {
    if errors.len() < total {
        return Ok(());
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(total, "disjunction rejected");

    Err(CombinatorError::or_all_failed(errors.into_vec()).into())
}
