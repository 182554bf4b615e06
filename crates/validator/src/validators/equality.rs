//! Equality validators

use std::any::type_name;
use std::fmt::Debug;

use crate::combinators::Not;
use crate::foundation::constraints::Equatable;
use crate::foundation::{Validate, ValidationError};

// ============================================================================
// EQUIVALENCE
// ============================================================================

/// An equivalence relation used by [`Equal`].
///
/// Implemented for [`NaturalEq`] (`==`) and for every
/// `Fn(&T, &T) -> bool`, which is what [`equal_by`] accepts.
pub trait Equivalence<T: ?Sized> {
    /// Returns true if `a` and `b` are equivalent.
    fn equivalent(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Equivalence<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Equivalence through `PartialEq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalEq;

impl<T: Equatable + ?Sized> Equivalence<T> for NaturalEq {
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

// ============================================================================
// EQUAL
// ============================================================================

/// Validates that a value is equivalent to an expected value.
///
/// # Examples
///
/// ```
/// use sentinel_validator::validators::equal;
/// use sentinel_validator::foundation::Validate;
///
/// let validator = equal(5);
/// assert!(validator.validate(&5).is_ok());
///
/// let err = validator.validate(&4).unwrap_err();
/// assert_eq!(err.message, "4 is not equal to 5 (both of type i32)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Equal<T, E = NaturalEq> {
    expected: T,
    eq: E,
}

impl<T, E> Equal<T, E> {
    /// Creates a new `Equal` validator using `eq` as the equivalence.
    pub fn new(expected: T, eq: E) -> Self {
        Self { expected, eq }
    }

    /// Returns the expected value.
    pub fn expected(&self) -> &T {
        &self.expected
    }
}

impl<T, E> Validate for Equal<T, E>
where
    T: Debug,
    E: Equivalence<T>,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if self.eq.equivalent(input, &self.expected) {
            return Ok(());
        }

        let actual = format!("{input:?}");
        let expected = format!("{:?}", self.expected);
        Err(ValidationError::new(
            "equal",
            format!(
                "{actual} is not equal to {expected} (both of type {})",
                type_name::<T>()
            ),
        )
        .with_param("actual", actual)
        .with_param("expected", expected)
        .with_param("type", type_name::<T>()))
    }
}

/// Creates a validator accepting values `== expected`.
#[must_use]
pub fn equal<T>(expected: T) -> Equal<T>
where
    T: Equatable + Debug,
{
    Equal::new(expected, NaturalEq)
}

/// Creates a validator accepting values for which `eq(value, &expected)`
/// holds.
///
/// # Examples
///
/// ```
/// use sentinel_validator::validators::equal_by;
/// use sentinel_validator::foundation::Validate;
///
/// let validator = equal_by("Hello".to_string(), |a: &String, b: &String| a.eq_ignore_ascii_case(b));
/// assert!(validator.validate(&"HELLO".to_string()).is_ok());
/// ```
pub fn equal_by<T, F>(expected: T, eq: F) -> Equal<T, F>
where
    T: Debug,
    F: Fn(&T, &T) -> bool,
{
    Equal::new(expected, eq)
}

// ============================================================================
// NOT EQUAL
// ============================================================================

/// Validates that a value is not equivalent to a given value.
///
/// A rejection carries the generic `not` description, not the compared
/// values.
pub type NotEqual<T, E = NaturalEq> = Not<Equal<T, E>>;

/// Creates a validator accepting values `!= unexpected`.
#[must_use]
pub fn not_equal<T>(unexpected: T) -> NotEqual<T>
where
    T: Equatable + Debug,
{
    Not::new(equal(unexpected))
}

/// Creates a validator accepting values for which `eq(value, &unexpected)`
/// does not hold.
pub fn not_equal_by<T, F>(unexpected: T, eq: F) -> NotEqual<T, F>
where
    T: Debug,
    F: Fn(&T, &T) -> bool,
{
    Not::new(equal_by(unexpected, eq))
}

// ============================================================================
// TESTS
// ============================================================================
