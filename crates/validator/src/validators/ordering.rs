//! Ordering validators
//!
//! All checks go through a three-way comparison. [`Natural`] uses
//! [`Ordered::compare`]; the `_by` constructors take any
//! `Fn(&T, &T) -> Ordering`.
//!
//! ```
//! use sentinel_validator::prelude::*;
//!
//! let validator = greater_or_equal(1).and(less_or_equal(5));
//! assert!(validator.validate(&1).is_ok());
//! assert!(validator.validate(&5).is_ok());
//! assert!(validator.validate(&6).is_err());
//! ```

use std::any::type_name;
use std::cmp::Ordering;
use std::fmt::Debug;

use crate::combinators::Or;
use crate::foundation::constraints::Ordered;
use crate::foundation::{Validate, ValidationError};
use crate::validators::equality::{Equal, Equivalence, NaturalEq};

// ============================================================================
// COMPARATOR
// ============================================================================

/// A three-way comparison used by [`Less`] and [`Greater`].
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Comparison through [`Ordered::compare`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ordered + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        Ordered::compare(a, b)
    }
}

/// Equivalence derived from a comparator: `a ~ b` iff `cmp(a, b)` is
/// `Equal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByOrdering<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Equivalence<T> for ByOrdering<C> {
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        self.0.compare(a, b) == Ordering::Equal
    }
}

// ============================================================================
// STRICT BOUNDS
// ============================================================================

fn bound_error<T: Debug>(
    code: &'static str,
    relation: &str,
    input: &T,
    bound: &T,
) -> ValidationError {
    let actual = format!("{input:?}");
    let bound = format!("{bound:?}");
    ValidationError::new(
        code,
        format!(
            "{actual} is not {relation} {bound} (both of type {})",
            type_name::<T>()
        ),
    )
    .with_param("actual", actual)
    .with_param("bound", bound)
    .with_param("type", type_name::<T>())
}

/// Validates that a value compares strictly below a bound.
///
/// # Examples
///
/// ```
/// use sentinel_validator::validators::less;
/// use sentinel_validator::foundation::Validate;
///
/// let validator = less(10);
/// assert!(validator.validate(&9).is_ok());
/// assert!(validator.validate(&10).is_err()); // Not strictly less
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Less<T, C = Natural> {
    bound: T,
    cmp: C,
}

impl<T, C> Less<T, C> {
    /// Creates a new `Less` validator using `cmp` as the comparison.
    pub fn new(bound: T, cmp: C) -> Self {
        Self { bound, cmp }
    }

    /// Returns the exclusive upper bound.
    pub fn bound(&self) -> &T {
        &self.bound
    }
}

impl<T, C> Validate for Less<T, C>
where
    T: Debug,
    C: Comparator<T>,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        match self.cmp.compare(input, &self.bound) {
            Ordering::Less => Ok(()),
            _ => Err(bound_error("less", "less than", input, &self.bound)),
        }
    }
}

/// Validates that a value compares strictly above a bound.
///
/// # Examples
///
/// ```
/// use sentinel_validator::validators::greater;
/// use sentinel_validator::foundation::Validate;
///
/// let validator = greater(5);
/// assert!(validator.validate(&6).is_ok());
/// assert!(validator.validate(&5).is_err()); // Not strictly greater
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Greater<T, C = Natural> {
    bound: T,
    cmp: C,
}

impl<T, C> Greater<T, C> {
    /// Creates a new `Greater` validator using `cmp` as the comparison.
    pub fn new(bound: T, cmp: C) -> Self {
        Self { bound, cmp }
    }

    /// Returns the exclusive lower bound.
    pub fn bound(&self) -> &T {
        &self.bound
    }
}

impl<T, C> Validate for Greater<T, C>
where
    T: Debug,
    C: Comparator<T>,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        match self.cmp.compare(input, &self.bound) {
            Ordering::Greater => Ok(()),
            _ => Err(bound_error("greater", "greater than", input, &self.bound)),
        }
    }
}

/// Creates a validator accepting values `< bound`.
#[must_use]
pub fn less<T>(bound: T) -> Less<T>
where
    T: Ordered + Debug,
{
    Less::new(bound, Natural)
}

/// Creates a validator accepting values for which `cmp(value, &bound)` is
/// `Less`.
pub fn less_by<T, F>(bound: T, cmp: F) -> Less<T, F>
where
    T: Debug,
    F: Fn(&T, &T) -> Ordering,
{
    Less::new(bound, cmp)
}

/// Creates a validator accepting values `> bound`.
#[must_use]
pub fn greater<T>(bound: T) -> Greater<T>
where
    T: Ordered + Debug,
{
    Greater::new(bound, Natural)
}

/// Creates a validator accepting values for which `cmp(value, &bound)` is
/// `Greater`.
///
/// # Examples
///
/// ```
/// use sentinel_validator::validators::greater_by;
/// use sentinel_validator::foundation::Validate;
///
/// let longer = greater_by(vec![1, 2], |a: &Vec<i32>, b: &Vec<i32>| a.len().cmp(&b.len()));
/// assert!(longer.validate(&vec![0, 0, 0]).is_ok());
/// assert!(longer.validate(&vec![9, 9]).is_err());
/// ```
pub fn greater_by<T, F>(bound: T, cmp: F) -> Greater<T, F>
where
    T: Debug,
    F: Fn(&T, &T) -> Ordering,
{
    Greater::new(bound, cmp)
}

// ============================================================================
// INCLUSIVE BOUNDS
// ============================================================================

/// Validates that a value is `<=` a bound: `Less` or `Equal`.
///
/// Both branches always run, so a rejection holds both descriptions.
pub type LessOrEqual<T> = Or<Less<T>, Equal<T, NaturalEq>>;

/// [`LessOrEqual`] under a custom comparison; equality means the comparison
/// returns `Equal`.
pub type LessOrEqualBy<T, C> = Or<Less<T, C>, Equal<T, ByOrdering<C>>>;

/// Validates that a value is `>=` a bound: `Greater` or `Equal`.
pub type GreaterOrEqual<T> = Or<Greater<T>, Equal<T, NaturalEq>>;

/// [`GreaterOrEqual`] under a custom comparison.
pub type GreaterOrEqualBy<T, C> = Or<Greater<T, C>, Equal<T, ByOrdering<C>>>;

/// Creates a validator accepting values `<= bound`.
#[must_use]
pub fn less_or_equal<T>(bound: T) -> LessOrEqual<T>
where
    T: Ordered + Debug + Clone,
{
    Or::new(less(bound.clone()), Equal::new(bound, NaturalEq))
}

/// Creates a validator accepting values for which `cmp(value, &bound)` is
/// `Less` or `Equal`.
pub fn less_or_equal_by<T, F>(bound: T, cmp: F) -> LessOrEqualBy<T, F>
where
    T: Debug + Clone,
    F: Fn(&T, &T) -> Ordering + Clone,
{
    Or::new(
        Less::new(bound.clone(), cmp.clone()),
        Equal::new(bound, ByOrdering(cmp)),
    )
}

/// Creates a validator accepting values `>= bound`.
#[must_use]
pub fn greater_or_equal<T>(bound: T) -> GreaterOrEqual<T>
where
    T: Ordered + Debug + Clone,
{
    Or::new(greater(bound.clone()), Equal::new(bound, NaturalEq))
}

/// Creates a validator accepting values for which `cmp(value, &bound)` is
/// `Greater` or `Equal`.
pub fn greater_or_equal_by<T, F>(bound: T, cmp: F) -> GreaterOrEqualBy<T, F>
where
    T: Debug + Clone,
    F: Fn(&T, &T) -> Ordering + Clone,
{
    Or::new(
        Greater::new(bound.clone(), cmp.clone()),
        Equal::new(bound, ByOrdering(cmp)),
    )
}

// ============================================================================
// TESTS
// ============================================================================
