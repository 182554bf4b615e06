//! Core traits for the validation system
//!
//! This module defines the [`Validate`] trait every validator implements and
//! the [`ValidateExt`] extension trait that provides fluent composition.

use crate::foundation::ValidationError;
use std::sync::Arc;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// A validator evaluates one value of its fixed input type and either accepts
/// it (`Ok(())`) or rejects it with a [`ValidationError`] describing why. A
/// rejection always carries a description and an acceptance never does.
///
/// Implementations must be pure: the verdict depends only on the input and on
/// state captured when the validator was built.
///
/// # Examples
///
/// ```rust
/// use sentinel_validator::foundation::{Validate, ValidationError};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = u32;
///
///     fn validate(&self, input: &u32) -> Result<(), ValidationError> {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("even", format!("{input} is odd")))
///         }
///     }
/// }
///
/// assert!(Even.validate(&4).is_ok());
/// assert!(Even.validate(&3).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// May be unsized (`str`, `[T]`).
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

/// A type-erased, thread-safe validator for input `T`.
///
/// Used to put validators of different concrete types into one
/// [`and_all`](crate::combinators::and_all) or
/// [`or_any`](crate::combinators::or_any) list.
pub type BoxValidator<T> = Box<dyn Validate<Input = T> + Send + Sync>;

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Implemented automatically for every [`Validate`] type.
///
/// # Examples
///
/// ```rust
/// use sentinel_validator::prelude::*;
///
/// let digit = greater_or_equal(0).and(less(10));
/// assert!(digit.validate(&7).is_ok());
/// assert!(digit.validate(&12).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators always run; the failure lists every rejection.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// Both validators always run; the failure lists both rejections.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Erases the concrete type of this validator.
    fn boxed(self) -> BoxValidator<Self::Input>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================
