//! Projection combinators - validate values derived from the input
//!
//! [`WithValue`] runs a validator on a value computed from the input, which
//! is how field checks are written without derive macros. [`WithValues`]
//! builds the validator itself from the input, which covers cross-field
//! checks such as "`start` is before `end`".
//!
//! # Examples
//!
//! ```rust
//! use sentinel_validator::combinators::{with_value, with_values};
//! use sentinel_validator::foundation::Validate;
//! use sentinel_validator::validators::{less, positive};
//!
//! struct Window {
//!     start: u32,
//!     end: u32,
//! }
//!
//! let width = with_value(|w: &Window| w.end.saturating_sub(w.start), positive());
//! let ordered = with_values(|w: &Window| w.start, |w: &Window| w.end, less);
//!
//! let ok = Window { start: 1, end: 4 };
//! let bad = Window { start: 4, end: 1 };
//!
//! assert!(width.validate(&ok).is_ok());
//! assert!(ordered.validate(&ok).is_ok());
//! assert!(width.validate(&bad).is_err());
//! assert!(ordered.validate(&bad).is_err());
//! ```

use crate::foundation::{Validate, ValidationError};
use std::fmt;
use std::marker::PhantomData;

// ============================================================================
// WITH VALUE
// ============================================================================

/// Validates `project(input)` with an inner validator.
///
/// The inner error is returned unchanged.
///
/// # Type Parameters
///
/// * `T` - The input type
/// * `U` - The projected type
/// * `V` - The validator for `U`
/// * `F` - The projection function
pub struct WithValue<T: ?Sized, U, V, F> {
    project: F,
    validator: V,
    _phantom: PhantomData<fn(&T) -> U>,
}

impl<T: ?Sized, U, V, F> WithValue<T, U, V, F> {
    /// Creates a new `WithValue` combinator.
    pub fn new(project: F, validator: V) -> Self {
        Self {
            project,
            validator,
            _phantom: PhantomData,
        }
    }

    /// Returns a reference to the inner validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Extracts the projection and the validator.
    pub fn into_parts(self) -> (F, V) {
        (self.project, self.validator)
    }
}

impl<T: ?Sized, U, V, F> Validate for WithValue<T, U, V, F>
where
    F: Fn(&T) -> U,
    V: Validate<Input = U>,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        let value = (self.project)(input);
        self.validator.validate(&value)
    }
}

impl<T: ?Sized, U, V: Clone, F: Clone> Clone for WithValue<T, U, V, F> {
    fn clone(&self) -> Self {
        Self {
            project: self.project.clone(),
            validator: self.validator.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized, U, V: fmt::Debug, F> fmt::Debug for WithValue<T, U, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithValue")
            .field("project", &"<function>")
            .field("validator", &self.validator)
            .finish()
    }
}

/// Creates a validator for `T` that runs `validator` on `project(input)`.
pub fn with_value<T: ?Sized, U, V, F>(project: F, validator: V) -> WithValue<T, U, V, F>
where
    F: Fn(&T) -> U,
    V: Validate<Input = U>,
{
    WithValue::new(project, validator)
}

// ============================================================================
// WITH VALUES
// ============================================================================

/// Validates `subject(input)` with a validator built from
/// `reference(input)`.
///
/// A fresh validator is built by `build` on every call, so the comparison
/// operand always comes from the value under test.
///
/// # Type Parameters
///
/// * `T` - The input type
/// * `U` - The type of both projected values
/// * `V` - The validator produced by `build`
/// * `F`, `G` - The subject and reference projections
/// * `H` - The validator constructor, e.g. [`less`](crate::validators::less)
pub struct WithValues<T: ?Sized, U, V, F, G, H> {
    subject: F,
    reference: G,
    build: H,
    _phantom: PhantomData<fn(&T) -> (U, V)>,
}

impl<T: ?Sized, U, V, F, G, H> WithValues<T, U, V, F, G, H> {
    /// Creates a new `WithValues` combinator.
    pub fn new(subject: F, reference: G, build: H) -> Self {
        Self {
            subject,
            reference,
            build,
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized, U, V, F, G, H> Validate for WithValues<T, U, V, F, G, H>
where
    F: Fn(&T) -> U,
    G: Fn(&T) -> U,
    H: Fn(U) -> V,
    V: Validate<Input = U>,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        let validator = (self.build)((self.reference)(input));
        validator.validate(&(self.subject)(input))
    }
}

impl<T: ?Sized, U, V, F: Clone, G: Clone, H: Clone> Clone for WithValues<T, U, V, F, G, H> {
    fn clone(&self) -> Self {
        Self {
            subject: self.subject.clone(),
            reference: self.reference.clone(),
            build: self.build.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized, U, V, F, G, H> fmt::Debug for WithValues<T, U, V, F, G, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithValues")
            .field("validator", &std::any::type_name::<V>())
            .finish_non_exhaustive()
    }
}

/// Creates a validator for `T` that checks `subject(input)` against a
/// validator built from `reference(input)`.
pub fn with_values<T: ?Sized, U, V, F, G, H>(
    subject: F,
    reference: G,
    build: H,
) -> WithValues<T, U, V, F, G, H>
where
    F: Fn(&T) -> U,
    G: Fn(&T) -> U,
    H: Fn(U) -> V,
    V: Validate<Input = U>,
{
    WithValues::new(subject, reference, build)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{equal, greater_or_equal, less};

    #[derive(Debug)]
    struct Account {
        owner: String,
        balance: i64,
        limit: i64,
    }

    fn account(balance: i64, limit: i64) -> Account {
        Account {
            owner: "ada".to_string(),
            balance,
            limit,
        }
    }

    #[test]
    fn test_with_value_forwards_verdict() {
        let non_negative = with_value(|a: &Account| a.balance, greater_or_equal(0));
        assert!(non_negative.validate(&account(10, 0)).is_ok());
        assert!(non_negative.validate(&account(-1, 0)).is_err());
    }

    #[test]
    fn test_with_value_passes_inner_error_through() {
        let owner = with_value(|a: &Account| a.owner.clone(), equal("bob".to_string()));
        let err = owner.validate(&account(0, 0)).unwrap_err();
        assert_eq!(err.code, "equal");
        assert_eq!(err.param("actual"), Some("\"ada\""));
    }

    #[test]
    fn test_with_values_compares_fields() {
        let under_limit = with_values(|a: &Account| a.balance, |a: &Account| a.limit, less);
        assert!(under_limit.validate(&account(5, 10)).is_ok());

        let err = under_limit.validate(&account(10, 10)).unwrap_err();
        assert_eq!(err.code, "less");
        assert_eq!(err.param("bound"), Some("10"));
    }

    #[test]
    fn test_projections_compose() {
        let validator = with_value(|a: &Account| a.balance, greater_or_equal(0))
            .and(with_values(|a: &Account| a.balance, |a: &Account| a.limit, less));

        assert!(validator.validate(&account(3, 5)).is_ok());
        let err = validator.validate(&account(-3, -5)).unwrap_err();
        assert_eq!(err.nested.len(), 2);
    }
}
