//! NOT combinator - logical negation of validators
//!
//! This module provides the [`Not`] combinator which inverts the verdict
//! of a validator - it succeeds when the inner validator fails and vice versa.
//!
//! # Examples
//!
//! ```rust
//! use sentinel_validator::combinators::Not;
//! use sentinel_validator::foundation::Validate;
//! use sentinel_validator::validators::equal;
//!
//! let validator = Not::new(equal(0));
//! assert!(validator.validate(&3).is_ok());
//! assert!(validator.validate(&0).is_err());
//! ```

use crate::combinators::error::CombinatorError;
use crate::foundation::{Validate, ValidationError};

/// Inverts a validator with logical NOT.
///
/// - If the inner validator fails, `Not` succeeds and the inner error is
///   dropped.
/// - If the inner validator succeeds, `Not` fails with a fixed `not` error.
///
/// An acceptance carries no description, so the failure cannot say *why* the
/// inner validator accepted. Validators derived through `Not` (such as
/// [`NotEqual`](crate::validators::NotEqual)) share this behavior.
///
/// # Type Parameters
///
/// * `V` - The inner validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    /// The inner validator to invert.
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(CombinatorError::<ValidationError>::not_passed().into()),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::error::codes;
    use crate::foundation::traits::ValidateExt;

    struct Contains {
        substring: &'static str,
    }

    impl Validate for Contains {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.contains(self.substring) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "contains",
                    format!("Must contain '{}'", self.substring),
                ))
            }
        }
    }

    #[test]
    fn test_not_inverts_success() {
        let validator = Not::new(Contains {
            substring: "forbidden",
        });
        let err = validator.validate("this is forbidden").unwrap_err();
        assert_eq!(err.code, codes::NOT);
        assert_eq!(err.message, "negated validator passed");
    }

    #[test]
    fn test_not_inverts_failure() {
        let validator = Not::new(Contains {
            substring: "forbidden",
        });
        assert!(validator.validate("this is allowed").is_ok());
    }

    #[test]
    fn test_not_description_ignores_inner() {
        let a = not(Contains { substring: "a" });
        let b = not(Contains { substring: "b" });
        assert_eq!(a.validate("ab").unwrap_err(), b.validate("ab").unwrap_err());
    }

    #[test]
    fn test_not_via_ext() {
        let validator = Contains { substring: "test" }.not();
        assert!(validator.validate("hello world").is_ok());
        assert!(validator.validate("test string").is_err());
    }

    #[test]
    fn test_double_negation() {
        let validator = Contains { substring: "test" }.not().not();
        assert!(validator.validate("test").is_ok());
        assert!(validator.validate("hello").is_err());
    }
}
