//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`, `ValidationErrors`
//! - **Constraints**: sealed categories restricting which validators apply
//!   to which value types
//!
//! # Architecture
//!
//! ## 1. Type Safety
//!
//! Validators are generic over their input type. Composing validators with
//! different input types, or applying an ordering check to an unordered type,
//! fails to compile:
//!
//! ```rust,compile_fail
//! use sentinel_validator::prelude::*;
//!
//! // `bool` is not `Ordered`.
//! let v = less(true);
//! ```
//!
//! ## 2. Composition
//!
//! Validators compose using logical combinators:
//!
//! ```rust
//! use sentinel_validator::prelude::*;
//!
//! let validator = greater(0).and(less(100)).and(not_equal(13));
//! assert!(validator.validate(&42).is_ok());
//! assert!(validator.validate(&13).is_err());
//! ```
//!
//! ## 3. Rich Error Information
//!
//! A rejection carries a code, a message, the compared values and, for
//! composites, every child failure:
//!
//! ```rust
//! use sentinel_validator::prelude::*;
//!
//! let err = greater(0).and(less(10)).validate(&15).unwrap_err();
//! assert_eq!(err.to_string(), "and: conjunction failed: 1 of 2 validators rejected\n  1. less: 15 is not less than 10 (both of type i32)");
//! ```

pub mod constraints;
pub mod error;
pub mod traits;

pub use constraints::{
    Boolean, Complex, Equatable, Float, Integer, Map, Nillable, Ordered, Real, Signed, Slice,
    Text, Unsigned,
};
pub use error::{ErrorParams, ValidationError, ValidationErrors};
pub use traits::{BoxValidator, Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value and returns the verdict.
///
/// This is a convenience function for one-off validations.
///
/// # Examples
///
/// ```rust
/// use sentinel_validator::foundation::validate_value;
/// use sentinel_validator::validators::positive;
///
/// assert!(validate_value(&3, &positive()).is_ok());
/// ```
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &V::Input, validator: &V) -> ValidationResult<()>
where
    V: Validate + ?Sized,
{
    validator.validate(value)
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod core_tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_validate_value() {
        assert!(validate_value("test", &AlwaysValid).is_ok());
    }

    #[test]
    fn test_validate_value_dyn() {
        let validator: BoxValidator<str> = Box::new(AlwaysValid);
        assert!(validate_value("test", &validator).is_ok());
    }
}
