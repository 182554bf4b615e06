//! Macros for composing validators of different types.
//!
//! # Available Macros
//!
//! - [`all_of!`]: flat AND over any number of validators
//! - [`any_of!`]: flat OR over any number of validators
//!
//! Each argument is boxed into a [`BoxValidator`](crate::foundation::BoxValidator),
//! so the arguments may have different concrete types as long as they share
//! an input type. The result is a single composite whose error lists the
//! children directly, unlike a chain of `.and()` calls which nests.
//!
//! # Examples
//!
//! ```rust
//! use sentinel_validator::prelude::*;
//! use sentinel_validator::{all_of, any_of};
//!
//! let digit = all_of![greater_or_equal(0), less(10), not_equal(7)];
//! assert!(digit.validate(&3).is_ok());
//!
//! let err = digit.validate(&12).unwrap_err();
//! assert_eq!(err.nested.len(), 1);
//!
//! let edge = any_of![equal(0), equal(9)];
//! assert!(edge.validate(&9).is_ok());
//! ```

// ============================================================================
// ALL_OF MACRO
// ============================================================================

/// Composes validators using AND logic into one flat [`AndAll`](crate::combinators::AndAll).
///
/// # Panics
///
/// Panics when given fewer than two validators.
///
/// ```rust,should_panic
/// use sentinel_validator::all_of;
/// use sentinel_validator::validators::positive;
///
/// let _ = all_of![positive::<i32>()];
/// ```
#[macro_export]
macro_rules! all_of {
    ($($validator:expr),* $(,)?) => {
        $crate::combinators::and_all(::std::vec![
            $($crate::foundation::ValidateExt::boxed($validator)),*
        ])
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// Composes validators using OR logic into one flat [`OrAny`](crate::combinators::OrAny).
///
/// # Panics
///
/// Panics when given fewer than two validators.
#[macro_export]
macro_rules! any_of {
    ($($validator:expr),* $(,)?) => {
        $crate::combinators::or_any(::std::vec![
            $($crate::foundation::ValidateExt::boxed($validator)),*
        ])
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::Validate;
    use crate::validators::{equal, greater, less, not_equal};

    #[test]
    fn test_all_of_is_flat() {
        let validator = all_of![greater(0), less(10), not_equal(5)];
        assert!(validator.validate(&3).is_ok());

        let err = validator.validate(&-1).unwrap_err();
        assert_eq!(err.code, "and");
        assert_eq!(err.nested.len(), 1);
        assert_eq!(err.nested[0].code, "greater");
    }

    #[test]
    fn test_any_of_is_flat() {
        let validator = any_of![equal(1), equal(2), equal(3)];
        assert!(validator.validate(&2).is_ok());

        let err = validator.validate(&4).unwrap_err();
        assert_eq!(err.code, "or");
        assert_eq!(err.nested.len(), 3);
    }

    #[test]
    fn test_trailing_comma() {
        let validator = all_of![greater(0), less(10),];
        assert!(validator.validate(&1).is_ok());
    }

    #[test]
    #[should_panic(expected = "or_any requires at least 2 validators but was given 1")]
    fn test_any_of_single_panics() {
        let _ = any_of![equal(1)];
    }
}
