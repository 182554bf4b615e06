//! Unified error handling for combinators
//!
//! Every way a logical combinator can reject is captured by
//! [`CombinatorError`]. Combinators build one of these and convert it into a
//! [`ValidationError`], so callers only ever see a single error type while
//! the aggregation rules live in one place.
//!
//! # Examples
//!
//! ```rust
//! use sentinel_validator::combinators::error::CombinatorError;
//! use sentinel_validator::foundation::ValidationError;
//!
//! let error = CombinatorError::or_all_failed(vec![
//!     ValidationError::new("less", "first"),
//!     ValidationError::new("equal", "second"),
//! ]);
//!
//! let error: ValidationError = error.into();
//! assert_eq!(error.code, "or");
//! assert_eq!(error.nested.len(), 2);
//! ```

use crate::foundation::ValidationError;

// ============================================================================
// COMBINATOR ERROR TYPE
// ============================================================================

/// Error codes attached to the composite errors built by combinators.
pub mod codes {
    /// Conjunction rejected.
    pub const AND: &str = "and";
    /// Disjunction rejected.
    pub const OR: &str = "or";
    /// Negation rejected.
    pub const NOT: &str = "not";
}

/// Unified error type for the logical combinators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CombinatorError<E: std::error::Error + Clone + 'static = ValidationError> {
    /// AND combinator: one or more children rejected.
    ///
    /// `failures` holds only the rejecting children, in argument order.
    #[error("conjunction failed: {} of {total} validators rejected", .failures.len())]
    AndFailed {
        /// Rejections, in argument order.
        failures: Vec<E>,
        /// Number of children evaluated.
        total: usize,
    },

    /// OR combinator: every alternative rejected.
    #[error("disjunction failed: all {} validators rejected", .0.len())]
    OrAllFailed(Vec<E>),

    /// NOT combinator: the wrapped validator accepted.
    ///
    /// Carries nothing about why the wrapped validator accepted.
    #[error("negated validator passed")]
    NotValidatorPassed,
}

// ============================================================================
// CONSTRUCTOR HELPERS
// ============================================================================

impl<E: std::error::Error + Clone + 'static> CombinatorError<E> {
    /// Creates an AND error from the failures of `total` children.
    #[must_use]
    pub fn and_failed(failures: Vec<E>, total: usize) -> Self {
        Self::AndFailed { failures, total }
    }

    /// Creates an OR error when all alternatives fail.
    #[must_use]
    pub fn or_all_failed(failures: Vec<E>) -> Self {
        Self::OrAllFailed(failures)
    }

    /// Creates a NOT error when the wrapped validator passes.
    #[must_use]
    pub fn not_passed() -> Self {
        Self::NotValidatorPassed
    }

    /// Returns the child failures carried by this error.
    pub fn failures(&self) -> &[E] {
        match self {
            Self::AndFailed { failures, .. } | Self::OrAllFailed(failures) => failures.as_slice(),
            Self::NotValidatorPassed => &[],
        }
    }

    /// Returns the error code used when converting to [`ValidationError`].
    pub fn code(&self) -> &'static str {
        match self {
            Self::AndFailed { .. } => codes::AND,
            Self::OrAllFailed(_) => codes::OR,
            Self::NotValidatorPassed => codes::NOT,
        }
    }
}

// ============================================================================
// CONVERSION TO VALIDATIONERROR
// ============================================================================

impl<E> From<CombinatorError<E>> for ValidationError
where
    E: std::error::Error + Clone + Into<ValidationError> + 'static,
{
    fn from(error: CombinatorError<E>) -> Self {
        let code = error.code();
        let message = error.to_string();
        ValidationError::new(code, message).with_nested(error.into_failures())
    }
}

impl<E: std::error::Error + Clone + Into<ValidationError> + 'static> CombinatorError<E> {
    fn into_failures(self) -> Vec<ValidationError> {
        match self {
            Self::AndFailed { failures, .. } | Self::OrAllFailed(failures) => {
                failures.into_iter().map(Into::into).collect()
            }
            Self::NotValidatorPassed => Vec::new(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_failed_display() {
        let error = CombinatorError::and_failed(vec![ValidationError::new("less", "x")], 3);
        assert_eq!(error.to_string(), "conjunction failed: 1 of 3 validators rejected");
        assert_eq!(error.failures().len(), 1);
    }

    #[test]
    fn test_or_all_failed_display() {
        let error = CombinatorError::or_all_failed(vec![
            ValidationError::new("err1", "First error"),
            ValidationError::new("err2", "Second error"),
        ]);
        assert_eq!(error.to_string(), "disjunction failed: all 2 validators rejected");
    }

    #[test]
    fn test_not_passed_has_no_failures() {
        let error: CombinatorError = CombinatorError::not_passed();
        assert!(error.failures().is_empty());
        assert_eq!(error.to_string(), "negated validator passed");
    }

    #[test]
    fn test_conversion_preserves_order() {
        let error = CombinatorError::and_failed(
            vec![
                ValidationError::new("first", "1"),
                ValidationError::new("second", "2"),
            ],
            4,
        );
        let ve: ValidationError = error.into();

        assert_eq!(ve.code, codes::AND);
        assert_eq!(ve.message, "conjunction failed: 2 of 4 validators rejected");
        let codes: Vec<_> = ve.nested.iter().map(|e| e.code.as_ref()).collect();
        assert_eq!(codes, ["first", "second"]);
    }

    #[test]
    fn test_not_conversion_is_fixed() {
        let ve: ValidationError = CombinatorError::<ValidationError>::not_passed().into();
        assert_eq!(ve.code, codes::NOT);
        assert!(!ve.has_nested());
    }
}
