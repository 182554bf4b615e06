//! Prelude module for convenient imports.
//!
//! Provides a single `use sentinel_validator::prelude::*;` import that brings
//! in all commonly needed traits, types, validators, and combinators.
//!
//! # Examples
//!
//! ```rust
//! use sentinel_validator::prelude::*;
//!
//! let port = greater(0).and(less_or_equal(65_535));
//! let flag = is_true();
//! let maybe = not_nil::<Option<&str>>();
//!
//! assert!(port.validate(&8080).is_ok());
//! assert!(flag.validate(&true).is_ok());
//! assert!(maybe.validate(&Some("x")).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors
// ============================================================================

pub use crate::foundation::{
    BoxValidator, Validate, ValidateExt, ValidationError, ValidationErrors, ValidationResult,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, AndAll, Not, Or, OrAny, ValidateFn, WithValue, WithValues, and, and_all, from_fn, not,
    or, or_any, with_value, with_values,
};
