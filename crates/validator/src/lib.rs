//! # sentinel-validator
//!
//! Composable, type-safe value validation.
//!
//! A validator decides whether one value satisfies a predicate and, when it
//! does not, says why. Small validators combine with logical combinators into
//! larger ones, and every combination is itself a validator.
//!
//! ## Quick Start
//!
//! ```rust
//! use sentinel_validator::prelude::*;
//!
//! // Compose validators with .and() / .or() / .not()
//! let digit = greater_or_equal(0).and(less(10));
//! assert!(digit.validate(&7).is_ok());
//!
//! let err = digit.validate(&15).unwrap_err();
//! assert_eq!(err.code, "and");
//! assert_eq!(err.nested[0].code, "less");
//! ```
//!
//! ## Creating Validators
//!
//! Adapt a closure with [`from_fn`](combinators::from_fn), or implement
//! [`Validate`](foundation::Validate) manually for anything more involved.
//!
//! ## Built-in Validators
//!
//! - **Basic**: [`Valid`](validators::Valid), [`Invalid`](validators::Invalid)
//! - **Equality**: [`Equal`](validators::Equal), [`NotEqual`](validators::NotEqual)
//! - **Ordering**: [`Less`](validators::Less), [`LessOrEqual`](validators::LessOrEqual),
//!   [`Greater`](validators::Greater), [`GreaterOrEqual`](validators::GreaterOrEqual)
//! - **Nil-ness**: [`Nil`](validators::Nil), [`NotNil`](validators::NotNil)
//! - **Sign**: [`Positive`](validators::Positive), [`Negative`](validators::Negative)
//! - **Boolean**: [`IsTrue`](validators::IsTrue), [`IsFalse`](validators::IsFalse)
//!
//! ## Feature Flags
//!
//! - `complex` (default): constraint impls for `num_complex::Complex`
//! - `serde`: `Serialize` for errors and `ValidationError::to_json_value`
//! - `tracing`: trace events when a composite validator rejects

// ValidationError is the fundamental error type for all validators; boxing it
// would add indirection to every validation call.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<Or<Not<...>, ...>, ...>) produces complex types
// that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
