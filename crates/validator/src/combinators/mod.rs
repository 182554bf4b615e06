//! Validator combinators
//!
//! Combinators build new validators out of existing ones. Every combinator is
//! itself a validator, so they nest without limit.
//!
//! - [`And`] / [`and_all`]: accept when every child accepts
//! - [`Or`] / [`or_any`]: accept when at least one child accepts
//! - [`Not`]: invert a verdict
//! - [`WithValue`] / [`WithValues`]: validate values projected from the input
//! - [`ValidateFn`]: adapt a plain function
//!
//! Logical combinators never short-circuit. All children run on every call,
//! in argument order, and composite errors list child failures in that order.

pub mod and;
pub mod error;
pub mod func;
pub mod not;
pub mod or;
pub mod value;

pub use and::{And, AndAll, and, and_all};
pub use error::CombinatorError;
pub use func::{ValidateFn, from_fn};
pub use not::{Not, not};
pub use or::{Or, OrAny, or, or_any};
pub use value::{WithValue, WithValues, with_value, with_values};
