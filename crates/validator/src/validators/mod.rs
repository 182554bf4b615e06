//! Built-in validators
//!
//! Generic comparison and predicate primitives. Each one is restricted by a
//! constraint category from [`foundation::constraints`](crate::foundation::constraints),
//! so a check that makes no sense for a type does not compile.
//!
//! # Categories
//!
//! - **Basic**: `valid`, `invalid`
//! - **Equality**: `equal`, `not_equal` and their `_by` variants
//! - **Ordering**: `less`, `less_or_equal`, `greater`, `greater_or_equal`
//!   and their `_by` variants
//! - **Nil-ness**: `nil`, `not_nil`
//! - **Sign**: `positive`, `negative`
//! - **Boolean**: `is_true`, `is_false`
//!
//! # Examples
//!
//! ```rust
//! use sentinel_validator::prelude::*;
//!
//! let percentage = greater_or_equal(0.0).and(less_or_equal(100.0));
//! assert!(percentage.validate(&99.5).is_ok());
//! assert!(percentage.validate(&-1.0).is_err());
//! ```

pub mod basic;
pub mod boolean;
pub mod equality;
pub mod nil;
pub mod ordering;
pub mod sign;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use basic::{Invalid, Valid, invalid, valid};

pub use equality::{
    Equal, Equivalence, NaturalEq, NotEqual, equal, equal_by, not_equal, not_equal_by,
};

pub use ordering::{
    ByOrdering, Comparator, Greater, GreaterOrEqual, GreaterOrEqualBy, Less, LessOrEqual,
    LessOrEqualBy, Natural, greater, greater_by, greater_or_equal, greater_or_equal_by, less,
    less_by, less_or_equal, less_or_equal_by,
};

pub use nil::{Nil, NotNil, nil, not_nil};

pub use sign::{Negative, Positive, negative, positive};

pub use boolean::{IsFalse, IsTrue, is_false, is_true};
