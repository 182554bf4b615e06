//! Boolean validators

use std::fmt::Debug;

use crate::foundation::constraints::Boolean;
use crate::validators::equality::{Equal, equal};

/// Validates that a boolean value is `true`.
pub type IsTrue<B = bool> = Equal<B>;

/// Validates that a boolean value is `false`.
pub type IsFalse<B = bool> = Equal<B>;

/// Creates a validator accepting `true`.
#[must_use]
pub fn is_true<B: Boolean + Debug>() -> IsTrue<B> {
    equal(B::TRUE)
}

/// Creates a validator accepting `false`.
#[must_use]
pub fn is_false<B: Boolean + Debug>() -> IsFalse<B> {
    equal(B::FALSE)
}
