//! Adapter that turns a plain function into a validator.
//!
//! ```rust
//! use sentinel_validator::combinators::from_fn;
//! use sentinel_validator::foundation::{Validate, ValidationError};
//!
//! let even = from_fn(|n: &u32| {
//!     if n % 2 == 0 {
//!         Ok(())
//!     } else {
//!         Err(ValidationError::new("even", format!("{n} is odd")))
//!     }
//! });
//!
//! assert!(even.validate(&8).is_ok());
//! assert_eq!(even.validate(&7).unwrap_err().message, "7 is odd");
//! ```

use crate::foundation::{Validate, ValidationError};
use std::fmt;
use std::marker::PhantomData;

/// A validator backed by a function `Fn(&T) -> Result<(), ValidationError>`.
///
/// Created with [`from_fn`].
pub struct ValidateFn<T: ?Sized, F> {
    f: F,
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> ValidateFn<T, F>
where
    F: Fn(&T) -> Result<(), ValidationError>,
{
    /// Wraps `f` as a validator.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _input: PhantomData,
        }
    }

    /// Extracts the wrapped function.
    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<T: ?Sized, F> Validate for ValidateFn<T, F>
where
    F: Fn(&T) -> Result<(), ValidationError>,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        (self.f)(input)
    }
}

// Clone impl - manual because T is only a marker
impl<T: ?Sized, F: Clone> Clone for ValidateFn<T, F> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _input: PhantomData,
        }
    }
}

impl<T: ?Sized, F: Copy> Copy for ValidateFn<T, F> {}

impl<T: ?Sized, F> fmt::Debug for ValidateFn<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidateFn")
            .field("input", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

/// Adapts a function into a validator.
///
/// Any `Fn(&T) -> Result<(), ValidationError>` becomes a
/// [`Validate<Input = T>`](Validate) with no other ceremony.
pub fn from_fn<T: ?Sized, F>(f: F) -> ValidateFn<T, F>
where
    F: Fn(&T) -> Result<(), ValidationError>,
{
    ValidateFn::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;

    fn non_blank(input: &str) -> Result<(), ValidationError> {
        if input.trim().is_empty() {
            Err(ValidationError::new("non_blank", "must not be blank"))
        } else {
            Ok(())
        }
    }

    #[test]
    fn test_fn_item_as_validator() {
        let validator = from_fn(non_blank);
        assert!(validator.validate("x").is_ok());
        assert_eq!(validator.validate("  ").unwrap_err().code, "non_blank");
    }

    #[test]
    fn test_closure_composes() {
        let short = from_fn(|s: &str| {
            if s.len() <= 3 {
                Ok(())
            } else {
                Err(ValidationError::new("short", "too long"))
            }
        });
        let validator = from_fn(non_blank).and(short);

        assert!(validator.validate("abc").is_ok());
        assert!(validator.validate("abcd").is_err());
    }

    #[test]
    fn test_debug_names_input_type() {
        let validator = from_fn(|_: &u8| Ok(()));
        assert!(format!("{validator:?}").contains("u8"));
    }
}
