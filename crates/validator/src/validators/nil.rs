//! Nil-ness validators
//!
//! Whether a type can be nil at all is decided by its [`Nillable`]
//! classification. Values of non-nillable types never satisfy [`Nil`], so
//! they always satisfy [`NotNil`].

use std::any::type_name;
use std::fmt::{self, Debug};
use std::marker::PhantomData;

use crate::combinators::Not;
use crate::foundation::constraints::Nillable;
use crate::foundation::{Validate, ValidationError};

/// Validates that a value is nil (`None`, a null pointer).
///
/// # Examples
///
/// ```
/// use sentinel_validator::validators::nil;
/// use sentinel_validator::foundation::Validate;
///
/// assert!(nil::<Option<u8>>().validate(&None).is_ok());
/// assert!(nil::<Option<u8>>().validate(&Some(1)).is_err());
/// assert!(nil::<i32>().validate(&1).is_err());
/// ```
pub struct Nil<T: ?Sized> {
    _input: PhantomData<fn(&T)>,
}

impl<T: Nillable + Debug + ?Sized> Validate for Nil<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        let reason = if !T::NILLABLE {
            "is not nillable"
        } else if input.is_nil() {
            return Ok(());
        } else {
            "is not nil"
        };

        let actual = format!("{input:?}");
        Err(ValidationError::new(
            "nil",
            format!("{actual} of type {} {reason}", type_name::<T>()),
        )
        .with_param("actual", actual)
        .with_param("type", type_name::<T>()))
    }
}

impl<T: ?Sized> Clone for Nil<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Nil<T> {}

impl<T: ?Sized> Default for Nil<T> {
    fn default() -> Self {
        Self {
            _input: PhantomData,
        }
    }
}

impl<T: ?Sized> fmt::Debug for Nil<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nil<{}>", type_name::<T>())
    }
}

/// Validates that a value is not nil.
pub type NotNil<T> = Not<Nil<T>>;

/// Creates a validator accepting nil values.
#[must_use]
pub fn nil<T: Nillable + Debug + ?Sized>() -> Nil<T> {
    Nil::default()
}

/// Creates a validator accepting non-nil values.
///
/// Every value of a non-nillable type is accepted.
#[must_use]
pub fn not_nil<T: Nillable + Debug + ?Sized>() -> NotNil<T> {
    Not::new(nil())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil_option() {
        assert!(nil::<Option<String>>().validate(&None).is_ok());

        let err = nil::<Option<u8>>().validate(&Some(3)).unwrap_err();
        assert_eq!(err.code, "nil");
        assert_eq!(
            err.message,
            "Some(3) of type core::option::Option<u8> is not nil"
        );
    }

    #[test]
    fn test_nil_non_nillable() {
        let err = nil::<i32>().validate(&1).unwrap_err();
        assert_eq!(err.message, "1 of type i32 is not nillable");
        assert!(not_nil::<i32>().validate(&1).is_ok());
        assert!(not_nil::<str>().validate("").is_ok());
    }

    #[test]
    fn test_nil_raw_pointer() {
        let value = 7u8;
        let null: *const u8 = std::ptr::null();
        let non_null: *const u8 = &value;

        assert!(nil::<*const u8>().validate(&null).is_ok());
        assert!(nil::<*const u8>().validate(&non_null).is_err());
        assert!(not_nil::<*const u8>().validate(&non_null).is_ok());
    }

    #[test]
    fn test_not_nil_option() {
        assert!(not_nil::<Option<u8>>().validate(&Some(0)).is_ok());
        assert_eq!(
            not_nil::<Option<u8>>().validate(&None).unwrap_err().code,
            "not"
        );
    }
}
