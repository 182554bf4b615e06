//! Unconditional validators

use std::any::type_name;
use std::fmt::{self, Debug};
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Accepts every value.
///
/// Useful as scaffolding while a real check is written, and as the neutral
/// element when composing.
pub struct Valid<T: ?Sized> {
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Validate for Valid<T> {
    type Input = T;

    #[inline]
    fn validate(&self, _input: &T) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Rejects every value.
///
/// ```
/// use sentinel_validator::validators::invalid;
/// use sentinel_validator::foundation::Validate;
///
/// let err = invalid::<u8>().validate(&7).unwrap_err();
/// assert_eq!(err.message, "7 of type u8 is always invalid");
/// ```
pub struct Invalid<T: ?Sized> {
    _input: PhantomData<fn(&T)>,
}

impl<T: Debug + ?Sized> Validate for Invalid<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        let actual = format!("{input:?}");
        Err(ValidationError::new(
            "invalid",
            format!("{actual} of type {} is always invalid", type_name::<T>()),
        )
        .with_param("actual", actual)
        .with_param("type", type_name::<T>()))
    }
}

macro_rules! impl_marker_traits {
    ($($name:ident),+) => {$(
        impl<T: ?Sized> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T: ?Sized> Copy for $name<T> {}

        impl<T: ?Sized> Default for $name<T> {
            fn default() -> Self {
                Self { _input: PhantomData }
            }
        }

        impl<T: ?Sized> Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>", stringify!($name), type_name::<T>())
            }
        }
    )+};
}

impl_marker_traits!(Valid, Invalid);

/// Creates a validator that accepts every value.
#[must_use]
pub fn valid<T: ?Sized>() -> Valid<T> {
    Valid::default()
}

/// Creates a validator that rejects every value.
#[must_use]
pub fn invalid<T: Debug + ?Sized>() -> Invalid<T> {
    Invalid::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_accepts_anything() {
        assert!(valid::<i64>().validate(&i64::MIN).is_ok());
        assert!(valid::<str>().validate("").is_ok());
        assert!(valid::<[u8]>().validate(&[1, 2, 3]).is_ok());
    }

    #[test]
    fn test_invalid_rejects_anything() {
        let err = invalid::<str>().validate("x").unwrap_err();
        assert_eq!(err.code, "invalid");
        assert_eq!(err.message, "\"x\" of type str is always invalid");
        assert_eq!(err.param("type"), Some("str"));
    }

    #[test]
    fn test_debug_names_type() {
        assert_eq!(format!("{:?}", valid::<u8>()), "Valid<u8>");
    }
}
