//! Sign validators

use std::fmt::Debug;

use crate::foundation::constraints::Real;
use crate::validators::ordering::{Greater, Less, greater, less};

/// Validates that a number is strictly greater than zero.
pub type Positive<R> = Greater<R>;

/// Validates that a number is strictly less than zero.
pub type Negative<R> = Less<R>;

/// Creates a validator accepting numbers `> 0`.
///
/// # Examples
///
/// ```
/// use sentinel_validator::validators::positive;
/// use sentinel_validator::foundation::Validate;
///
/// assert!(positive().validate(&1).is_ok());
/// assert!(positive().validate(&0).is_err());
/// assert!(positive::<f32>().validate(&-0.5).is_err());
/// ```
#[must_use]
pub fn positive<R: Real + Debug>() -> Positive<R> {
    greater(R::ZERO)
}

/// Creates a validator accepting numbers `< 0`.
///
/// NaN sorts below every number and is therefore accepted.
#[must_use]
pub fn negative<R: Real + Debug>() -> Negative<R> {
    less(R::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_zero_is_neither() {
        assert!(positive::<i32>().validate(&0).is_err());
        assert!(negative::<i32>().validate(&0).is_err());
        assert!(positive::<f64>().validate(&-0.0).is_err());
        assert!(negative::<f64>().validate(&-0.0).is_err());
    }

    #[test]
    fn test_signs() {
        assert!(positive::<u64>().validate(&1).is_ok());
        assert!(negative::<i8>().validate(&-1).is_ok());
        assert!(negative::<i8>().validate(&1).is_err());
        assert!(positive::<f32>().validate(&f32::INFINITY).is_ok());
    }

    #[test]
    fn test_nan_is_negative() {
        assert!(negative::<f64>().validate(&f64::NAN).is_ok());
        assert!(positive::<f64>().validate(&f64::NAN).is_err());
    }
}
