//! Sealed constraint categories for value types
//!
//! Primitive validators are generic over the type they check, and these traits
//! restrict which primitives apply to which types. Categories compose through
//! supertraits, so every bound is resolved at compile time:
//!
//! ```text
//! Equatable
//!   └─ Ordered
//!        ├─ Real ── Integer ── Signed | Unsigned
//!        │     └─ Float
//!        └─ Text
//! Boolean, Complex, Map<K, V>, Slice<T>
//! ```
//!
//! The numeric, boolean, text, complex and container categories are sealed:
//! the set of types in each is closed. [`Equatable`] covers every
//! `PartialEq` type, and [`Nillable`] is open so callers can classify their
//! own pointer-like types.
//!
//! ## Usage
//!
//! ```rust
//! use sentinel_validator::foundation::constraints::Real;
//!
//! fn is_zero<R: Real>(value: R) -> bool {
//!     value == R::ZERO
//! }
//!
//! assert!(is_zero(0u8));
//! assert!(!is_zero(-1.5f64));
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// Sealed module - prevents external implementations
// ============================================================================

mod sealed {
    pub trait Sealed {}
}

// ============================================================================
// Category Traits
// ============================================================================

/// Types whose values can be compared for equality.
///
/// Blanket-implemented for every `PartialEq` type.
pub trait Equatable: PartialEq {}

impl<T: PartialEq + ?Sized> Equatable for T {}

/// Types with a total three-way comparison.
///
/// Covers every [`Real`] and [`Text`] type. Floats are ordered with NaN below
/// every number and equal to itself, while `-0.0` and `0.0` compare equal.
pub trait Ordered: Equatable + sealed::Sealed {
    /// Compares `self` with `other`.
    fn compare(&self, other: &Self) -> Ordering;
}

/// Boolean types.
pub trait Boolean: Equatable + Copy + sealed::Sealed {
    /// The true value.
    const TRUE: Self;
    /// The false value.
    const FALSE: Self;
}

/// Real numbers: every integer and floating-point type.
pub trait Real: Ordered + Copy {
    /// The additive identity.
    const ZERO: Self;
}

/// Integer types, signed or unsigned.
pub trait Integer: Real {}

/// Signed integer types.
pub trait Signed: Integer {}

/// Unsigned integer types.
pub trait Unsigned: Integer {}

/// Floating-point types.
pub trait Float: Real {}

/// Complex number types.
pub trait Complex: Equatable + Copy + sealed::Sealed {
    /// The real component type.
    type Part: Float;

    /// Returns the real part.
    fn re(&self) -> Self::Part;

    /// Returns the imaginary part.
    fn im(&self) -> Self::Part;
}

/// String types.
pub trait Text: Ordered {
    /// Returns the text as a string slice.
    fn as_text(&self) -> &str;
}

/// Map types with keys `K` and values `V`.
pub trait Map<K: Equatable, V>: sealed::Sealed {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns true if the map has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value stored under `key`.
    fn lookup(&self, key: &K) -> Option<&V>;
}

/// Contiguous sequences of `T`.
pub trait Slice<T>: sealed::Sealed {
    /// Returns the elements as a slice.
    fn as_elements(&self) -> &[T];
}

/// Types that may or may not be able to hold an absent value.
///
/// `Option<T>` and raw pointers are nillable. Plain values (numbers, strings,
/// owned containers) and non-null smart pointers are classified as not
/// nillable, so they never satisfy [`Nil`](crate::validators::Nil).
///
/// # Examples
///
/// ```rust
/// use sentinel_validator::foundation::constraints::Nillable;
///
/// assert!(None::<u8>.is_nil());
/// assert!(!Some(3).is_nil());
/// assert!(!<i32 as Nillable>::NILLABLE);
/// ```
pub trait Nillable {
    /// Whether values of this type can be absent at all.
    const NILLABLE: bool;

    /// Returns true if this value is absent.
    fn is_nil(&self) -> bool;
}

// ============================================================================
// Sealed Implementations
// ============================================================================

macro_rules! impl_integer {
    ($category:ident: $($t:ty),+ $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Ordered for $t {
            #[inline]
            fn compare(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
        }

        impl Real for $t {
            const ZERO: Self = 0;
        }

        impl Integer for $t {}
        impl $category for $t {}
    )+};
}

impl_integer!(Signed: i8, i16, i32, i64, i128, isize);
impl_integer!(Unsigned: u8, u16, u32, u64, u128, usize);

macro_rules! impl_float {
    ($($t:ty),+ $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Ordered for $t {
            #[inline]
            fn compare(&self, other: &Self) -> Ordering {
                match self.partial_cmp(other) {
                    Some(ordering) => ordering,
                    // At least one side is NaN; NaN sorts first.
                    None => other.is_nan().cmp(&self.is_nan()),
                }
            }
        }

        impl Real for $t {
            const ZERO: Self = 0.0;
        }

        impl Float for $t {}
    )+};
}

impl_float!(f32, f64);

impl sealed::Sealed for bool {}

impl Boolean for bool {
    const TRUE: Self = true;
    const FALSE: Self = false;
}

impl sealed::Sealed for String {}

impl Ordered for String {
    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

impl Text for String {
    fn as_text(&self) -> &str {
        self
    }
}

impl sealed::Sealed for &str {}

impl Ordered for &str {
    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

impl Text for &str {
    fn as_text(&self) -> &str {
        self
    }
}

impl sealed::Sealed for Cow<'_, str> {}

impl Ordered for Cow<'_, str> {
    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

impl Text for Cow<'_, str> {
    fn as_text(&self) -> &str {
        self
    }
}

#[cfg(feature = "complex")]
macro_rules! impl_complex {
    ($($t:ty),+ $(,)?) => {$(
        impl sealed::Sealed for num_complex::Complex<$t> {}

        impl Complex for num_complex::Complex<$t> {
            type Part = $t;

            fn re(&self) -> $t {
                self.re
            }

            fn im(&self) -> $t {
                self.im
            }
        }
    )+};
}

#[cfg(feature = "complex")]
impl_complex!(f32, f64);

impl<K, V, S> sealed::Sealed for HashMap<K, V, S> {}

impl<K: Eq + Hash, V, S: BuildHasher> Map<K, V> for HashMap<K, V, S> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V> sealed::Sealed for BTreeMap<K, V> {}

impl<K: Ord, V> Map<K, V> for BTreeMap<K, V> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<T> sealed::Sealed for [T] {}

impl<T> Slice<T> for [T] {
    fn as_elements(&self) -> &[T] {
        self
    }
}

impl<T> sealed::Sealed for Vec<T> {}

impl<T> Slice<T> for Vec<T> {
    fn as_elements(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> sealed::Sealed for [T; N] {}

impl<T, const N: usize> Slice<T> for [T; N] {
    fn as_elements(&self) -> &[T] {
        self
    }
}

// ============================================================================
// Nillable Implementations
// ============================================================================

impl<T> Nillable for Option<T> {
    const NILLABLE: bool = true;

    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nillable for *const T {
    const NILLABLE: bool = true;

    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nillable for *mut T {
    const NILLABLE: bool = true;

    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

macro_rules! impl_not_nillable {
    ($($t:ty),+ $(,)?) => {$(
        impl Nillable for $t {
            const NILLABLE: bool = false;

            #[inline]
            fn is_nil(&self) -> bool {
                false
            }
        }
    )+};
}

impl_not_nillable!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, (),
    String, str,
);

macro_rules! impl_not_nillable_generic {
    ($($t:ty),+ $(,)?) => {$(
        impl<T: ?Sized> Nillable for $t {
            const NILLABLE: bool = false;

            #[inline]
            fn is_nil(&self) -> bool {
                false
            }
        }
    )+};
}

impl_not_nillable_generic!(&T, Box<T>, Rc<T>, Arc<T>);

impl<T> Nillable for Vec<T> {
    const NILLABLE: bool = false;

    fn is_nil(&self) -> bool {
        false
    }
}

impl<K, V, S> Nillable for HashMap<K, V, S> {
    const NILLABLE: bool = false;

    fn is_nil(&self) -> bool {
        false
    }
}

impl<K, V> Nillable for BTreeMap<K, V> {
    const NILLABLE: bool = false;

    fn is_nil(&self) -> bool {
        false
    }
}

// ============================================================================
// Tests
// ============================================================================
