//! Element trait: the numeric contract matrix cells must satisfy

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Trait for types that can be elements of a matrix
///
/// Connects Rust's primitive numeric types to the generic matrix code.
/// Implemented for `f32`, `f64` and all fixed-width integer types.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - basic value-type requirements
/// - `Zero + One` - additive and multiplicative identities (num-traits)
/// - arithmetic operators and their assign forms (`Output = Self`)
/// - `PartialOrd` - comparison for min/max reductions
///
/// Note: `Neg` is NOT required since unsigned types don't support it.
/// Negation is handled via the `to_f64`/`from_f64` conversions where the
/// linear-algebra kernels need it.
pub trait Element:
    Copy
    + Send
    + Sync
    + 'static
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + PartialOrd
    + fmt::Display
    + fmt::Debug
{
    /// Convert to f64 for the shared f64 scratch kernels (LU, Gauss-Jordan,
    /// power iteration). Lossy for 64-bit integers beyond 2^53.
    fn to_f64(self) -> f64;

    /// Convert from f64 back to this type (rounding to the nearest value
    /// for integers, so exact integer results that land an epsilon off in
    /// f64 arithmetic convert back cleanly).
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_element_float {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $t
                }
            }
        )*
    };
}

macro_rules! impl_element_int {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v.round() as $t
                }
            }
        )*
    };
}

impl_element_float!(f32, f64);
impl_element_int!(i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities() {
        assert_eq!(<f64 as Zero>::zero(), 0.0);
        assert_eq!(<i32 as One>::one(), 1);
        assert!(<u8 as Zero>::zero().is_zero());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(f32::from_f64(2.5).to_f64(), 2.5f32 as f64);
        assert_eq!(i32::from_f64(42.9), 43);
        assert_eq!(u16::from_f64(7.0), 7);
    }

    #[test]
    fn test_integer_from_f64_rounds_to_nearest() {
        // An exact integer result that f64 arithmetic lands just below
        // must not be truncated toward zero.
        assert_eq!(i64::from_f64(3.0 - 1e-14), 3);
        assert_eq!(i64::from_f64(-3.0 + 1e-14), -3);
        assert_eq!(i32::from_f64(2.5), 3);
        assert_eq!(i32::from_f64(-2.5), -3);
        assert_eq!(u8::from_f64(9.999_999), 10);
    }
}
