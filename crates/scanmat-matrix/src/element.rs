use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::{Num, NumCast};

/// A numeric type that can be stored in a [`crate::Matrix`].
///
/// One matrix holds exactly one element type; all operations are monomorphised
/// per element type.
///
/// Integer arithmetic inside the engine wraps around on overflow, in debug and
/// release builds alike; floats follow IEEE semantics.
pub trait Element:
    Copy + PartialOrd + Debug + Display + FromStr + Num + NumCast + Send + Sync + 'static
{
    /// Adds `rhs` and reports whether the result wrapped around or left the finite range.
    fn overflowing_add_elem(self, rhs: Self) -> (Self, bool);

    /// `self + rhs`, wrapping for integers.
    fn wrapping_add_elem(self, rhs: Self) -> Self;

    /// `self - rhs`, wrapping for integers.
    fn wrapping_sub_elem(self, rhs: Self) -> Self;

    /// `self * rhs`, wrapping for integers.
    fn wrapping_mul_elem(self, rhs: Self) -> Self;

    /// Absolute value. The identity for unsigned types; `MIN` of a signed type
    /// wraps to itself.
    fn abs_elem(self) -> Self;
}

macro_rules! impl_element_int {
    ($abs:expr; $($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn overflowing_add_elem(self, rhs: Self) -> (Self, bool) {
                    self.overflowing_add(rhs)
                }

                #[inline]
                fn wrapping_add_elem(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn wrapping_sub_elem(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn wrapping_mul_elem(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn abs_elem(self) -> Self {
                    let abs: fn(Self) -> Self = $abs;
                    abs(self)
                }
            }
        )*
    };
}

macro_rules! impl_element_float {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn overflowing_add_elem(self, rhs: Self) -> (Self, bool) {
                    let sum = self + rhs;
                    (sum, self.is_finite() && rhs.is_finite() && !sum.is_finite())
                }

                #[inline]
                fn wrapping_add_elem(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_sub_elem(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn wrapping_mul_elem(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn abs_elem(self) -> Self {
                    self.abs()
                }
            }
        )*
    };
}

impl_element_int!(|v| v; u8, u16, u32, u64);
impl_element_int!(|v| v.wrapping_abs(); i8, i16, i32, i64);
impl_element_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_wraparound_is_reported() {
        assert_eq!(250u8.overflowing_add_elem(10), (4, true));
        assert_eq!(100i8.overflowing_add_elem(-120), (-20, false));
        assert!((-100i8).overflowing_add_elem(-100).1);
    }

    #[test]
    fn test_float_overflow_is_reported() {
        let (sum, overflow) = f32::MAX.overflowing_add_elem(f32::MAX);
        assert!(sum.is_infinite());
        assert!(overflow);
        assert!(!f64::INFINITY.overflowing_add_elem(1.0).1);
    }

    #[test]
    fn test_abs() {
        assert_eq!((-3i32).abs_elem(), 3);
        assert_eq!(3u16.abs_elem(), 3);
        assert_eq!((-2.5f64).abs_elem(), 2.5);
        assert_eq!(i8::MIN.abs_elem(), i8::MIN);
        assert_eq!(u64::MAX.abs_elem(), u64::MAX);
    }

    #[test]
    fn test_integer_ops_wrap() {
        assert_eq!(200u8.wrapping_add_elem(100), 44);
        assert_eq!(3u8.wrapping_sub_elem(5), 254);
        assert_eq!(16u8.wrapping_mul_elem(17), 16);
        assert_eq!(i16::MAX.wrapping_add_elem(1), i16::MIN);
        assert_eq!(1.5f64.wrapping_mul_elem(2.0), 3.0);
    }
}
