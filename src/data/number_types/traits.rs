//! # Traits
//!
//! The element types that vectors and matrices can be defined over. Both integers and floating
//! point numbers are supported, with the arithmetic semantics of the underlying primitive: integer
//! operations wrap around on overflow, floating point operations follow IEEE 754.
use std::fmt::{Debug, Display};

use num_traits::{NumCast, One, ToPrimitive, Zero};

/// Element of a `Vector` or `Matrix`.
///
/// Implemented for all primitive integer and floating point types.
pub trait Number:
    Copy +
    PartialEq +
    PartialOrd +
    Zero + // Additive identity
    One + // Multiplicative identity
    NumCast +
    Display +
    Debug +
{
    /// Addition, wrapping around on integer overflow.
    fn plus(self, rhs: Self) -> Self;
    /// Subtraction, wrapping around on integer overflow.
    fn minus(self, rhs: Self) -> Self;
    /// Multiplication, wrapping around on integer overflow.
    fn times(self, rhs: Self) -> Self;
    /// Division.
    ///
    /// Callers are responsible for checking that `rhs` is not zero; for integers, division by zero
    /// panics.
    fn divided_by(self, rhs: Self) -> Self;
    /// Raise to a real valued power.
    ///
    /// Integers are raised through `f64` and the result is truncated towards zero, such that
    /// negative exponents are allowed.
    ///
    /// # Return value
    ///
    /// `None` if the result is not defined for this type, for example a fractional power of a
    /// negative number, or an integer result that can't be represented.
    fn pow_real(self, exponent: Self) -> Option<Self>;
    /// Absolute value; the identity for unsigned types.
    fn magnitude(self) -> Self;
}

macro_rules! impl_number_integer {
    ($t:ty, $magnitude:expr) => {
        impl Number for $t {
            fn plus(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            fn minus(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            fn times(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            fn divided_by(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }

            fn pow_real(self, exponent: Self) -> Option<Self> {
                let value = self.to_f64()?.powf(exponent.to_f64()?);
                if value.is_nan() {
                    return None;
                }

                <$t as NumCast>::from(value.trunc())
            }

            fn magnitude(self) -> Self {
                $magnitude(self)
            }
        }
    }
}

macro_rules! impl_number_float {
    ($t:ty) => {
        impl Number for $t {
            fn plus(self, rhs: Self) -> Self {
                self + rhs
            }

            fn minus(self, rhs: Self) -> Self {
                self - rhs
            }

            fn times(self, rhs: Self) -> Self {
                self * rhs
            }

            fn divided_by(self, rhs: Self) -> Self {
                self / rhs
            }

            fn pow_real(self, exponent: Self) -> Option<Self> {
                let value = self.powf(exponent);
                // NaN in, NaN out is not a domain error.
                if value.is_nan() && !self.is_nan() && !exponent.is_nan() {
                    None
                } else {
                    Some(value)
                }
            }

            fn magnitude(self) -> Self {
                self.abs()
            }
        }
    }
}

impl_number_integer!(i8, i8::wrapping_abs);
impl_number_integer!(i16, i16::wrapping_abs);
impl_number_integer!(i32, i32::wrapping_abs);
impl_number_integer!(i64, i64::wrapping_abs);
impl_number_integer!(i128, i128::wrapping_abs);
impl_number_integer!(isize, isize::wrapping_abs);
impl_number_integer!(u8, std::convert::identity);
impl_number_integer!(u16, std::convert::identity);
impl_number_integer!(u32, std::convert::identity);
impl_number_integer!(u64, std::convert::identity);
impl_number_integer!(u128, std::convert::identity);
impl_number_integer!(usize, std::convert::identity);

impl_number_float!(f32);
impl_number_float!(f64);

#[cfg(test)]
mod test {
    use assert_approx_eq::assert_approx_eq;

    use crate::data::number_types::traits::Number;

    #[test]
    fn integer_overflow_wraps() {
        assert_eq!(i8::MAX.plus(1), i8::MIN);
        assert_eq!(0u8.minus(1), u8::MAX);
        assert_eq!(i32::MAX.times(2), -2);
        assert_eq!(i32::MIN.divided_by(-1), i32::MIN);
    }

    #[test]
    fn integer_pow_real() {
        assert_eq!(3i32.pow_real(2), Some(9));
        assert_eq!((-2i64).pow_real(3), Some(-8));
        // 2^-1 = 0.5, truncated
        assert_eq!(2i32.pow_real(-1), Some(0));
        // 0^-1 is infinite
        assert_eq!(0i32.pow_real(-1), None);
        // Doesn't fit
        assert_eq!(2u8.pow_real(9), None);
    }

    #[test]
    fn float_pow_real() {
        assert_approx_eq!(4f64.pow_real(0.5).unwrap(), 2f64);
        assert_approx_eq!(2f64.pow_real(-2f64).unwrap(), 0.25f64);
        assert_eq!((-8f64).pow_real(1f64 / 3f64), None);
        assert!(f64::NAN.pow_real(2f64).unwrap().is_nan());
        assert_eq!((-2f32).pow_real(2f32), Some(4f32));
    }

    #[test]
    fn magnitude() {
        assert_eq!((-5i32).magnitude(), 5);
        assert_eq!(5u32.magnitude(), 5);
        assert_eq!((-0.5f64).magnitude(), 0.5);
    }
}
