// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::ops::{Mul, Sub};

macro_rules! saturating_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $intrinsic:ident) => {
        impl $trait_name for $t {
            #[inline]
            fn $method(self, v: Self) -> Self {
                <$t>::$intrinsic(self, v)
            }
        }
    };
}

/// A trait for types that support saturating subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::ops::saturating_arithmetic::SaturatingSubVal;
///
/// let a: u8 = 50;
/// let b: u8 = 100;
/// assert_eq!(a.saturating_sub_val(b), 0); // Clamped at the minimum
/// let c: u8 = 20;
/// assert_eq!(a.saturating_sub_val(c), 30); // No underflow
/// ```
pub trait SaturatingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs saturating subtraction by value, clamping at the numeric bounds.
    fn saturating_sub_val(self, v: Self) -> Self;
}

saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u8, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u16, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u32, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u64, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, usize, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u128, saturating_sub);

saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i8, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i16, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i32, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i64, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, isize, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i128, saturating_sub);

/// A trait for types that support saturating multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::ops::saturating_arithmetic::SaturatingMulVal;
///
/// let a: u8 = 20;
/// let b: u8 = 10;
/// assert_eq!(a.saturating_mul_val(b), 200); // No overflow
/// let c: u8 = 20;
/// assert_eq!(a.saturating_mul_val(c), u8::MAX); // Clamped at the maximum
/// ```
pub trait SaturatingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs saturating multiplication by value, clamping at the numeric bounds.
    fn saturating_mul_val(self, v: Self) -> Self;
}

saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, u8, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, u16, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, u32, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, u64, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, usize, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, u128, saturating_mul);

saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, i8, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, i16, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, i32, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, i64, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, isize, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, i128, saturating_mul);

#[cfg(test)]
mod tests {
    use super::*;

    fn sub_generic<T: SaturatingSubVal>(a: T, b: T) -> T {
        a.saturating_sub_val(b)
    }

    fn mul_generic<T: SaturatingMulVal>(a: T, b: T) -> T {
        a.saturating_mul_val(b)
    }

    #[test]
    fn test_saturating_sub() {
        assert_eq!(sub_generic(100i64, 25), 75);
        assert_eq!(sub_generic(i64::MIN, 1), i64::MIN);
        assert_eq!(sub_generic(0u8, 1), 0);
    }

    #[test]
    fn test_saturating_mul() {
        assert_eq!(mul_generic(60i64, 100), 6000);
        assert_eq!(mul_generic(i64::MAX, 2), i64::MAX);
        assert_eq!(mul_generic(i64::MIN, 2), i64::MIN);
    }
}
