use core::fmt::{Debug, Display};
use core::ops::*;

/// Defines an additive identity element for `Self`.
///
/// # Laws
///
/// ```text
/// a + 0 = a       ∀ a ∈ Self
/// 0 + a = a       ∀ a ∈ Self
/// ```
pub trait Zero: Sized + Add<Self, Output = Self> {
    /// Returns the additive identity element of `Self`, `0`.
    fn zero() -> Self;

    /// Returns `true` if `self` is equal to the additive identity.
    fn is_zero(&self) -> bool;
}

/// Defines a multiplicative identity element for `Self`.
///
/// # Laws
///
/// ```text
/// a * 1 = a       ∀ a ∈ Self
/// 1 * a = a       ∀ a ∈ Self
/// ```
pub trait One: Sized + Mul<Self, Output = Self> {
    /// Returns the multiplicative identity element of `Self`, `1`.
    fn one() -> Self;

    /// Returns `true` if `self` is equal to the multiplicative identity.
    fn is_one(&self) -> bool;
}

macro_rules! zero_one_impl {
    ($($t:ty),+; $z:expr, $o:expr) => {
        $(impl Zero for $t {
            #[inline(always)]
            fn zero() -> $t {
                $z
            }
            #[inline(always)]
            fn is_zero(&self) -> bool {
                *self == $z
            }
        }
        impl One for $t {
            #[inline(always)]
            fn one() -> $t {
                $o
            }
            #[inline(always)]
            fn is_one(&self) -> bool {
                *self == $o
            }
        })+
    };
}
zero_one_impl!(usize, u8, u16, u32, u64, u128; 0, 1);
zero_one_impl!(isize, i8, i16, i32, i64, i128; 0, 1);
zero_one_impl!(f32, f64; 0.0, 1.0);
#[cfg(feature = "num-bigint")]
zero_one_impl!(num_bigint::BigInt; num_bigint::BigInt::ZERO, num_bigint::BigInt::from(1i8));

/// A number that supports a square root (E.g. a float).
pub trait NumAlgebraic: Sized {
    #[must_use]
    fn sqrt(&self) -> Self;
}

/// A number that supports the trigonometric functions needed to move between
/// cartesian and polar coordinates.
pub trait NumAnalytic: NumAlgebraic {
    #[must_use]
    fn sin(&self) -> Self;
    #[must_use]
    fn cos(&self) -> Self;
    /// Four quadrant arctangent of `self / x` in radians, `(-π, π]`.
    /// Follows the C library convention `atan2(0, 0) = 0`.
    #[must_use]
    fn atan2(&self, x: &Self) -> Self;
}

// libm names its single precision functions with an `f` suffix.
macro_rules! forward_math_impl {
    ($type:ty, $f:ident, $libm:ident) => {
        #[inline(always)]
        fn $f(&self) -> Self {
            #[cfg(feature = "std")]
            {
                <$type>::$f(*self)
            }
            #[cfg(not(feature = "std"))]
            {
                libm::$libm(*self)
            }
        }
    };
}
macro_rules! num_float_type {
    ($($type:ty, $sqrt:ident, $sin:ident, $cos:ident, $atan2:ident);+) => {
        $(#[cfg(any(feature = "std", feature = "libm"))]
        impl NumAlgebraic for $type {
            forward_math_impl!($type, sqrt, $sqrt);
        }
        #[cfg(any(feature = "std", feature = "libm"))]
        impl NumAnalytic for $type {
            forward_math_impl!($type, sin, $sin);
            forward_math_impl!($type, cos, $cos);
            #[inline(always)]
            fn atan2(&self, x: &Self) -> Self {
                #[cfg(feature = "std")]
                { <$type>::atan2(*self, *x) }
                #[cfg(not(feature = "std"))]
                { libm::$atan2(*self, *x) }
            }
        })+
    };
}
num_float_type!(f32, sqrtf, sinf, cosf, atan2f; f64, sqrt, sin, cos, atan2);

/// The scalar type of complex number components.
///
/// This is a grouping trait, it is implemented for every type with the listed capabilities,
/// which in practice means `f32` and `f64`.
pub trait Real:
    Copy
    + PartialOrd
    + Debug
    + Display
    + Zero
    + One
    + Sub<Output = Self>
    + Neg<Output = Self>
    + NumAnalytic
{
}
impl<T> Real for T where
    T: Copy
        + PartialOrd
        + Debug
        + Display
        + Zero
        + One
        + Sub<Output = T>
        + Neg<Output = T>
        + NumAnalytic
{
}

/// The scalar type of rational components.
///
/// The `wrapping_*` operations never panic. Fixed width integers wrap around on overflow,
/// which is what the default [crate::Rational] operators use.
/// The `checked_*` operations return `None` instead.
pub trait Integer: Clone + PartialEq + Zero + One {
    #[must_use]
    fn wrapping_add(&self, rhs: &Self) -> Self;
    #[must_use]
    fn wrapping_sub(&self, rhs: &Self) -> Self;
    #[must_use]
    fn wrapping_mul(&self, rhs: &Self) -> Self;
    #[must_use]
    fn checked_add(&self, rhs: &Self) -> Option<Self>;
    #[must_use]
    fn checked_sub(&self, rhs: &Self) -> Option<Self>;
    #[must_use]
    fn checked_mul(&self, rhs: &Self) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($T:ty),+) => {
        $(impl Integer for $T {
            #[inline(always)]
            fn wrapping_add(&self, rhs: &Self) -> Self {
                <$T>::wrapping_add(*self, *rhs)
            }
            #[inline(always)]
            fn wrapping_sub(&self, rhs: &Self) -> Self {
                <$T>::wrapping_sub(*self, *rhs)
            }
            #[inline(always)]
            fn wrapping_mul(&self, rhs: &Self) -> Self {
                <$T>::wrapping_mul(*self, *rhs)
            }
            #[inline(always)]
            fn checked_add(&self, rhs: &Self) -> Option<Self> {
                <$T>::checked_add(*self, *rhs)
            }
            #[inline(always)]
            fn checked_sub(&self, rhs: &Self) -> Option<Self> {
                <$T>::checked_sub(*self, *rhs)
            }
            #[inline(always)]
            fn checked_mul(&self, rhs: &Self) -> Option<Self> {
                <$T>::checked_mul(*self, *rhs)
            }
        })+
    };
}
impl_integer!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

#[cfg(feature = "num-bigint")]
mod bigint {
    use super::Integer;
    use num_bigint::BigInt;

    // arbitrary precision never overflows, so both flavours are the plain operations.
    impl Integer for BigInt {
        fn wrapping_add(&self, rhs: &Self) -> Self {
            self + rhs
        }
        fn wrapping_sub(&self, rhs: &Self) -> Self {
            self - rhs
        }
        fn wrapping_mul(&self, rhs: &Self) -> Self {
            self * rhs
        }
        fn checked_add(&self, rhs: &Self) -> Option<Self> {
            Some(self + rhs)
        }
        fn checked_sub(&self, rhs: &Self) -> Option<Self> {
            Some(self - rhs)
        }
        fn checked_mul(&self, rhs: &Self) -> Option<Self> {
            Some(self * rhs)
        }
    }
}

/// Anything that can be added, multiplied and rendered as text.
///
/// Satisfied by [crate::Complex], [crate::Rectangular] and [crate::Rational],
/// so generic code can combine them without knowing which one it holds.
/// [crate::Polar] is not a [Number], as its sums are [crate::Rectangular].
pub trait Number: Clone + Display + Add<Output = Self> + Mul<Output = Self> {}
impl<T: Clone + Display + Add<Output = T> + Mul<Output = T>> Number for T {}
