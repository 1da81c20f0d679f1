//! The capability set shared by all complex number representations.
//!
//! [ComplexNumber] is what a value *is* (its four coordinates and a rendering),
//! [ComplexOps] is what it can *do* with any other complex number.
//! An operation only ever looks at its operand through [ComplexNumber],
//! so representations can be mixed freely. The receiver decides how the operation is computed
//! and therefore also which representation the result has:
//!
//! | receiver        | `add` returns   | `multiply` returns |
//! |-----------------|-----------------|--------------------|
//! | [Rectangular]   | [Rectangular]   | [Rectangular]      |
//! | [Polar]         | [Rectangular]   | [Polar]            |
//! | [Complex]       | [Complex]       | [Complex]          |
//!
//! Addition has no closed form in polar coordinates, which is why [Polar] hands its sums over to [Rectangular].

use crate::*;
use core::fmt;
use core::iter::{Product, Sum};
use core::ops::*;

/// Read access to a complex number, regardless of how it is stored.
///
/// Implementations have to keep the coordinates consistent:
/// ```text
/// magnitude = sqrt(real² + imag²)     real = magnitude·cos(angle)
/// angle     = atan2(imag, real)       imag = magnitude·sin(angle)
/// ```
/// This trait is object safe, e.g. `&dyn ComplexNumber<Real = f64>` is a valid operand for [ComplexOps].
pub trait ComplexNumber: fmt::Display {
    type Real;
    /// cartesian real part
    #[must_use]
    fn real(&self) -> Self::Real;
    /// cartesian imaginary part
    #[must_use]
    fn imag(&self) -> Self::Real;
    /// polar radius, non negative
    #[must_use]
    fn magnitude(&self) -> Self::Real;
    /// polar angle in radians. Not restricted to a range.
    #[must_use]
    fn angle(&self) -> Self::Real;
}

/// Arithmetic with any other [ComplexNumber] of the same scalar type.
///
/// The associated types carry the representation of the result,
/// which is chosen by the receiver and not by the operand.
pub trait ComplexOps: ComplexNumber {
    type Sum: ComplexNumber<Real = Self::Real>;
    type Product: ComplexNumber<Real = Self::Real>;
    #[must_use]
    fn add<C: ComplexNumber<Real = Self::Real> + ?Sized>(&self, other: &C) -> Self::Sum;
    #[must_use]
    fn multiply<C: ComplexNumber<Real = Self::Real> + ?Sized>(&self, other: &C) -> Self::Product;
}

/// A complex number in either representation.
///
/// Use this to hold the results of mixed computations in one type.
/// The operations dispatch to the held representation, so the strategy is the same as
/// calling them on [Rectangular] or [Polar] directly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Complex<T = f64> {
    Rectangular(Rectangular<T>),
    Polar(Polar<T>),
}

impl<T> Complex<T> {
    pub const fn rectangular(re: T, im: T) -> Self {
        Complex::Rectangular(Rectangular::new(re, im))
    }
    pub const fn polar(magnitude: T, angle: T) -> Self {
        Complex::Polar(Polar::new(magnitude, angle))
    }
    pub const fn is_rectangular(&self) -> bool {
        matches!(self, Complex::Rectangular(_))
    }
    pub const fn is_polar(&self) -> bool {
        matches!(self, Complex::Polar(_))
    }
}

impl<T: Real> Complex<T> {
    /// Convert to the rectangular representation. This is a no-op for rectangular values.
    pub fn to_rectangular(&self) -> Rectangular<T> {
        match self {
            Complex::Rectangular(c) => *c,
            Complex::Polar(c) => c.to_rectangular(),
        }
    }
    /// Convert to the polar representation. This is a no-op for polar values.
    pub fn to_polar(&self) -> Polar<T> {
        match self {
            Complex::Rectangular(c) => c.to_polar(),
            Complex::Polar(c) => *c,
        }
    }
}

impl<T> From<Rectangular<T>> for Complex<T> {
    fn from(value: Rectangular<T>) -> Self {
        Complex::Rectangular(value)
    }
}
impl<T> From<Polar<T>> for Complex<T> {
    fn from(value: Polar<T>) -> Self {
        Complex::Polar(value)
    }
}

macro_rules! dispatch {
    ($value:expr, $c:ident => $e:expr) => {
        match $value {
            Complex::Rectangular($c) => $e,
            Complex::Polar($c) => $e,
        }
    };
}

impl<T: Real> ComplexNumber for Complex<T> {
    type Real = T;
    #[inline]
    fn real(&self) -> T {
        dispatch!(self, c => c.real())
    }
    #[inline]
    fn imag(&self) -> T {
        dispatch!(self, c => c.imag())
    }
    #[inline]
    fn magnitude(&self) -> T {
        dispatch!(self, c => c.magnitude())
    }
    #[inline]
    fn angle(&self) -> T {
        dispatch!(self, c => c.angle())
    }
}

impl<T: Real> ComplexOps for Complex<T> {
    type Sum = Complex<T>;
    type Product = Complex<T>;
    fn add<C: ComplexNumber<Real = Self::Real> + ?Sized>(&self, other: &C) -> Self::Sum {
        dispatch!(self, c => ComplexOps::add(c, other).into())
    }
    fn multiply<C: ComplexNumber<Real = Self::Real> + ?Sized>(&self, other: &C) -> Self::Product {
        dispatch!(self, c => ComplexOps::multiply(c, other).into())
    }
}

impl<T: fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, c => fmt::Display::fmt(c, f))
    }
}

// `+` and `*` for every combination of representations.
// The result type is the one chosen by the left hand side, see [ComplexOps].
macro_rules! impl_ops {
    ($(($Lhs:ident, $Rhs:ident)),+) => {
        $(impl<T: Real> Add<$Rhs<T>> for $Lhs<T> {
            type Output = <$Lhs<T> as ComplexOps>::Sum;
            #[inline]
            fn add(self, rhs: $Rhs<T>) -> Self::Output {
                ComplexOps::add(&self, &rhs)
            }
        }
        impl<'a, T: Real> Add<&'a $Rhs<T>> for &'a $Lhs<T> {
            type Output = <$Lhs<T> as ComplexOps>::Sum;
            #[inline]
            fn add(self, rhs: &'a $Rhs<T>) -> Self::Output {
                ComplexOps::add(self, rhs)
            }
        }
        impl<T: Real> Mul<$Rhs<T>> for $Lhs<T> {
            type Output = <$Lhs<T> as ComplexOps>::Product;
            #[inline]
            fn mul(self, rhs: $Rhs<T>) -> Self::Output {
                ComplexOps::multiply(&self, &rhs)
            }
        }
        impl<'a, T: Real> Mul<&'a $Rhs<T>> for &'a $Lhs<T> {
            type Output = <$Lhs<T> as ComplexOps>::Product;
            #[inline]
            fn mul(self, rhs: &'a $Rhs<T>) -> Self::Output {
                ComplexOps::multiply(self, rhs)
            }
        })+
    };
}
impl_ops!(
    (Rectangular, Rectangular),
    (Rectangular, Polar),
    (Rectangular, Complex),
    (Polar, Rectangular),
    (Polar, Polar),
    (Polar, Complex),
    (Complex, Rectangular),
    (Complex, Polar),
    (Complex, Complex)
);

impl<T: Real> Sum for Complex<T> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Complex::rectangular(T::zero(), T::zero()), |acc, c| acc + c)
    }
}
impl<'a, T: Real> Sum<&'a Complex<T>> for Complex<T> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Complex<T>>,
    {
        iter.fold(Complex::rectangular(T::zero(), T::zero()), |acc, c| &acc + c)
    }
}

impl<T: Real> Product for Complex<T> {
    // starting in polar form keeps the whole product in polar form.
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Complex::polar(T::one(), T::zero()), |acc, c| acc * c)
    }
}
impl<'a, T: Real> Product<&'a Complex<T>> for Complex<T> {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Complex<T>>,
    {
        iter.fold(Complex::polar(T::one(), T::zero()), |acc, c| &acc * c)
    }
}

