//! Complex numbers stored as cartesian coordinates `re + im·i`.

use crate::fmt::{pad_expr, DEFAULT_PRECISION};
use crate::*;
use core::fmt;
use core::iter::Sum;

/// A complex number `re + im·i`. Magnitude and angle are computed on demand.
///
/// Addition and multiplication always produce a [Rectangular], whatever the operand is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Rectangular<T = f64> {
    re: T,
    im: T,
}

impl<T> Rectangular<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: Real> Rectangular<T> {
    /// Convert to polar form with `magnitude = |self|` and `angle = arg(self)`.
    pub fn to_polar(&self) -> Polar<T> {
        Polar::new(self.magnitude(), self.angle())
    }
}

impl<T: Real> ComplexNumber for Rectangular<T> {
    type Real = T;
    #[inline(always)]
    fn real(&self) -> T {
        self.re
    }
    #[inline(always)]
    fn imag(&self) -> T {
        self.im
    }
    #[inline]
    fn magnitude(&self) -> T {
        // not hypot, to keep the scalar requirements at sqrt.
        (self.re * self.re + self.im * self.im).sqrt()
    }
    #[inline]
    fn angle(&self) -> T {
        self.im.atan2(&self.re)
    }
}

impl<T: Real> ComplexOps for Rectangular<T> {
    type Sum = Rectangular<T>;
    type Product = Rectangular<T>;
    fn add<C: ComplexNumber<Real = Self::Real> + ?Sized>(&self, other: &C) -> Self::Sum {
        Rectangular::new(self.re + other.real(), self.im + other.imag())
    }
    fn multiply<C: ComplexNumber<Real = Self::Real> + ?Sized>(&self, other: &C) -> Self::Product {
        // (a+bi)(c+di) = (ac-bd) + (ad+bc)i
        let (a, b) = (self.re, self.im);
        let (c, d) = (other.real(), other.imag());
        Rectangular::new(a * c - b * d, a * d + b * c)
    }
}

impl<T: Real> From<Polar<T>> for Rectangular<T> {
    fn from(value: Polar<T>) -> Self {
        value.to_rectangular()
    }
}
impl<T> From<(T, T)> for Rectangular<T> {
    fn from(value: (T, T)) -> Self {
        Rectangular::new(value.0, value.1)
    }
}
impl<T> From<Rectangular<T>> for (T, T) {
    fn from(value: Rectangular<T>) -> Self {
        (value.re, value.im)
    }
}

impl<T: Real> Sum for Rectangular<T> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::new(T::zero(), T::zero()), |acc, c| ComplexOps::add(&acc, &c))
    }
}
impl<'a, T: Real> Sum<&'a Rectangular<T>> for Rectangular<T> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Rectangular<T>>,
    {
        iter.fold(Self::new(T::zero(), T::zero()), |acc, c| ComplexOps::add(&acc, c))
    }
}
impl<T: Real> Sum<Polar<T>> for Rectangular<T> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Polar<T>>,
    {
        iter.fold(Self::new(T::zero(), T::zero()), |acc, c| ComplexOps::add(&acc, &c))
    }
}

// Safety: `Rectangular<T>` is `repr(C)` and contains only instances of `T`, so we
// can guarantee it contains no *added* padding. Thus, if `T: Zeroable`,
// `Rectangular<T>` is also `Zeroable`
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Rectangular<T> {}

// Safety: `Rectangular<T>` is `repr(C)` and contains only instances of `T`, so we
// can guarantee it contains no *added* padding. Thus, if `T: Pod`,
// `Rectangular<T>` is also `Pod`
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Rectangular<T> {}

/// Renders as `(re + imi)` with both components in fixed point notation.
/// The `+` is always written, so a negative imaginary part shows up as `+ -4.000000i`.
///
/// The precision defaults to 6 digits and applies to both components.
/// Width and alignment apply to the whole expression.
impl<T: fmt::Display> fmt::Display for Rectangular<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(DEFAULT_PRECISION);
        pad_expr(
            f,
            format_args!("({:.*} + {:.*}i)", prec, self.re, prec, self.im),
        )
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Rectangular<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.re, &self.im).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Rectangular<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (re, im) = serde::Deserialize::deserialize(deserializer)?;
        Ok(Self::new(re, im))
    }
}
