//! Complex numbers stored as magnitude and angle `r·e^(iθ)`.

use crate::fmt::{pad_expr, DEFAULT_PRECISION};
use crate::*;
use core::fmt;
use core::iter::Product;

/// A complex number `magnitude·e^(i·angle)`. The cartesian parts are computed on demand.
///
/// Multiplication stays in polar form (magnitudes multiply, angles add up),
/// while addition is done in cartesian coordinates and returns a [Rectangular].
///
/// The angle is never normalized, so repeated multiplication can leave `(-π, π]`.
/// The magnitude is stored as given and is expected to be non negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Polar<T = f64> {
    magnitude: T,
    angle: T,
}

impl<T> Polar<T> {
    pub const fn new(magnitude: T, angle: T) -> Self {
        Self { magnitude, angle }
    }
}

impl<T: Real> Polar<T> {
    /// Compute `cis(angle) := cos(angle) + i·sin(angle)`, the unit number at the given angle.
    pub fn cis(angle: T) -> Self {
        Self::new(T::one(), angle)
    }
    /// Convert to cartesian form.
    pub fn to_rectangular(&self) -> Rectangular<T> {
        Rectangular::new(self.real(), self.imag())
    }
}

impl<T: Real> ComplexNumber for Polar<T> {
    type Real = T;
    #[inline]
    fn real(&self) -> T {
        self.magnitude * self.angle.cos()
    }
    #[inline]
    fn imag(&self) -> T {
        self.magnitude * self.angle.sin()
    }
    #[inline(always)]
    fn magnitude(&self) -> T {
        self.magnitude
    }
    #[inline(always)]
    fn angle(&self) -> T {
        self.angle
    }
}

impl<T: Real> ComplexOps for Polar<T> {
    type Sum = Rectangular<T>;
    type Product = Polar<T>;
    fn add<C: ComplexNumber<Real = Self::Real> + ?Sized>(&self, other: &C) -> Self::Sum {
        Rectangular::new(self.real() + other.real(), self.imag() + other.imag())
    }
    fn multiply<C: ComplexNumber<Real = Self::Real> + ?Sized>(&self, other: &C) -> Self::Product {
        Polar::new(self.magnitude * other.magnitude(), self.angle + other.angle())
    }
}

impl<T: Real> From<Rectangular<T>> for Polar<T> {
    fn from(value: Rectangular<T>) -> Self {
        value.to_polar()
    }
}

impl<T: Real> Product for Polar<T> {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::new(T::one(), T::zero()), |acc, c| ComplexOps::multiply(&acc, &c))
    }
}
impl<'a, T: Real> Product<&'a Polar<T>> for Polar<T> {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Polar<T>>,
    {
        iter.fold(Self::new(T::one(), T::zero()), |acc, c| ComplexOps::multiply(&acc, c))
    }
}
impl<T: Real> Product<Rectangular<T>> for Polar<T> {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = Rectangular<T>>,
    {
        iter.fold(Self::new(T::one(), T::zero()), |acc, c| ComplexOps::multiply(&acc, &c))
    }
}

// Safety: `Polar<T>` is `repr(C)` and contains only instances of `T`, so we
// can guarantee it contains no *added* padding. Thus, if `T: Zeroable`,
// `Polar<T>` is also `Zeroable`
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Polar<T> {}

// Safety: `Polar<T>` is `repr(C)` and contains only instances of `T`, so we
// can guarantee it contains no *added* padding. Thus, if `T: Pod`,
// `Polar<T>` is also `Pod`
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Polar<T> {}

/// Renders as `(magnitude∠angle rad)` with both components in fixed point notation.
///
/// The precision defaults to 6 digits and applies to both components.
/// Width and alignment apply to the whole expression.
impl<T: fmt::Display> fmt::Display for Polar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(DEFAULT_PRECISION);
        pad_expr(
            f,
            format_args!("({:.*}∠{:.*} rad)", prec, self.magnitude, prec, self.angle),
        )
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Polar<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.magnitude, &self.angle).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Polar<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (magnitude, angle) = serde::Deserialize::deserialize(deserializer)?;
        Ok(Self::new(magnitude, angle))
    }
}
