//! A plain fraction type `numer / denom`, that is never reduced.
//!
//! All results keep the cross multiplied form, e.g. `2/4 + 1/4 = 12/16`.
//! There is no check for zero denominators and no canonical sign placement.
//! The operators wrap around on integer overflow instead of panicking,
//! the `checked_*` methods report it as an [ArithmeticError].

use core::{
    fmt,
    iter::{Product, Sum},
    ops::*,
};

use crate::error::{ArithmeticError, Operation};
use crate::num::*;

/// A fraction `numer / denom` of two integers.
///
/// Equality is structural, so `Rational::new(1, 2) != Rational::new(2, 4)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Rational<T = i64> {
    numer: T,
    denom: T,
}

impl<T> Rational<T> {
    /// Store the pair as given. No validation, no reduction.
    pub const fn new(numer: T, denom: T) -> Self {
        Rational { numer, denom }
    }
}

impl<T: Clone> Rational<T> {
    pub fn numerator(&self) -> T {
        self.numer.clone()
    }
    pub fn denominator(&self) -> T {
        self.denom.clone()
    }
}

impl<T: Zero + One> Default for Rational<T> {
    fn default() -> Self {
        Self {
            numer: Zero::zero(),
            denom: One::one(),
        }
    }
}

impl<T> From<Rational<T>> for (T, T) {
    fn from(value: Rational<T>) -> Self {
        (value.numer, value.denom)
    }
}
impl<T> From<(T, T)> for Rational<T> {
    fn from(value: (T, T)) -> Self {
        Rational::new(value.0, value.1)
    }
}

macro_rules! impl_add {
    ($Add:ident, $add:ident, $wrapping:ident) => {
        impl<T: Integer> $Add for Rational<T> {
            type Output = Rational<T>;
            #[inline]
            fn $add(self, rhs: Self) -> Self::Output {
                $Add::$add(&self, &rhs)
            }
        }
        impl<'a, T: Integer> $Add for &'a Rational<T> {
            type Output = Rational<T>;
            fn $add(self, rhs: Self) -> Self::Output {
                // a/b ± c/d = (ad ± cb)/(bd)
                let ad = self.numer.wrapping_mul(&rhs.denom);
                let cb = rhs.numer.wrapping_mul(&self.denom);
                Rational {
                    numer: ad.$wrapping(&cb),
                    denom: self.denom.wrapping_mul(&rhs.denom),
                }
            }
        }
    };
}
impl_add!(Add, add, wrapping_add);
impl_add!(Sub, sub, wrapping_sub);

impl<T: Integer> Mul for Rational<T> {
    type Output = Rational<T>;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Mul::mul(&self, &rhs)
    }
}
impl<'a, T: Integer> Mul for &'a Rational<T> {
    type Output = Rational<T>;
    fn mul(self, rhs: Self) -> Self::Output {
        Rational {
            numer: self.numer.wrapping_mul(&rhs.numer),
            denom: self.denom.wrapping_mul(&rhs.denom),
        }
    }
}

fn overflow(op: Operation) -> ArithmeticError {
    tracing::debug!(%op, "rational overflow");
    ArithmeticError::Overflow { op }
}

impl<T: Integer> Rational<T> {
    fn checked_cross(
        &self,
        rhs: &Self,
        op: Operation,
        combine: impl FnOnce(&T, &T) -> Option<T>,
    ) -> Result<Self, ArithmeticError> {
        let ad = self.numer.checked_mul(&rhs.denom).ok_or_else(|| overflow(op))?;
        let cb = rhs.numer.checked_mul(&self.denom).ok_or_else(|| overflow(op))?;
        Ok(Rational {
            numer: combine(&ad, &cb).ok_or_else(|| overflow(op))?,
            denom: self.denom.checked_mul(&rhs.denom).ok_or_else(|| overflow(op))?,
        })
    }
    /// Like `+`, but fails instead of wrapping around.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.checked_cross(rhs, Operation::Add, |a, b| a.checked_add(b))
    }
    /// Like `-`, but fails instead of wrapping around.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.checked_cross(rhs, Operation::Sub, |a, b| a.checked_sub(b))
    }
    /// Like `*`, but fails instead of wrapping around.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        let op = Operation::Mul;
        Ok(Rational {
            numer: self.numer.checked_mul(&rhs.numer).ok_or_else(|| overflow(op))?,
            denom: self.denom.checked_mul(&rhs.denom).ok_or_else(|| overflow(op))?,
        })
    }
}

impl<T: Integer> Sum for Rational<T> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::default(), |acc, c| acc + c)
    }
}
impl<'a, T: Integer> Sum<&'a Rational<T>> for Rational<T> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Rational<T>>,
    {
        iter.fold(Self::default(), |acc, c| &acc + c)
    }
}

impl<T: Integer> Product for Rational<T> {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::new(T::one(), T::one()), |acc, c| acc * c)
    }
}
impl<'a, T: Integer> Product<&'a Rational<T>> for Rational<T> {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Rational<T>>,
    {
        iter.fold(Self::new(T::one(), T::one()), |acc, c| &acc * c)
    }
}

#[cfg(feature = "std")]
impl<T: fmt::Display> Rational<T> {
    /// Write `numer / denom` followed by a newline.
    pub fn write_rat<W: std::io::Write>(&self, w: &mut W) -> std::io::Result<()> {
        writeln!(w, "{self}")
    }
    /// Print `numer / denom` followed by a newline to stdout.
    pub fn print_rat(&self) {
        std::println!("{self}");
    }
}

// Safety: `Rational<T>` is `repr(C)` and contains only instances of `T`, so we
// can guarantee it contains no *added* padding. Thus, if `T: Zeroable`,
// `Rational<T>` is also `Zeroable`
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Rational<T> {}

// Safety: `Rational<T>` is `repr(C)` and contains only instances of `T`, so we
// can guarantee it contains no *added* padding. Thus, if `T: Pod`,
// `Rational<T>` is also `Pod`
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Rational<T> {}

// String conversions. The format flags apply to both integers, except for width
// and alignment, which apply to the whole fraction.
macro_rules! impl_formatting {
    ($Display:ident, $fmt_str:expr, $fmt_alt:expr) => {
        impl<T: fmt::$Display> fmt::$Display for Rational<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if f.alternate() {
                    crate::fmt::pad_expr(
                        f,
                        format_args!(concat!($fmt_alt, " / ", $fmt_alt), self.numer, self.denom),
                    )
                } else {
                    crate::fmt::pad_expr(
                        f,
                        format_args!(concat!($fmt_str, " / ", $fmt_str), self.numer, self.denom),
                    )
                }
            }
        }
    };
}

impl_formatting!(Display, "{}", "{:#}");
impl_formatting!(Octal, "{:o}", "{:#o}");
impl_formatting!(Binary, "{:b}", "{:#b}");
impl_formatting!(LowerHex, "{:x}", "{:#x}");
impl_formatting!(UpperHex, "{:X}", "{:#X}");

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Rational<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.numer, &self.denom).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Rational<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (numer, denom) = serde::Deserialize::deserialize(deserializer)?;
        Ok(Self::new(numer, denom))
    }
}
