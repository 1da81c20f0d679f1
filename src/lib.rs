//! Numbers whose representation is an implementation detail.
//!
//! The [complex] module defines a capability set for complex numbers ([ComplexNumber] and [ComplexOps])
//! with two implementations, [Rectangular] (`re + im·i`) and [Polar] (`r·e^(iθ)`).
//! Every operation reads its operand only through the capability set, so the representations
//! can be mixed freely. Each representation picks the algorithm that is natural for it:
//! rectangular numbers add and multiply componentwise, polar numbers multiply magnitudes
//! and add angles, but hand addition over to rectangular form. Consequently `Polar + x` is [Rectangular].
//! If that asymmetry is in the way, hold values as [Complex], which is either of the two.
//!
//! ```
//! use repnum::*;
//!
//! let a = Rectangular::new(3.0, -4.0);
//! let b = Polar::new(2.0, 0.0);
//! assert_eq!((a * b).real(), 6.0);
//! assert_eq!(std::format!("{}", a), "(3.000000 + -4.000000i)");
//! assert_eq!(std::format!("{}", b * b), "(4.000000∠0.000000 rad)");
//! ```
//!
//! The [rational] module is independent of that. [Rational] is a pair of integers, which is
//! never reduced: `1/2 + 1/3 = 5/6`, but also `2/4 + 1/4 = 12/16`.
//! There is no division and no check for zero denominators. The operators wrap around on
//! overflow, the `checked_*` methods return an [ArithmeticError] instead.
//!
//! [Complex], [Rectangular] and [Rational] satisfy [Number], which only asks for `+`, `*` and a rendering.
//! [Polar] doesn't, since `Polar + Polar` is [Rectangular].
//!
//! # Features
//! - `std` (default): uses the standard library for `sqrt`, `sin`, `cos` and `atan2`,
//!   supports width and alignment in the renderings and adds [Rational::print_rat].
//! - `libm`: the math functions for `no_std` builds. One of `std` or `libm` is needed for [Real].
//! - `serde`, `bytemuck`: serialization and `Pod` casts of the value types.
//! - `num-bigint`: rationals over `BigInt`, which never overflow.
//! - `rand`: sampling of complex numbers, see `StandardUnitary`.
//! - `cli`: the `repnum` demonstration binary.
//!
//! # Limitations
//! Floating point components follow IEEE rules, NaN and infinities are passed through.
//! The polar angle is never normalized into `(-π, π]`.

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod num;
pub mod complex;
pub mod rectangular;
pub mod polar;
pub mod rational;
pub mod error;
mod fmt;
#[cfg(feature = "rand")]
pub mod rand;

pub use num::*;
pub use complex::*;
pub use rectangular::*;
pub use polar::*;
pub use rational::*;
pub use error::*;
pub use fmt::DEFAULT_PRECISION;
