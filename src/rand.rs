//! Derived rand implementations for the complex types + [StandardUnitary]

use crate::*;
use ::rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};

/// Unitary distribution, meaning a uniform distribution on the values where the magnitude is 1.
pub struct StandardUnitary;

// π without requiring a constant from the scalar type.
#[inline]
fn pi<T: Real>() -> T {
    T::zero().atan2(&-T::one())
}

/// Both components uniform in `[0, 1)`.
impl<T> Distribution<Rectangular<T>> for StandardUniform
where
    StandardUniform: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rectangular<T> {
        Rectangular::new(rng.sample(self), rng.sample(self))
    }
}

/// Magnitude uniform in `[0, 1)` and angle uniform in `[-π, π)`.
/// Note, that this is not uniform on the unit disk, as it concentrates around the origin.
impl<T: Real> Distribution<Polar<T>> for StandardUniform
where
    StandardUniform: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Polar<T> {
        let magnitude = rng.sample(self);
        let u: T = rng.sample(self);
        let one = T::one();
        Polar::new(magnitude, (u * (one + one) - one) * pi::<T>())
    }
}

/// Either representation with equal chance, sampled as above.
impl<T: Real> Distribution<Complex<T>> for StandardUniform
where
    StandardUniform: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex<T> {
        if rng.sample::<bool, _>(self) {
            Complex::Polar(rng.sample::<Polar<T>, _>(self))
        } else {
            Complex::Rectangular(rng.sample::<Rectangular<T>, _>(self))
        }
    }
}

impl<T: Real> Distribution<Polar<T>> for StandardUnitary
where
    StandardUniform: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Polar<T> {
        // in polar form this is trivial, no hit or retry needed.
        let u: T = rng.sample(StandardUniform);
        let one = T::one();
        Polar::cis((u * (one + one) - one) * pi::<T>())
    }
}

impl<T: Real> Distribution<Rectangular<T>> for StandardUnitary
where
    StandardUniform: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rectangular<T> {
        rng.sample::<Polar<T>, _>(self).to_rectangular()
    }
}
