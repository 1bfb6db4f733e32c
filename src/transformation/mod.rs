//! # Bidirectional coordinate transformations
//!
//! A [`Transformation<A, B>`] maps coordinates of type `A` to `B` (`forward`) and
//! back (`reverse`). Both directions are required by the trait, so a
//! transformation can always be inverted:
//!
//! - [`Reversed`] swaps the two directions of any transformation;
//! - [`Transformation::then`] composes two transformations through an
//!   intermediate coordinate type into a [`TransformationChain`].
//!
//! Parameters (obliquity, sidereal time, latitude) are captured when the
//! transformation value is built and never change afterwards.
//!
//! ```rust
//! use orrery::coordinates::EquatorialCoordinate;
//! use orrery::transformation::{EquatorialToEcliptic, Transformation};
//! use orrery::units::Angle;
//!
//! let to_ecliptic = EquatorialToEcliptic::new(Angle::from_degrees(23.4392911));
//! let back = to_ecliptic.reversed();
//!
//! let vega = EquatorialCoordinate::from_degrees(279.23473, 38.78369);
//! let ecl = to_ecliptic.forward(&vega);
//! let again = back.forward(&ecl);
//! assert!((again.declination() - vega.declination()).radians().abs() < 1e-12);
//! ```
use std::marker::PhantomData;

pub mod equatorial_ecliptic;
pub mod equatorial_galactic;
pub mod equatorial_horizontal;

pub use equatorial_ecliptic::{EclipticToEquatorial, EquatorialToEcliptic};
pub use equatorial_galactic::{EquatorialToGalactic, GalacticToEquatorial};
pub use equatorial_horizontal::{EquatorialToHorizontal, HorizontalToEquatorial};

/// Invertible mapping between two coordinate types.
pub trait Transformation<A, B> {
    /// `A → B`
    fn forward(&self, from: &A) -> B;

    /// `B → A`
    ///
    /// Angles that the target type keeps unwrapped (right ascension) come back
    /// in `[0, 2π)`, equal to the original modulo 2π.
    fn reverse(&self, to: &B) -> A;

    /// Compose with a second transformation `B → C`.
    fn then<C, T>(self, second: T) -> TransformationChain<Self, T, B>
    where
        Self: Sized,
        T: Transformation<B, C>,
    {
        TransformationChain::new(self, second)
    }

    /// The same mapping with `forward` and `reverse` swapped.
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed::new(self)
    }
}

/// Swaps the directions of the wrapped transformation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reversed<T> {
    inner: T,
}

impl<T> Reversed<T> {
    pub fn new(inner: T) -> Self {
        Reversed { inner }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<A, B, T> Transformation<B, A> for Reversed<T>
where
    T: Transformation<A, B>,
{
    fn forward(&self, from: &B) -> A {
        self.inner.reverse(from)
    }

    fn reverse(&self, to: &A) -> B {
        self.inner.forward(to)
    }
}

/// `first` then `second`, through the intermediate coordinate type `B`.
///
/// forward: `second.forward(first.forward(a))`
/// reverse: `first.reverse(second.reverse(c))`
pub struct TransformationChain<T1, T2, B> {
    first: T1,
    second: T2,
    intermediate: PhantomData<fn() -> B>,
}

impl<T1, T2, B> TransformationChain<T1, T2, B> {
    pub fn new(first: T1, second: T2) -> Self {
        TransformationChain {
            first,
            second,
            intermediate: PhantomData,
        }
    }

    pub fn first(&self) -> &T1 {
        &self.first
    }

    pub fn second(&self) -> &T2 {
        &self.second
    }
}

impl<T1: Clone, T2: Clone, B> Clone for TransformationChain<T1, T2, B> {
    fn clone(&self) -> Self {
        TransformationChain::new(self.first.clone(), self.second.clone())
    }
}

impl<T1: std::fmt::Debug, T2: std::fmt::Debug, B> std::fmt::Debug for TransformationChain<T1, T2, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformationChain")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<A, B, C, T1, T2> Transformation<A, C> for TransformationChain<T1, T2, B>
where
    T1: Transformation<A, B>,
    T2: Transformation<B, C>,
{
    fn forward(&self, from: &A) -> C {
        self.second.forward(&self.first.forward(from))
    }

    fn reverse(&self, to: &C) -> A {
        self.first.reverse(&self.second.reverse(to))
    }
}
