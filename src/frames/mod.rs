//! # Reference frames
//!
//! A frame is a bundle of parameters (an obliquity, an observer and an
//! instant, or nothing at all) that fixes how its coordinates relate to the
//! other frames. Frames never hold a position; asking one frame for its
//! [`TransformationTo`] another builds a ready-to-use [`Transformation`].
//!
//! | from \ to              | Equatorial | Ecliptic | Horizontal | Galactic |
//! |------------------------|:----------:|:--------:|:----------:|:--------:|
//! | [`EquatorialGeocentric`] |          | ✓        | ✓          | ✓        |
//! | [`EclipticGeocentric`]   | ✓        |          |            |          |
//! | [`HorizontalObserver`]   | ✓        | ✓ (chain)|            |          |
//! | [`GalacticFrame`]        | ✓        |          |            |          |
//!
//! ```rust
//! use orrery::coordinates::EquatorialCoordinate;
//! use orrery::frames::{EclipticGeocentric, EquatorialGeocentric, TransformationTo};
//! use orrery::transformation::Transformation;
//!
//! let to_ecliptic = EquatorialGeocentric.transformation_to(&EclipticGeocentric::J2000);
//! let ecl = to_ecliptic.forward(&EquatorialCoordinate::from_degrees(0.0, 0.0));
//! assert!(ecl.longitude().radians() < 1e-12);
//! ```
//!
//! [`Transformation`]: crate::transformation::Transformation
use crate::transformation::Transformation;

pub mod ecliptic_geocentric;
pub mod equatorial_geocentric;
pub mod galactic;
pub mod horizontal_observer;

pub use ecliptic_geocentric::EclipticGeocentric;
pub use equatorial_geocentric::EquatorialGeocentric;
pub use galactic::GalacticFrame;
pub use horizontal_observer::HorizontalObserver;

/// A frame whose positions are expressed as `Coordinate`.
pub trait ReferenceFrame {
    type Coordinate;
}

/// Factory for the transformation from `Self` to the frame `F`.
pub trait TransformationTo<F: ReferenceFrame>: ReferenceFrame {
    type Output: Transformation<Self::Coordinate, F::Coordinate>;

    fn transformation_to(&self, frame: &F) -> Self::Output;
}
