//! # Coordinate value types
//!
//! Immutable angular positions in each supported reference frame, plus the
//! geometric cartesian / cylindrical / spherical forms.
//!
//! | Type | Components | Wrapped at construction |
//! |------|------------|-------------------------|
//! | [`EquatorialCoordinate`] | right ascension, declination | no |
//! | [`EclipticCoordinate`] | latitude, longitude | both, `[0, 2π)` |
//! | [`GalacticCoordinate`] | latitude, longitude | both, `[0, 2π)` |
//! | [`HorizontalCoordinate`] | altitude, azimuth | no |
//! | [`GeographicCoordinate`] | latitude, longitude, altitude | angles, `[0, 2π)` |
//!
//! Wrapped latitudes are exposed in `[-π, π)` through `latitude_signed()`.
//! Right ascension and declination keep their sign so that hour-angle arithmetic
//! (`H = LST − α`) behaves as written.
pub mod cartesian;
pub mod ecliptic;
pub mod equatorial;
pub mod galactic;
pub mod geographic;
pub mod horizontal;

pub use cartesian::{CartesianCoordinate, CylindricalCoordinate, SphericalCoordinate};
pub use ecliptic::EclipticCoordinate;
pub use equatorial::{EquatorialCoordinate, ProperMotion};
pub use galactic::GalacticCoordinate;
pub use geographic::GeographicCoordinate;
pub use horizontal::HorizontalCoordinate;

use crate::units::Angle;

/// Great-circle separation of two points given by (latitude, longitude) pairs,
/// Vincenty formula (stable for both small and antipodal separations).
pub(crate) fn angular_separation(lat1: Angle, lon1: Angle, lat2: Angle, lon2: Angle) -> Angle {
    let (sin_b1, cos_b1) = lat1.sin_cos();
    let (sin_b2, cos_b2) = lat2.sin_cos();
    let (sin_dl, cos_dl) = (lon2 - lon1).sin_cos();

    let num1 = cos_b2 * sin_dl;
    let num2 = cos_b1 * sin_b2 - sin_b1 * cos_b2 * cos_dl;
    let den = sin_b1 * sin_b2 + cos_b1 * cos_b2 * cos_dl;

    Angle::atan2((num1 * num1 + num2 * num2).sqrt(), den)
}
