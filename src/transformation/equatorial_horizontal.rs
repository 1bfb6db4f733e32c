use serde::{Deserialize, Serialize};

use crate::coordinates::{EquatorialCoordinate, HorizontalCoordinate};
use crate::transformation::Transformation;
use crate::units::Angle;

/// Equatorial (α, δ) → horizontal (alt, az) for an observer at latitude φ and
/// local sidereal time LST.
///
/// Formula
/// -------
/// With the hour angle `H = LST − α`:
/// ```text
/// alt = asin(sin φ·sin δ + cos φ·cos δ·cos H)
/// az  = atan2(−cos δ·sin H, cos φ·sin δ − sin φ·cos δ·cos H)
/// ```
/// Azimuth is measured from north through east and wrapped to `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialToHorizontal {
    local_sidereal_time: Angle,
    latitude: Angle,
}

impl EquatorialToHorizontal {
    pub fn new(local_sidereal_time: Angle, latitude: Angle) -> Self {
        EquatorialToHorizontal {
            local_sidereal_time,
            latitude,
        }
    }

    pub fn local_sidereal_time(&self) -> Angle {
        self.local_sidereal_time
    }

    pub fn latitude(&self) -> Angle {
        self.latitude
    }
}

impl Transformation<EquatorialCoordinate, HorizontalCoordinate> for EquatorialToHorizontal {
    fn forward(&self, from: &EquatorialCoordinate) -> HorizontalCoordinate {
        let (sin_phi, cos_phi) = self.latitude.sin_cos();
        let (sin_d, cos_d) = from.declination().sin_cos();
        let (sin_h, cos_h) = from.hour_angle(self.local_sidereal_time).sin_cos();

        let altitude = Angle::asin(sin_phi * sin_d + cos_phi * cos_d * cos_h);
        let azimuth = Angle::atan2(-cos_d * sin_h, cos_phi * sin_d - sin_phi * cos_d * cos_h);

        HorizontalCoordinate::new(altitude, azimuth.wrap())
    }

    /// ```text
    /// δ = asin(sin φ·sin alt + cos φ·cos alt·cos az)
    /// H = atan2(−sin az·cos alt, cos φ·sin alt − sin φ·cos alt·cos az)
    /// α = LST − H
    /// ```
    /// with `α` wrapped to `[0, 2π)`: a round trip returns the input right
    /// ascension modulo 2π, so `−0.5` comes back as `2π − 0.5`.
    fn reverse(&self, to: &HorizontalCoordinate) -> EquatorialCoordinate {
        let (sin_phi, cos_phi) = self.latitude.sin_cos();
        let (sin_alt, cos_alt) = to.altitude().sin_cos();
        let (sin_az, cos_az) = to.azimuth().sin_cos();

        let declination = Angle::asin(sin_phi * sin_alt + cos_phi * cos_alt * cos_az);
        let hour_angle = Angle::atan2(
            -sin_az * cos_alt,
            cos_phi * sin_alt - sin_phi * cos_alt * cos_az,
        );

        EquatorialCoordinate::new((self.local_sidereal_time - hour_angle).wrap(), declination)
    }
}

/// Horizontal → equatorial, the inverse of [`EquatorialToHorizontal`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalToEquatorial {
    inner: EquatorialToHorizontal,
}

impl HorizontalToEquatorial {
    pub fn new(local_sidereal_time: Angle, latitude: Angle) -> Self {
        HorizontalToEquatorial {
            inner: EquatorialToHorizontal::new(local_sidereal_time, latitude),
        }
    }

    pub fn local_sidereal_time(&self) -> Angle {
        self.inner.local_sidereal_time()
    }

    pub fn latitude(&self) -> Angle {
        self.inner.latitude()
    }
}

impl Transformation<HorizontalCoordinate, EquatorialCoordinate> for HorizontalToEquatorial {
    fn forward(&self, from: &HorizontalCoordinate) -> EquatorialCoordinate {
        self.inner.reverse(from)
    }

    fn reverse(&self, to: &EquatorialCoordinate) -> HorizontalCoordinate {
        self.inner.forward(to)
    }
}
