use serde::{Deserialize, Serialize};

use crate::units::Angle;

/// Position in ecliptic coordinates (β, λ).
///
/// Both angles are wrapped to `[0, 2π)` on construction; a southern latitude
/// of −10° is stored as 350°, see [`EclipticCoordinate::latitude_signed`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawEclipticCoordinate")]
pub struct EclipticCoordinate {
    latitude: Angle,
    longitude: Angle,
}

/// Deserialized angles, wrapped through [`EclipticCoordinate::new`].
#[derive(Deserialize)]
struct RawEclipticCoordinate {
    latitude: Angle,
    longitude: Angle,
}

impl From<RawEclipticCoordinate> for EclipticCoordinate {
    fn from(raw: RawEclipticCoordinate) -> Self {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl EclipticCoordinate {
    pub fn new(latitude: Angle, longitude: Angle) -> Self {
        EclipticCoordinate {
            latitude: latitude.wrap(),
            longitude: longitude.wrap(),
        }
    }

    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> Self {
        Self::new(Angle::from_degrees(lat_deg), Angle::from_degrees(lon_deg))
    }

    /// Latitude β in `[0, 2π)`.
    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    /// Latitude β in `[-π, π)`.
    pub fn latitude_signed(&self) -> Angle {
        self.latitude.wrap_signed()
    }

    /// Longitude λ in `[0, 2π)`.
    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    pub fn angular_separation(&self, other: &Self) -> Angle {
        super::angular_separation(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

#[cfg(test)]
mod ecliptic_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_wrapped_on_construction() {
        let c = EclipticCoordinate::from_degrees(-10.0, 725.0);
        assert_abs_diff_eq!(c.latitude().degrees(), 350.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.latitude_signed().degrees(), -10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.longitude().degrees(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_separation_ignores_wrapping() {
        let a = EclipticCoordinate::from_degrees(-10.0, 0.0);
        let b = EclipticCoordinate::from_degrees(10.0, 0.0);
        assert_abs_diff_eq!(a.angular_separation(&b).degrees(), 20.0, epsilon = 1e-9);
    }
}
