use serde::{Deserialize, Serialize};

use crate::units::Angle;

/// Position in galactic coordinates (b, l).
///
/// Both angles are wrapped to `[0, 2π)` on construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawGalacticCoordinate")]
pub struct GalacticCoordinate {
    latitude: Angle,
    longitude: Angle,
}

/// Deserialized angles, wrapped through [`GalacticCoordinate::new`].
#[derive(Deserialize)]
struct RawGalacticCoordinate {
    latitude: Angle,
    longitude: Angle,
}

impl From<RawGalacticCoordinate> for GalacticCoordinate {
    fn from(raw: RawGalacticCoordinate) -> Self {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl GalacticCoordinate {
    pub fn new(latitude: Angle, longitude: Angle) -> Self {
        GalacticCoordinate {
            latitude: latitude.wrap(),
            longitude: longitude.wrap(),
        }
    }

    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> Self {
        Self::new(Angle::from_degrees(lat_deg), Angle::from_degrees(lon_deg))
    }

    pub fn galactic_center() -> Self {
        Self::new(Angle::ZERO, Angle::ZERO)
    }

    pub fn north_galactic_pole() -> Self {
        Self::new(Angle::HALF_PI, Angle::ZERO)
    }

    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    /// Latitude b in `[-π, π)`.
    pub fn latitude_signed(&self) -> Angle {
        self.latitude.wrap_signed()
    }

    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    pub fn is_near_galactic_plane(&self) -> bool {
        self.latitude_signed().abs().degrees() < 10.0
    }

    pub fn angular_separation(&self, other: &Self) -> Angle {
        super::angular_separation(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}
