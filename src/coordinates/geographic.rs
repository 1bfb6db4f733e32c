use serde::{Deserialize, Serialize};

use crate::units::{Angle, Length};

/// Position of an observer on the Earth.
///
/// Latitude and longitude (positive east) are wrapped to `[0, 2π)`;
/// [`GeographicCoordinate::latitude_signed`] and
/// [`GeographicCoordinate::longitude_signed`] give the usual signed values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawGeographicCoordinate")]
pub struct GeographicCoordinate {
    latitude: Angle,
    longitude: Angle,
    altitude: Length,
}

#[derive(Deserialize)]
struct RawGeographicCoordinate {
    latitude: Angle,
    longitude: Angle,
    altitude: Length,
}

impl From<RawGeographicCoordinate> for GeographicCoordinate {
    fn from(raw: RawGeographicCoordinate) -> Self {
        Self::with_altitude(raw.latitude, raw.longitude, raw.altitude)
    }
}

impl GeographicCoordinate {
    /// Sea-level position.
    pub fn new(latitude: Angle, longitude: Angle) -> Self {
        Self::with_altitude(latitude, longitude, Length::ZERO)
    }

    pub fn with_altitude(latitude: Angle, longitude: Angle, altitude: Length) -> Self {
        GeographicCoordinate {
            latitude: latitude.wrap(),
            longitude: longitude.wrap(),
            altitude,
        }
    }

    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> Self {
        Self::new(Angle::from_degrees(lat_deg), Angle::from_degrees(lon_deg))
    }

    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    /// Latitude in `[-π, π)`, north positive.
    pub fn latitude_signed(&self) -> Angle {
        self.latitude.wrap_signed()
    }

    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    /// Longitude in `[-π, π)`, east positive.
    pub fn longitude_signed(&self) -> Angle {
        self.longitude.wrap_signed()
    }

    pub fn altitude(&self) -> Length {
        self.altitude
    }
}
