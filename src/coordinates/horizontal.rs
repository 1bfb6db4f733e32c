use serde::{Deserialize, Serialize};

use crate::units::Angle;

/// Local alt-az position.
///
/// Altitude is measured from the horizon (positive above), azimuth from north
/// through east. Values are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HorizontalCoordinate {
    altitude: Angle,
    azimuth: Angle,
}

impl HorizontalCoordinate {
    pub fn new(altitude: Angle, azimuth: Angle) -> Self {
        HorizontalCoordinate { altitude, azimuth }
    }

    pub fn from_degrees(alt_deg: f64, az_deg: f64) -> Self {
        Self::new(Angle::from_degrees(alt_deg), Angle::from_degrees(az_deg))
    }

    pub fn altitude(&self) -> Angle {
        self.altitude
    }

    pub fn azimuth(&self) -> Angle {
        self.azimuth
    }

    /// Zenith distance `90° − altitude`.
    pub fn zenith_distance(&self) -> Angle {
        Angle::HALF_PI - self.altitude
    }

    pub fn is_above_horizon(&self) -> bool {
        self.altitude.radians() > 0.0
    }
}
