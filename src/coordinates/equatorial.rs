use hifitime::Duration;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::orrery_errors::OrreryError;
use crate::ref_system::{cartesian_to_radec, radec_to_cartesian};
use crate::units::Angle;

/// Position on the celestial sphere in equatorial coordinates.
///
/// Neither component is wrapped: a right ascension of `-1h` stays `-1h`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EquatorialCoordinate {
    right_ascension: Angle,
    declination: Angle,
}

impl EquatorialCoordinate {
    pub fn new(right_ascension: Angle, declination: Angle) -> Self {
        EquatorialCoordinate {
            right_ascension,
            declination,
        }
    }

    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        Self::new(Angle::from_degrees(ra_deg), Angle::from_degrees(dec_deg))
    }

    /// Right ascension as sexagesimal hours, declination in degrees.
    pub fn from_hours_degrees(ra_hours: f64, dec_deg: f64) -> Self {
        Self::new(Angle::from_hours(ra_hours), Angle::from_degrees(dec_deg))
    }

    pub fn right_ascension(&self) -> Angle {
        self.right_ascension
    }

    pub fn declination(&self) -> Angle {
        self.declination
    }

    /// Hour angle `H = LST − α`, not wrapped.
    pub fn hour_angle(&self, local_sidereal_time: Angle) -> Angle {
        local_sidereal_time - self.right_ascension
    }

    /// Unit direction vector in the equatorial cartesian frame.
    pub fn to_unit_vector(&self) -> Vector3<f64> {
        radec_to_cartesian(self.right_ascension.radians(), self.declination.radians(), 1.0)
    }

    /// Direction of a cartesian vector; α in `[0, 2π)`.
    ///
    /// A zero vector maps to `(0, 0)`.
    pub fn from_vector(v: &Vector3<f64>) -> Self {
        let (alpha, delta, _) = cartesian_to_radec(v);
        Self::new(Angle::from_radians(alpha), Angle::from_radians(delta))
    }

    pub fn angular_separation(&self, other: &Self) -> Angle {
        super::angular_separation(
            self.declination,
            self.right_ascension,
            other.declination,
            other.right_ascension,
        )
    }
}

/// Linear drift of an equatorial position: `Δα` and `Δδ` accumulated over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProperMotion {
    delta_right_ascension: Angle,
    delta_declination: Angle,
    duration: Duration,
}

impl Default for ProperMotion {
    /// No motion, expressed per second.
    fn default() -> Self {
        ProperMotion {
            delta_right_ascension: Angle::ZERO,
            delta_declination: Angle::ZERO,
            duration: Duration::from_seconds(1.0),
        }
    }
}

impl ProperMotion {
    /// Errors
    /// ------
    /// * [`OrreryError::InvalidParameter`] when `duration` is not strictly positive.
    pub fn new(
        delta_right_ascension: Angle,
        delta_declination: Angle,
        duration: Duration,
    ) -> Result<Self, OrreryError> {
        if duration.to_seconds() <= 0.0 {
            return Err(OrreryError::InvalidParameter(format!(
                "proper motion duration must be positive, got {duration}"
            )));
        }
        Ok(ProperMotion {
            delta_right_ascension,
            delta_declination,
            duration,
        })
    }

    pub fn delta_right_ascension(&self) -> Angle {
        self.delta_right_ascension
    }

    pub fn delta_declination(&self) -> Angle {
        self.delta_declination
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Position of `coordinate` after `elapsed`, assuming a constant rate.
    ///
    /// `elapsed` may be negative to go back in time.
    pub fn apply(
        &self,
        coordinate: &EquatorialCoordinate,
        elapsed: Duration,
    ) -> EquatorialCoordinate {
        let ratio = elapsed.to_seconds() / self.duration.to_seconds();
        EquatorialCoordinate::new(
            coordinate.right_ascension + self.delta_right_ascension * ratio,
            coordinate.declination + self.delta_declination * ratio,
        )
    }
}
