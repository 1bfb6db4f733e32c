use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::constants::{OBLIQUITY_J2000_ARCSEC, RADSEC};
use crate::coordinates::EclipticCoordinate;
use crate::frames::{EquatorialGeocentric, ReferenceFrame, TransformationTo};
use crate::ref_system::obleq;
use crate::transformation::EclipticToEquatorial;
use crate::units::Angle;

/// Geocentric ecliptic frame, tilted from the equator by the obliquity ε.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticGeocentric {
    obliquity: Angle,
}

impl EclipticGeocentric {
    /// Mean ecliptic of J2000 (IAU 1976, ε = 84381.448″).
    pub const J2000: EclipticGeocentric = EclipticGeocentric {
        obliquity: Angle::from_radians(OBLIQUITY_J2000_ARCSEC * RADSEC),
    };

    pub fn new(obliquity: Angle) -> Self {
        EclipticGeocentric { obliquity }
    }

    /// Mean ecliptic of date, from the IAU 1976 obliquity polynomial
    /// evaluated at `epoch` (TT).
    pub fn at_epoch(epoch: &Epoch) -> Self {
        Self::new(Angle::from_radians(obleq(epoch.to_mjd_tt_days())))
    }

    pub fn obliquity(&self) -> Angle {
        self.obliquity
    }
}

impl Default for EclipticGeocentric {
    fn default() -> Self {
        Self::J2000
    }
}

impl ReferenceFrame for EclipticGeocentric {
    type Coordinate = EclipticCoordinate;
}

impl TransformationTo<EquatorialGeocentric> for EclipticGeocentric {
    type Output = EclipticToEquatorial;

    fn transformation_to(&self, _frame: &EquatorialGeocentric) -> Self::Output {
        EclipticToEquatorial::new(self.obliquity)
    }
}
