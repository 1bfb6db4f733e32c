use hifitime::Epoch;

use crate::coordinates::{EquatorialCoordinate, GeographicCoordinate, HorizontalCoordinate};
use crate::frames::{EclipticGeocentric, EquatorialGeocentric, ReferenceFrame, TransformationTo};
use crate::time::local_sidereal_time;
use crate::transformation::{
    EquatorialToEcliptic, HorizontalToEquatorial, Transformation, TransformationChain,
};
use crate::units::Angle;

/// Local horizon of an observer at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalObserver {
    observation_time: Epoch,
    location: GeographicCoordinate,
}

impl HorizontalObserver {
    pub fn new(observation_time: Epoch, location: GeographicCoordinate) -> Self {
        HorizontalObserver {
            observation_time,
            location,
        }
    }

    pub fn observation_time(&self) -> Epoch {
        self.observation_time
    }

    pub fn location(&self) -> &GeographicCoordinate {
        &self.location
    }

    /// Observer latitude in `[-π, π)`, north positive.
    pub fn latitude(&self) -> Angle {
        self.location.latitude_signed()
    }

    /// `GMST(observation_time) + longitude`, in `[0, 2π)`.
    pub fn local_sidereal_time(&self) -> Angle {
        local_sidereal_time(&self.observation_time, self.location.longitude())
    }
}

impl ReferenceFrame for HorizontalObserver {
    type Coordinate = HorizontalCoordinate;
}

impl TransformationTo<EquatorialGeocentric> for HorizontalObserver {
    type Output = HorizontalToEquatorial;

    fn transformation_to(&self, _frame: &EquatorialGeocentric) -> Self::Output {
        HorizontalToEquatorial::new(self.local_sidereal_time(), self.latitude())
    }
}

impl TransformationTo<EclipticGeocentric> for HorizontalObserver {
    type Output =
        TransformationChain<HorizontalToEquatorial, EquatorialToEcliptic, EquatorialCoordinate>;

    fn transformation_to(&self, frame: &EclipticGeocentric) -> Self::Output {
        HorizontalToEquatorial::new(self.local_sidereal_time(), self.latitude())
            .then(EquatorialToEcliptic::new(frame.obliquity()))
    }
}
