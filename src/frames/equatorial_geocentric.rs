use serde::{Deserialize, Serialize};

use crate::coordinates::EquatorialCoordinate;
use crate::frames::{
    EclipticGeocentric, GalacticFrame, HorizontalObserver, ReferenceFrame, TransformationTo,
};
use crate::transformation::{EquatorialToEcliptic, EquatorialToGalactic, EquatorialToHorizontal};

/// Geocentric equator and equinox frame. Carries no parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EquatorialGeocentric;

impl ReferenceFrame for EquatorialGeocentric {
    type Coordinate = EquatorialCoordinate;
}

impl TransformationTo<EclipticGeocentric> for EquatorialGeocentric {
    type Output = EquatorialToEcliptic;

    fn transformation_to(&self, frame: &EclipticGeocentric) -> Self::Output {
        EquatorialToEcliptic::new(frame.obliquity())
    }
}

impl TransformationTo<HorizontalObserver> for EquatorialGeocentric {
    type Output = EquatorialToHorizontal;

    fn transformation_to(&self, frame: &HorizontalObserver) -> Self::Output {
        EquatorialToHorizontal::new(frame.local_sidereal_time(), frame.latitude())
    }
}

impl TransformationTo<GalacticFrame> for EquatorialGeocentric {
    type Output = EquatorialToGalactic;

    fn transformation_to(&self, _frame: &GalacticFrame) -> Self::Output {
        EquatorialToGalactic::new()
    }
}
