use serde::{Deserialize, Serialize};

use crate::coordinates::GalacticCoordinate;
use crate::frames::{EquatorialGeocentric, ReferenceFrame, TransformationTo};
use crate::transformation::GalacticToEquatorial;

/// IAU galactic frame, with its pole fixed in J2000 equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GalacticFrame;

impl ReferenceFrame for GalacticFrame {
    type Coordinate = GalacticCoordinate;
}

impl TransformationTo<EquatorialGeocentric> for GalacticFrame {
    type Output = GalacticToEquatorial;

    fn transformation_to(&self, _frame: &EquatorialGeocentric) -> Self::Output {
        GalacticToEquatorial::new()
    }
}
