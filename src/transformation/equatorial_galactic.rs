use serde::{Deserialize, Serialize};

use crate::constants::Degree;
use crate::coordinates::{EquatorialCoordinate, GalacticCoordinate};
use crate::transformation::Transformation;
use crate::units::Angle;

/// Right ascension of the north galactic pole (J2000), degrees.
pub const NGP_RIGHT_ASCENSION_DEG: Degree = 192.859_48;
/// Declination of the north galactic pole (J2000), degrees.
pub const NGP_DECLINATION_DEG: Degree = 27.128_25;
/// Galactic longitude of the north celestial pole (J2000), degrees.
pub const NCP_GALACTIC_LONGITUDE_DEG: Degree = 122.931_92;

/// J2000 equatorial (α, δ) → galactic (b, l).
///
/// Formula
/// -------
/// ```text
/// sin b = sin δ·sin δ_GP + cos δ·cos δ_GP·cos(α − α_GP)
/// l     = l_NCP − atan2(cos δ·sin(α − α_GP), sin δ·cos δ_GP − cos δ·sin δ_GP·cos(α − α_GP))
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialToGalactic {
    pole_right_ascension: Angle,
    pole_declination: Angle,
    ncp_longitude: Angle,
}

impl Default for EquatorialToGalactic {
    fn default() -> Self {
        Self::new()
    }
}

impl EquatorialToGalactic {
    pub fn new() -> Self {
        EquatorialToGalactic {
            pole_right_ascension: Angle::from_degrees(NGP_RIGHT_ASCENSION_DEG),
            pole_declination: Angle::from_degrees(NGP_DECLINATION_DEG),
            ncp_longitude: Angle::from_degrees(NCP_GALACTIC_LONGITUDE_DEG),
        }
    }
}

impl Transformation<EquatorialCoordinate, GalacticCoordinate> for EquatorialToGalactic {
    fn forward(&self, from: &EquatorialCoordinate) -> GalacticCoordinate {
        let (sin_dp, cos_dp) = self.pole_declination.sin_cos();
        let (sin_d, cos_d) = from.declination().sin_cos();
        let (sin_da, cos_da) = (from.right_ascension() - self.pole_right_ascension).sin_cos();

        let latitude = Angle::asin(sin_d * sin_dp + cos_d * cos_dp * cos_da);
        let longitude = self.ncp_longitude
            - Angle::atan2(cos_d * sin_da, sin_d * cos_dp - cos_d * sin_dp * cos_da);

        GalacticCoordinate::new(latitude, longitude)
    }

    /// ```text
    /// sin δ = sin b·sin δ_GP + cos b·cos δ_GP·cos(l_NCP − l)
    /// α     = α_GP + atan2(cos b·sin(l_NCP − l), sin b·cos δ_GP − cos b·sin δ_GP·cos(l_NCP − l))
    /// ```
    /// with `α` wrapped to `[0, 2π)`: a round trip returns the input right
    /// ascension modulo 2π, so `−0.5` comes back as `2π − 0.5`.
    fn reverse(&self, to: &GalacticCoordinate) -> EquatorialCoordinate {
        let (sin_dp, cos_dp) = self.pole_declination.sin_cos();
        let (sin_b, cos_b) = to.latitude().sin_cos();
        let (sin_dl, cos_dl) = (self.ncp_longitude - to.longitude()).sin_cos();

        let declination = Angle::asin(sin_b * sin_dp + cos_b * cos_dp * cos_dl);
        let right_ascension = self.pole_right_ascension
            + Angle::atan2(cos_b * sin_dl, sin_b * cos_dp - cos_b * sin_dp * cos_dl);

        EquatorialCoordinate::new(right_ascension.wrap(), declination)
    }
}

/// Galactic → J2000 equatorial, the inverse of [`EquatorialToGalactic`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GalacticToEquatorial {
    inner: EquatorialToGalactic,
}

impl GalacticToEquatorial {
    pub fn new() -> Self {
        GalacticToEquatorial {
            inner: EquatorialToGalactic::new(),
        }
    }
}

impl Transformation<GalacticCoordinate, EquatorialCoordinate> for GalacticToEquatorial {
    fn forward(&self, from: &GalacticCoordinate) -> EquatorialCoordinate {
        self.inner.reverse(from)
    }

    fn reverse(&self, to: &EquatorialCoordinate) -> GalacticCoordinate {
        self.inner.forward(to)
    }
}
