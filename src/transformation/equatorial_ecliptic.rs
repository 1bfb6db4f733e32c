use serde::{Deserialize, Serialize};

use crate::coordinates::{EclipticCoordinate, EquatorialCoordinate};
use crate::transformation::Transformation;
use crate::units::Angle;

/// Equatorial (α, δ) → ecliptic (β, λ) for a given obliquity ε.
///
/// Formula
/// -------
/// ```text
/// β = asin(sin δ·cos ε − cos δ·sin ε·sin α)
/// λ = atan2(sin α·cos ε + tan δ·sin ε, cos α)
/// ```
/// `λ` is evaluated with both atan2 arguments multiplied by `cos δ ≥ 0`, which
/// keeps the quadrant and stays finite at the poles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialToEcliptic {
    obliquity: Angle,
}

impl EquatorialToEcliptic {
    pub fn new(obliquity: Angle) -> Self {
        EquatorialToEcliptic { obliquity }
    }

    pub fn obliquity(&self) -> Angle {
        self.obliquity
    }
}

impl Transformation<EquatorialCoordinate, EclipticCoordinate> for EquatorialToEcliptic {
    fn forward(&self, from: &EquatorialCoordinate) -> EclipticCoordinate {
        let (sin_e, cos_e) = self.obliquity.sin_cos();
        let (sin_a, cos_a) = from.right_ascension().sin_cos();
        let (sin_d, cos_d) = from.declination().sin_cos();

        let latitude = Angle::asin(sin_d * cos_e - cos_d * sin_e * sin_a);
        let longitude = Angle::atan2(sin_a * cos_d * cos_e + sin_d * sin_e, cos_a * cos_d);

        EclipticCoordinate::new(latitude, longitude)
    }

    /// Analytic inverse:
    ///
    /// ```text
    /// δ = asin(sin β·cos ε + cos β·sin ε·sin λ)
    /// α = atan2(sin λ·cos ε − tan β·sin ε, cos λ)
    /// ```
    /// with `α` wrapped to `[0, 2π)`: a round trip returns the input right
    /// ascension modulo 2π, so `−0.5` comes back as `2π − 0.5`.
    fn reverse(&self, to: &EclipticCoordinate) -> EquatorialCoordinate {
        let (sin_e, cos_e) = self.obliquity.sin_cos();
        let (sin_l, cos_l) = to.longitude().sin_cos();
        let (sin_b, cos_b) = to.latitude().sin_cos();

        let declination = Angle::asin(sin_b * cos_e + cos_b * sin_e * sin_l);
        let right_ascension = Angle::atan2(sin_l * cos_b * cos_e - sin_b * sin_e, cos_l * cos_b);

        EquatorialCoordinate::new(right_ascension.wrap(), declination)
    }
}

/// Ecliptic → equatorial, the inverse of [`EquatorialToEcliptic`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticToEquatorial {
    inner: EquatorialToEcliptic,
}

impl EclipticToEquatorial {
    pub fn new(obliquity: Angle) -> Self {
        EclipticToEquatorial {
            inner: EquatorialToEcliptic::new(obliquity),
        }
    }

    pub fn obliquity(&self) -> Angle {
        self.inner.obliquity()
    }
}

impl Transformation<EclipticCoordinate, EquatorialCoordinate> for EclipticToEquatorial {
    fn forward(&self, from: &EclipticCoordinate) -> EquatorialCoordinate {
        self.inner.reverse(from)
    }

    fn reverse(&self, to: &EquatorialCoordinate) -> EclipticCoordinate {
        self.inner.forward(to)
    }
}

#[cfg(test)]
mod equatorial_ecliptic_test {
    use super::*;
    use crate::constants::{DPI, OBLIQUITY_J2000_ARCSEC, T2000};
    use crate::ref_system::{obleq, rotmt, Axis};
    use approx::assert_abs_diff_eq;

    fn j2000() -> EquatorialToEcliptic {
        EquatorialToEcliptic::new(Angle::from_arcseconds(OBLIQUITY_J2000_ARCSEC))
    }

    #[test]
    fn test_equinox_and_solstice() {
        let t = j2000();

        // vernal equinox stays put
        let ecl = t.forward(&EquatorialCoordinate::from_degrees(0.0, 0.0));
        assert_abs_diff_eq!(ecl.latitude_signed().radians(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(ecl.longitude().radians(), 0.0, epsilon = 1e-15);

        // summer solstice: α = 90°, δ = ε
        let eps = t.obliquity();
        let ecl = t.forward(&EquatorialCoordinate::new(Angle::HALF_PI, eps));
        assert_abs_diff_eq!(ecl.latitude_signed().radians(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ecl.longitude().degrees(), 90.0, epsilon = 1e-10);

        // north celestial pole sits at β = 90° − ε, λ = 90°
        let ecl = t.forward(&EquatorialCoordinate::new(Angle::ZERO, Angle::HALF_PI));
        assert_abs_diff_eq!(
            ecl.latitude().radians(),
            (Angle::HALF_PI - eps).radians(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(ecl.longitude().degrees(), 90.0, epsilon = 1e-10);
    }

    #[test]
    fn test_matches_rotation_matrix() {
        let t = j2000();
        let rot = rotmt(-obleq(T2000), Axis::X);

        for (ra, dec) in [(15.0, 10.0), (130.0, -40.0), (250.0, 65.0), (320.0, -5.0)] {
            let eq = EquatorialCoordinate::from_degrees(ra, dec);
            let ecl = t.forward(&eq);

            let v = rot * eq.to_unit_vector();
            let lat = Angle::asin(v.z);
            let lon = Angle::atan2(v.y, v.x).wrap();

            assert_abs_diff_eq!(ecl.latitude_signed().radians(), lat.radians(), epsilon = 1e-12);
            assert_abs_diff_eq!(ecl.longitude().radians(), lon.radians(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reverse_inverts_forward() {
        let t = j2000();
        for (ra, dec) in [(0.5, 0.1), (2.0, -0.8), (3.5, 1.2), (5.9, -0.01), (4.4, 0.0)] {
            let eq = EquatorialCoordinate::new(Angle::from_radians(ra), Angle::from_radians(dec));
            let back = t.reverse(&t.forward(&eq));
            assert_abs_diff_eq!(back.right_ascension().radians(), ra, epsilon = 1e-9);
            assert_abs_diff_eq!(back.declination().radians(), dec, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_reverse_wraps_right_ascension() {
        let t = j2000();
        let eq = EquatorialCoordinate::new(Angle::from_radians(-0.5), Angle::from_radians(0.3));
        let back = t.reverse(&t.forward(&eq));
        assert_abs_diff_eq!(back.right_ascension().radians(), DPI - 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(back.declination().radians(), 0.3, epsilon = 1e-9);
    }

    #[test]
    fn test_delegated_inverse() {
        let forward = j2000();
        let inverse = EclipticToEquatorial::new(forward.obliquity());
        let ecl = EclipticCoordinate::from_degrees(-12.0, 200.0);

        assert_eq!(inverse.forward(&ecl), forward.reverse(&ecl));
        let eq = inverse.forward(&ecl);
        assert_eq!(inverse.reverse(&eq), forward.forward(&eq));
    }
}
