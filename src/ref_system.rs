//! # Reference-system primitives
//!
//! Mean obliquity of the ecliptic, elementary axis rotations and the
//! cartesian ↔ (α, δ, ρ) conversions shared by the coordinate frames.
use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{Radian, MJD, RADSEC, T2000};
use crate::kepler::principal_angle;
use crate::units::Angle;

/// Principal axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Compute the mean obliquity of the ecliptic at a given epoch (IAU 1976 model).
///
/// Arguments
/// ---------
/// * `tjm`: Modified Julian Date (TT scale).
///
/// Returns
/// --------
/// * Mean obliquity of the ecliptic in radians.
///
/// Formula
/// -------
/// ```text
/// ε(t) = ε₀ + ε₁·T + ε₂·T² + ε₃·T³,   T = (tjm − T2000) / 36525
/// ```
/// with the coefficients in arcseconds, evaluated with Horner's scheme.
pub fn obleq(tjm: MJD) -> Radian {
    let ob0 = ((23.0 * 3600.0 + 26.0 * 60.0) + 21.448) * RADSEC;
    let ob1 = -46.815 * RADSEC;
    let ob2 = -0.0006 * RADSEC;
    let ob3 = 0.00181 * RADSEC;

    let t = (tjm - T2000) / 36525.0;

    ((ob3 * t + ob2) * t + ob1) * t + ob0
}

/// Right-handed 3×3 rotation matrix by `alpha` around a principal axis.
///
/// The rotation is **active**: `x' = R · x` rotates the vector counter-clockwise
/// when looking down the axis toward the origin. A change of basis by `alpha`
/// is therefore `rotmt(-alpha, axis)`.
pub fn rotmt(alpha: f64, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Convert a cartesian vector to right ascension, declination and norm.
///
/// Returns
/// --------
/// * Tuple `(α, δ, ρ)` with `α ∈ [0, 2π)`, `δ ∈ [−π/2, π/2]` and `ρ = |v|`.
///
/// Remarks
/// -------
/// * A zero vector yields `(0, 0, 0)`; a vector along the pole yields `α = 0`.
pub fn cartesian_to_radec(cartesian_position: &Vector3<f64>) -> (f64, f64, f64) {
    let pos_norm = cartesian_position.norm();
    if pos_norm == 0. {
        return (0.0, 0.0, pos_norm);
    }

    let delta = Angle::asin(cartesian_position.z / pos_norm).radians();

    if cartesian_position.x == 0.0 && cartesian_position.y == 0.0 {
        return (0.0, delta, pos_norm);
    }

    let alpha = principal_angle(cartesian_position.y.atan2(cartesian_position.x));
    (alpha, delta, pos_norm)
}

/// Inverse of [`cartesian_to_radec`].
pub fn radec_to_cartesian(alpha: f64, delta: f64, rho: f64) -> Vector3<f64> {
    let (sin_a, cos_a) = alpha.sin_cos();
    let (sin_d, cos_d) = delta.sin_cos();
    Vector3::new(rho * cos_d * cos_a, rho * cos_d * sin_a, rho * sin_d)
}
