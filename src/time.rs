//! # Sidereal time
//!
//! Greenwich Mean Sidereal Time (IAU 1982) from a Modified Julian Date or a
//! [`hifitime::Epoch`], and the local sidereal time of an observer.
//!
//! UT1 is approximated by UTC (|UT1 − UTC| < 0.9 s, i.e. below 4·10⁻⁵ rad of
//! sidereal angle).
use hifitime::Epoch;

use crate::constants::{Radian, DPI, MJD, SECONDS_PER_DAY, T2000};
use crate::kepler::principal_angle;
use crate::units::Angle;

/// Compute the Greenwich Mean Sidereal Time (GMST) in radians
/// for a given Modified Julian Date (UT1 time scale).
///
/// # Arguments
/// * `tjm` - Modified Julian Date (MJD, UT1 time scale)
///
/// # Returns
/// * GMST angle in radians, normalized to the interval [0, 2π).
///
/// # Details
/// The GMST is computed in two steps:
/// 1. A cubic polynomial (coefficients C0–C3) gives GMST at 0h UT1
///    in seconds for the given date.
/// 2. The rotation of the Earth during the fractional day is added
///    using the factor `RAP`, which converts solar days to sidereal days.
///
/// # References
/// * IAU 1982, IERS Conventions 1996/2000.
/// * Explanatory Supplement to the Astronomical Almanac (1992).
pub fn gmst(tjm: MJD) -> Radian {
    const C0: f64 = 24110.54841;
    const C1: f64 = 8640184.812866;
    const C2: f64 = 9.3104e-2;
    const C3: f64 = -6.2e-6;

    // sidereal / solar day ratio
    const RAP: f64 = 1.00273790934;

    let itjm = tjm.floor();
    let t = (itjm - T2000) / 36525.0;

    let gmst0 = (((C3 * t + C2) * t + C1) * t + C0) * DPI / SECONDS_PER_DAY;

    let h = tjm.fract() * DPI;

    principal_angle(gmst0 + h * RAP)
}

/// Greenwich Mean Sidereal Time at `epoch`, in `[0, 2π)`.
pub fn greenwich_mean_sidereal_time(epoch: &Epoch) -> Angle {
    Angle::from_radians(gmst(epoch.to_mjd_utc_days()))
}

/// Local sidereal time `GMST + λ` for an observer at east longitude `longitude`,
/// wrapped to `[0, 2π)`.
pub fn local_sidereal_time(epoch: &Epoch, longitude: Angle) -> Angle {
    (greenwich_mean_sidereal_time(epoch) + longitude).wrap()
}
