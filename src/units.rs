//! # Physical quantities
//!
//! Thin, `Copy` newtypes over `f64` carrying a physical dimension:
//!
//! | Type | Storage unit |
//! |------|--------------|
//! | [`Angle`] | radians |
//! | [`Length`] | metres |
//! | [`Speed`] | metres per second |
//! | [`Mass`] | kilograms |
//!
//! All of them support `+`, `-`, unary `-`, multiplication and division by a
//! scalar, and division by a value of the same dimension (yielding a bare `f64`).
//! Durations are not modelled here: use [`hifitime::Duration`].
//!
//! Angles additionally carry trigonometry and wrapping:
//!
//! ```rust
//! use orrery::units::Angle;
//!
//! let a = Angle::from_degrees(-90.0).wrap();
//! assert!((a.degrees() - 270.0).abs() < 1e-12);
//! ```
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::constants::{AU_METRES, DPI, RADEG, RADH, RADSEC};
use crate::kepler::principal_angle;

macro_rules! impl_quantity_ops {
    ($t:ident) => {
        impl Add for $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                $t(self.0 + rhs.0)
            }
        }

        impl Sub for $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $t(self.0 - rhs.0)
            }
        }

        impl Neg for $t {
            type Output = $t;
            #[inline]
            fn neg(self) -> Self {
                $t(-self.0)
            }
        }

        impl Mul<f64> for $t {
            type Output = $t;
            #[inline]
            fn mul(self, k: f64) -> Self {
                $t(self.0 * k)
            }
        }

        impl Mul<$t> for f64 {
            type Output = $t;
            #[inline]
            fn mul(self, q: $t) -> $t {
                $t(self * q.0)
            }
        }

        impl Div<f64> for $t {
            type Output = $t;
            #[inline]
            fn div(self, k: f64) -> Self {
                $t(self.0 / k)
            }
        }

        impl Div for $t {
            type Output = f64;
            #[inline]
            fn div(self, rhs: Self) -> f64 {
                self.0 / rhs.0
            }
        }
    };
}

// -------------------------------------------------------------------------------------------------
// Angle
// -------------------------------------------------------------------------------------------------

/// A plane angle, stored in radians.
///
/// No range is enforced on construction; use [`Angle::wrap`] for the canonical
/// `[0, 2π)` range or [`Angle::wrap_signed`] for `[-π, π)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Angle(f64);

impl Angle {
    /// Zero angle.
    pub const ZERO: Angle = Angle(0.0);
    /// Half a turn.
    pub const PI: Angle = Angle(std::f64::consts::PI);
    /// A quarter turn.
    pub const HALF_PI: Angle = Angle(std::f64::consts::FRAC_PI_2);

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Angle(rad)
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Angle(deg * RADEG)
    }

    /// Hours of right ascension or sidereal time (24h = 2π).
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Angle(h * RADH)
    }

    #[inline]
    pub fn from_arcseconds(arcsec: f64) -> Self {
        Angle(arcsec * RADSEC)
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0 / RADEG
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.0 / RADH
    }

    #[inline]
    pub fn arcseconds(self) -> f64 {
        self.0 / RADSEC
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    #[inline]
    pub fn tan(self) -> f64 {
        self.0.tan()
    }

    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.0.sin_cos()
    }

    /// Arcsine of `x`, with `x` clamped into `[-1, 1]` so that rounding noise
    /// on a geometrically valid argument never produces NaN.
    #[inline]
    pub fn asin(x: f64) -> Self {
        Angle(x.clamp(-1.0, 1.0).asin())
    }

    /// Arccosine of `x`, with `x` clamped into `[-1, 1]`.
    #[inline]
    pub fn acos(x: f64) -> Self {
        Angle(x.clamp(-1.0, 1.0).acos())
    }

    /// Four-quadrant arctangent of `y / x`, in `(-π, π]`.
    #[inline]
    pub fn atan2(y: f64, x: f64) -> Self {
        Angle(y.atan2(x))
    }

    /// Normalize to the canonical range `[0, 2π)`.
    #[inline]
    pub fn wrap(self) -> Self {
        Angle(principal_angle(self.0))
    }

    /// Normalize to `[-π, π)`.
    ///
    /// Handy to present a wrapped latitude (stored in `[0, 2π)`) with its sign.
    #[inline]
    pub fn wrap_signed(self) -> Self {
        let w = principal_angle(self.0);
        if w >= std::f64::consts::PI {
            Angle(w - DPI)
        } else {
            Angle(w)
        }
    }

    #[inline]
    pub fn abs(self) -> Self {
        Angle(self.0.abs())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl_quantity_ops!(Angle);

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}

// -------------------------------------------------------------------------------------------------
// Length
// -------------------------------------------------------------------------------------------------

/// A distance, stored in metres. May be infinite (parabolic semimajor axis).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Length(f64);

impl Length {
    pub const ZERO: Length = Length(0.0);
    pub const INFINITY: Length = Length(f64::INFINITY);

    #[inline]
    pub const fn from_metres(m: f64) -> Self {
        Length(m)
    }

    #[inline]
    pub fn from_kilometres(km: f64) -> Self {
        Length(km * 1e3)
    }

    #[inline]
    pub fn from_au(au: f64) -> Self {
        Length(au * AU_METRES)
    }

    #[inline]
    pub fn metres(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn kilometres(self) -> f64 {
        self.0 * 1e-3
    }

    #[inline]
    pub fn au(self) -> f64 {
        self.0 / AU_METRES
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl_quantity_ops!(Length);

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} km", self.kilometres())
    }
}

// -------------------------------------------------------------------------------------------------
// Speed
// -------------------------------------------------------------------------------------------------

/// A speed, stored in metres per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Speed(f64);

impl Speed {
    pub const ZERO: Speed = Speed(0.0);

    #[inline]
    pub const fn from_metres_per_second(v: f64) -> Self {
        Speed(v)
    }

    #[inline]
    pub fn from_kilometres_per_second(v: f64) -> Self {
        Speed(v * 1e3)
    }

    #[inline]
    pub fn metres_per_second(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn kilometres_per_second(self) -> f64 {
        self.0 * 1e-3
    }
}

impl_quantity_ops!(Speed);

// -------------------------------------------------------------------------------------------------
// Mass
// -------------------------------------------------------------------------------------------------

/// A mass, stored in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Mass(f64);

impl Mass {
    pub const ZERO: Mass = Mass(0.0);

    #[inline]
    pub const fn from_kilograms(kg: f64) -> Self {
        Mass(kg)
    }

    #[inline]
    pub fn kilograms(self) -> f64 {
        self.0
    }
}

impl_quantity_ops!(Mass);

#[cfg(test)]
mod units_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_angle_units() {
        assert_abs_diff_eq!(Angle::from_degrees(180.0).radians(), PI, epsilon = 1e-15);
        assert_abs_diff_eq!(Angle::from_hours(6.0).degrees(), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Angle::from_arcseconds(3600.0).degrees(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_wrap() {
        assert_abs_diff_eq!(Angle::from_degrees(-90.0).wrap().degrees(), 270.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Angle::from_degrees(720.5).wrap().degrees(), 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(
            Angle::from_degrees(270.0).wrap_signed().degrees(),
            -90.0,
            epsilon = 1e-12
        );
        assert_eq!(Angle::ZERO.wrap(), Angle::ZERO);
    }

    #[test]
    fn test_inverse_trig_clamps() {
        assert_eq!(Angle::acos(1.0 + 1e-15).radians(), 0.0);
        assert_abs_diff_eq!(Angle::asin(-1.0 - 1e-15).radians(), -PI / 2.0);
    }

    #[test]
    fn test_quantity_ops() {
        let a = Length::from_kilometres(7000.0);
        let b = Length::from_metres(500.0);
        assert_eq!((a + b).metres(), 7_000_500.0);
        assert_eq!((a - b).metres(), 6_999_500.0);
        assert_eq!((a * 2.0).kilometres(), 14000.0);
        assert_eq!(a / b, 14000.0);
        assert_eq!((-Speed::from_kilometres_per_second(7.5)).metres_per_second(), -7500.0);
        assert!(Mass::from_kilograms(1.0) > Mass::ZERO);
    }
}
