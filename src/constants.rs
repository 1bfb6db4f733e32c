//! # Constants and type definitions for Orrery
//!
//! This module centralizes the **physical constants**, **conversion factors** and
//! **numerical thresholds** used throughout the `orrery` library.
//!
//! ## Overview
//!
//! - Gravitational constant and reference masses
//! - Unit conversions (degrees ↔ radians, hours ↔ radians, AU ↔ metres)
//! - Reference epochs (J2000)
//! - Thresholds used to detect degenerate orbital geometry

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Astronomical Unit in metres (IAU 2012)
pub const AU_METRES: f64 = 149_597_870_700.0;

/// Newtonian constant of gravitation in m³·kg⁻¹·s⁻² (CODATA 2018)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Mass of the Earth in kilograms
pub const EARTH_MASS: f64 = 5.972_2e24;

/// Mass of the Sun in kilograms
pub const SUN_MASS: f64 = 1.988_47e30;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 51544.5;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Hours → radians
pub const RADH: f64 = DPI / 24.0;

/// Mean obliquity of the ecliptic at J2000.0 (IAU 1976), in arcseconds
pub const OBLIQUITY_J2000_ARCSEC: ArcSec = 84_381.448;

// -------------------------------------------------------------------------------------------------
// Numerical thresholds
// -------------------------------------------------------------------------------------------------

/// Eccentricity below which an orbit is treated as circular.
pub const CIRCULAR_EPS: f64 = 1e-11;

/// Ratio `|N| / |H|` below which the node line is undefined (equatorial orbit).
pub const EQUATORIAL_EPS: f64 = 1e-11;

/// Default number of decimal digits targeted by the Kepler solver.
pub const KEPLER_DEFAULT_PRECISION: u32 = 8;

/// Default iteration cap of the Kepler solver.
pub const KEPLER_DEFAULT_MAX_ITER: usize = 30;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
