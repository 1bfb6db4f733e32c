//! # Keplerian orbital elements
//!
//! [`OrbitalElements`] stores the classical set
//!
//! 1. **a** – semimajor axis ([`Length`], `+∞` for a parabolic orbit)
//! 2. **i** – inclination
//! 3. **e** – eccentricity (unitless, `≥ 0`)
//! 4. **Ω** – longitude of the ascending node
//! 5. **ω** – argument of periapsis
//! 6. one **anomaly** (mean, true or eccentric, see [`Anomaly`])
//!
//! The value is immutable: fields are private and only read through accessors.
//! The stored anomaly is wrapped to `[0, 2π)` at construction and returned
//! verbatim when the matching kind is requested; the two other kinds are
//! recomputed from it on every call through [`crate::kepler`].
//!
//! ## Domain
//!
//! The anomaly conversions are only meaningful for elliptic orbits (`e < 1`).
//! For `e ≥ 1` the non-stored kinds may come out as NaN; check
//! [`OrbitalElements::is_elliptic`] first.
//!
//! ## Example
//!
//! ```rust
//! use orrery::orbit_type::orbital_elements::OrbitalElements;
//! use orrery::units::{Angle, Length};
//!
//! let elements = OrbitalElements::from_mean(
//!     Length::from_au(1.8),
//!     Angle::from_degrees(11.6),
//!     0.28,
//!     Angle::from_degrees(0.45),
//!     Angle::from_degrees(71.3),
//!     Angle::from_radians(1.2),
//! )
//! .unwrap();
//!
//! assert_eq!(elements.mean_anomaly().radians(), 1.2);
//! let nu = elements.true_anomaly();
//! ```
use std::fmt;

use hifitime::Duration;
use serde::{Deserialize, Serialize};

use crate::constants::{DPI, GRAVITATIONAL_CONSTANT, KEPLER_DEFAULT_PRECISION};
use crate::kepler::{
    eccentric_to_mean, eccentric_to_true, mean_to_eccentric, mean_to_true, true_to_eccentric,
    true_to_mean, KeplerSolver,
};
use crate::orbit_type::{Anomaly, AnomalyKind};
use crate::orrery_errors::OrreryError;
use crate::units::{Angle, Length, Mass};

/// Classical orbital elements with a single stored anomaly.
///
/// See also
/// --------
/// * [`OrbitalElements::from_state_vector`] – derive the elements from position and velocity.
/// * [`crate::kepler`] – the anomaly conversions behind the accessors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOrbitalElements")]
pub struct OrbitalElements {
    semimajor_axis: Length,
    inclination: Angle,
    eccentricity: f64,
    longitude_of_ascending_node: Angle,
    argument_of_periapsis: Angle,
    anomaly: Anomaly,
}

/// Unchecked field set read by serde; validated by [`OrbitalElements::new`].
#[derive(Deserialize)]
struct RawOrbitalElements {
    semimajor_axis: Length,
    inclination: Angle,
    eccentricity: f64,
    longitude_of_ascending_node: Angle,
    argument_of_periapsis: Angle,
    anomaly: Anomaly,
}

impl TryFrom<RawOrbitalElements> for OrbitalElements {
    type Error = OrreryError;

    fn try_from(raw: RawOrbitalElements) -> Result<Self, Self::Error> {
        OrbitalElements::new(
            raw.semimajor_axis,
            raw.inclination,
            raw.eccentricity,
            raw.longitude_of_ascending_node,
            raw.argument_of_periapsis,
            raw.anomaly,
        )
    }
}

impl OrbitalElements {
    /// Build an element set from any anomaly kind.
    ///
    /// Arguments
    /// ---------
    /// * `semimajor_axis`: `a`, may be negative (hyperbolic) or `+∞` (parabolic), not NaN.
    /// * `inclination`, `longitude_of_ascending_node`, `argument_of_periapsis`: stored as given.
    /// * `eccentricity`: finite and non-negative.
    /// * `anomaly`: wrapped to `[0, 2π)`, kind preserved.
    ///
    /// Errors
    /// ------
    /// * [`OrreryError::InvalidParameter`] for a negative or non-finite eccentricity,
    ///   a NaN semimajor axis or non-finite angles.
    pub fn new(
        semimajor_axis: Length,
        inclination: Angle,
        eccentricity: f64,
        longitude_of_ascending_node: Angle,
        argument_of_periapsis: Angle,
        anomaly: Anomaly,
    ) -> Result<Self, OrreryError> {
        if !eccentricity.is_finite() || eccentricity < 0.0 {
            return Err(OrreryError::InvalidParameter(format!(
                "eccentricity must be finite and non-negative, got {eccentricity}"
            )));
        }
        if semimajor_axis.metres().is_nan() {
            return Err(OrreryError::InvalidParameter(
                "semimajor axis is NaN".into(),
            ));
        }
        let angles = [
            inclination,
            longitude_of_ascending_node,
            argument_of_periapsis,
            anomaly.value(),
        ];
        if !angles.iter().all(|a| a.is_finite()) {
            return Err(OrreryError::InvalidParameter(
                "orbital angles must be finite".into(),
            ));
        }

        Ok(OrbitalElements {
            semimajor_axis,
            inclination,
            eccentricity,
            longitude_of_ascending_node,
            argument_of_periapsis,
            anomaly: anomaly.wrapped(),
        })
    }

    /// Build an element set storing the mean anomaly.
    pub fn from_mean(
        semimajor_axis: Length,
        inclination: Angle,
        eccentricity: f64,
        longitude_of_ascending_node: Angle,
        argument_of_periapsis: Angle,
        mean_anomaly: Angle,
    ) -> Result<Self, OrreryError> {
        Self::new(
            semimajor_axis,
            inclination,
            eccentricity,
            longitude_of_ascending_node,
            argument_of_periapsis,
            Anomaly::Mean(mean_anomaly),
        )
    }

    /// Build an element set storing the true anomaly.
    pub fn from_true(
        semimajor_axis: Length,
        inclination: Angle,
        eccentricity: f64,
        longitude_of_ascending_node: Angle,
        argument_of_periapsis: Angle,
        true_anomaly: Angle,
    ) -> Result<Self, OrreryError> {
        Self::new(
            semimajor_axis,
            inclination,
            eccentricity,
            longitude_of_ascending_node,
            argument_of_periapsis,
            Anomaly::True(true_anomaly),
        )
    }

    /// Build an element set storing the eccentric anomaly.
    pub fn from_eccentric(
        semimajor_axis: Length,
        inclination: Angle,
        eccentricity: f64,
        longitude_of_ascending_node: Angle,
        argument_of_periapsis: Angle,
        eccentric_anomaly: Angle,
    ) -> Result<Self, OrreryError> {
        Self::new(
            semimajor_axis,
            inclination,
            eccentricity,
            longitude_of_ascending_node,
            argument_of_periapsis,
            Anomaly::Eccentric(eccentric_anomaly),
        )
    }

    pub fn semimajor_axis(&self) -> Length {
        self.semimajor_axis
    }

    pub fn inclination(&self) -> Angle {
        self.inclination
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn longitude_of_ascending_node(&self) -> Angle {
        self.longitude_of_ascending_node
    }

    pub fn argument_of_periapsis(&self) -> Angle {
        self.argument_of_periapsis
    }

    /// The stored anomaly, with its kind.
    pub fn anomaly(&self) -> Anomaly {
        self.anomaly
    }

    pub fn anomaly_kind(&self) -> AnomalyKind {
        self.anomaly.kind()
    }

    /// Mean anomaly `M`.
    ///
    /// Verbatim when stored as mean, otherwise computed and wrapped to `[0, 2π)`.
    pub fn mean_anomaly(&self) -> Angle {
        let e = self.eccentricity;
        match self.anomaly {
            Anomaly::Mean(m) => m,
            Anomaly::True(t) => Angle::from_radians(true_to_mean(e, t.radians())).wrap(),
            Anomaly::Eccentric(ea) => Angle::from_radians(eccentric_to_mean(e, ea.radians())).wrap(),
        }
    }

    /// True anomaly `ν`.
    ///
    /// From a stored mean anomaly the fourth-order series of
    /// [`mean_to_true`] is used, accurate for small eccentricities only.
    pub fn true_anomaly(&self) -> Angle {
        let e = self.eccentricity;
        match self.anomaly {
            Anomaly::Mean(m) => Angle::from_radians(mean_to_true(e, m.radians())).wrap(),
            Anomaly::True(t) => t,
            Anomaly::Eccentric(ea) => Angle::from_radians(eccentric_to_true(e, ea.radians())).wrap(),
        }
    }

    /// Eccentric anomaly `E`.
    ///
    /// From a stored mean anomaly Kepler's equation is solved with the default
    /// precision (8 digits); on non-convergence the last iterate is returned.
    pub fn eccentric_anomaly(&self) -> Angle {
        let e = self.eccentricity;
        match self.anomaly {
            Anomaly::Mean(m) => {
                Angle::from_radians(mean_to_eccentric(e, m.radians(), KEPLER_DEFAULT_PRECISION))
                    .wrap()
            }
            Anomaly::True(t) => Angle::from_radians(true_to_eccentric(e, t.radians())).wrap(),
            Anomaly::Eccentric(ea) => ea,
        }
    }

    /// Eccentric anomaly solved with a caller-configured solver, failing on non-convergence.
    ///
    /// Only a stored mean anomaly needs the solver; the other kinds are converted in
    /// closed form exactly like [`OrbitalElements::eccentric_anomaly`].
    pub fn solve_eccentric_anomaly(&self, solver: &KeplerSolver) -> Result<Angle, OrreryError> {
        match self.anomaly {
            Anomaly::Mean(m) => {
                let ea = solver.solve(self.eccentricity, m.radians()).into_result()?;
                Ok(Angle::from_radians(ea).wrap())
            }
            _ => Ok(self.eccentric_anomaly()),
        }
    }

    // short aliases

    pub fn a(&self) -> Length {
        self.semimajor_axis
    }

    pub fn i(&self) -> Angle {
        self.inclination
    }

    pub fn e(&self) -> f64 {
        self.eccentricity
    }

    /// Ω
    pub fn omega(&self) -> Angle {
        self.longitude_of_ascending_node
    }

    /// ω
    pub fn w(&self) -> Angle {
        self.argument_of_periapsis
    }

    pub fn m(&self) -> Angle {
        self.mean_anomaly()
    }

    pub fn nu(&self) -> Angle {
        self.true_anomaly()
    }

    pub fn ea(&self) -> Angle {
        self.eccentric_anomaly()
    }

    /// `|e − 1| ≤ f64::EPSILON`.
    pub fn is_parabolic(&self) -> bool {
        (self.eccentricity - 1.0).abs() <= f64::EPSILON
    }

    pub fn is_elliptic(&self) -> bool {
        self.eccentricity < 1.0 && !self.is_parabolic()
    }

    /// Periapsis distance `q = a·(1 − e)`; `None` when `a` is infinite (parabolic).
    pub fn periapsis_distance(&self) -> Option<Length> {
        if !self.semimajor_axis.is_finite() {
            return None;
        }
        Some(self.semimajor_axis * (1.0 - self.eccentricity))
    }

    /// Apoapsis distance `Q = a·(1 + e)`, elliptic orbits only.
    pub fn apoapsis_distance(&self) -> Option<Length> {
        self.is_elliptic()
            .then(|| self.semimajor_axis * (1.0 + self.eccentricity))
    }

    /// Mean motion `n = √(μ / a³)` in rad/s, elliptic orbits only.
    pub fn mean_motion(&self, primary_mass: Mass) -> Option<f64> {
        if !self.is_elliptic() {
            return None;
        }
        let mu = GRAVITATIONAL_CONSTANT * primary_mass.kilograms();
        let a = self.semimajor_axis.metres();
        let n = (mu / (a * a * a)).sqrt();
        n.is_finite().then_some(n)
    }

    /// Orbital period `2π / n`, elliptic orbits only.
    pub fn orbital_period(&self, primary_mass: Mass) -> Option<Duration> {
        self.mean_motion(primary_mass)
            .filter(|n| *n > 0.0)
            .map(|n| Duration::from_seconds(DPI / n))
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let anomaly_label = match self.anomaly.kind() {
            AnomalyKind::Mean => "M   (mean anomaly)         ",
            AnomalyKind::True => "ν   (true anomaly)         ",
            AnomalyKind::Eccentric => "E   (eccentric anomaly)    ",
        };

        writeln!(f, "Orbital Elements")?;
        writeln!(f, "-------------------------------------------")?;
        if self.semimajor_axis.is_finite() {
            writeln!(
                f,
                "  a   (semimajor axis)       = {:.6} AU ({:.3} km)",
                self.semimajor_axis.au(),
                self.semimajor_axis.kilometres()
            )?;
        } else {
            writeln!(f, "  a   (semimajor axis)       = ∞ (parabolic)")?;
        }
        writeln!(
            f,
            "  e   (eccentricity)         = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)          = {:.6} rad ({:.6}°)",
            self.inclination.radians(),
            self.inclination.degrees()
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)    = {:.6} rad ({:.6}°)",
            self.longitude_of_ascending_node.radians(),
            self.longitude_of_ascending_node.degrees()
        )?;
        writeln!(
            f,
            "  ω   (argument of periapsis)= {:.6} rad ({:.6}°)",
            self.argument_of_periapsis.radians(),
            self.argument_of_periapsis.degrees()
        )?;
        writeln!(
            f,
            "  {anomaly_label}= {:.6} rad ({:.6}°)",
            self.anomaly.value().radians(),
            self.anomaly.value().degrees()
        )
    }
}
