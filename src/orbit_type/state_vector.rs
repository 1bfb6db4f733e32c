//! # State vector → orbital elements
//!
//! Classical derivation of `(a, i, e, Ω, ω, ν)` from a position and a velocity
//! relative to a primary body of known mass, through the angular momentum `H`,
//! the node vector `N = ẑ × H` and the eccentricity (Laplace–Runge–Lenz) vector
//! `E = (v × H)/μ − r/|r|`.
//!
//! ## Degenerate geometry
//!
//! - **Non-inclined orbits** (`|N| ≤ ε·|H|`, covering `i ≈ 0` and `i ≈ π`): the
//!   node line is undefined, `Ω = 0` by convention and `ω` is measured from the
//!   reference x-axis (sign of the angle follows the sense of motion).
//! - **Circular orbits** (`e < ε`): the periapsis is undefined, `ω = 0` and the
//!   returned true anomaly is the argument of latitude (inclined orbits) or the
//!   true longitude (non-inclined orbits).
//! - **Parabolic orbits** (`|e − 1| ≤ f64::EPSILON`): the semimajor axis is `+∞`.
//!
//! Zero position, zero angular momentum and invalid masses are reported as
//! [`OrreryError`] values, never as NaN elements.
use nalgebra::Vector3;
use tracing::debug;

use crate::constants::{CIRCULAR_EPS, DPI, EQUATORIAL_EPS, GRAVITATIONAL_CONSTANT};
use crate::orbit_type::orbital_elements::OrbitalElements;
use crate::orbit_type::Anomaly;
use crate::orrery_errors::OrreryError;
use crate::units::{Angle, Length, Mass, Speed};

/// Standard gravitational parameter `μ = G·M` in m³/s².
pub fn gravitational_parameter(primary_mass: Mass) -> Result<f64, OrreryError> {
    let mass = primary_mass.kilograms();
    if !mass.is_finite() || mass <= 0.0 {
        return Err(OrreryError::InvalidParameter(format!(
            "primary mass must be positive and finite, got {mass} kg"
        )));
    }
    Ok(GRAVITATIONAL_CONSTANT * mass)
}

/// Eccentricity vector and specific orbital energy of a state.
///
/// Arguments
/// ---------
/// * `primary_mass`: mass of the central body.
/// * `position`, `velocity`: state relative to the primary.
///
/// Return
/// ------
/// * `(E, ε)` with `E` the dimensionless eccentricity vector (pointing to periapsis,
///   `|E| = e`) and `ε = |v|²/2 − μ/|r|` in J/kg.
///
/// Errors
/// ------
/// * [`OrreryError::InvalidParameter`] for a non-positive mass.
/// * [`OrreryError::DegenerateGeometry`] for a zero position or a zero angular momentum.
pub fn eccentricity_vector(
    primary_mass: Mass,
    position: &Vector3<Length>,
    velocity: &Vector3<Speed>,
) -> Result<(Vector3<f64>, f64), OrreryError> {
    let state = State::new(primary_mass, position, velocity)?;
    Ok((state.eccentricity_vector, state.energy))
}

/// Intermediate vectors shared by the element derivation, SI units.
struct State {
    mu: f64,
    r: Vector3<f64>,
    v: Vector3<f64>,
    r_norm: f64,
    angular_momentum: Vector3<f64>,
    eccentricity_vector: Vector3<f64>,
    energy: f64,
}

impl State {
    fn new(
        primary_mass: Mass,
        position: &Vector3<Length>,
        velocity: &Vector3<Speed>,
    ) -> Result<Self, OrreryError> {
        let mu = gravitational_parameter(primary_mass)?;

        let r = position.map(Length::metres);
        let v = velocity.map(Speed::metres_per_second);

        let r_norm = r.norm();
        if !r_norm.is_finite() || r_norm == 0.0 {
            return Err(OrreryError::DegenerateGeometry(
                "position vector is zero or not finite".into(),
            ));
        }
        if !v.iter().all(|c| c.is_finite()) {
            return Err(OrreryError::DegenerateGeometry(
                "velocity vector is not finite".into(),
            ));
        }

        let angular_momentum = r.cross(&v);
        if angular_momentum.norm() == 0.0 {
            return Err(OrreryError::DegenerateGeometry(
                "zero angular momentum (rectilinear or motionless state)".into(),
            ));
        }

        let eccentricity_vector = v.cross(&angular_momentum) / mu - r / r_norm;
        let energy = v.norm_squared() / 2.0 - mu / r_norm;

        Ok(State {
            mu,
            r,
            v,
            r_norm,
            angular_momentum,
            eccentricity_vector,
            energy,
        })
    }
}

/// `acos(x)` folded to `2π − acos(x)` when `flip` holds.
fn quadrant(cos_value: f64, flip: bool) -> Angle {
    let angle = Angle::acos(cos_value);
    if flip {
        Angle::from_radians(DPI) - angle
    } else {
        angle
    }
}

impl OrbitalElements {
    /// Derive the orbital elements of a body from its state vector.
    ///
    /// Arguments
    /// ---------
    /// * `primary_mass`: mass of the attracting body (`μ = G·M`).
    /// * `position`: position relative to the primary.
    /// * `velocity`: velocity relative to the primary.
    ///
    /// Return
    /// ------
    /// * Elements storing the **true** anomaly. For circular orbits that anomaly is
    ///   the argument of latitude (or the true longitude when also non-inclined).
    ///
    /// Errors
    /// ------
    /// * [`OrreryError::InvalidParameter`] – non-positive or non-finite mass.
    /// * [`OrreryError::DegenerateGeometry`] – zero position, non-finite velocity,
    ///   zero angular momentum.
    ///
    /// See also
    /// --------
    /// * [`eccentricity_vector`] – the Lenz vector and energy on their own.
    pub fn from_state_vector(
        primary_mass: Mass,
        position: &Vector3<Length>,
        velocity: &Vector3<Speed>,
    ) -> Result<Self, OrreryError> {
        let State {
            mu,
            r,
            v,
            r_norm,
            angular_momentum: h_vec,
            eccentricity_vector: e_vec,
            energy,
        } = State::new(primary_mass, position, velocity)?;

        let h = h_vec.norm();
        let n_vec = Vector3::z().cross(&h_vec);
        let n = n_vec.norm();
        let e = e_vec.norm();

        let semimajor_axis = if (e - 1.0).abs() > f64::EPSILON {
            Length::from_metres(-mu / (2.0 * energy))
        } else {
            debug!(
                semi_latus_rectum = h * h / mu,
                "parabolic state, semimajor axis set to infinity"
            );
            Length::INFINITY
        };

        let inclination = Angle::acos(h_vec.z / h);

        let equatorial = n <= EQUATORIAL_EPS * h;
        let circular = e < CIRCULAR_EPS;
        let retrograde = h_vec.z < 0.0;

        let (longitude_of_ascending_node, argument_of_periapsis) = if equatorial {
            let aop = if circular {
                Angle::ZERO
            } else {
                // measured from the x-axis in the sense of motion
                let flip = if retrograde {
                    e_vec.y > 0.0
                } else {
                    e_vec.y < 0.0
                };
                quadrant(e_vec.x / e, flip)
            };
            debug!(
                circular,
                retrograde, "non-inclined orbit, ascending node set to zero"
            );
            (Angle::ZERO, aop)
        } else {
            let lan = quadrant(n_vec.x / n, n_vec.y < 0.0);
            let aop = if circular {
                debug!("circular orbit, argument of periapsis set to zero");
                Angle::ZERO
            } else {
                quadrant(n_vec.dot(&e_vec) / (n * e), e_vec.z < 0.0)
            };
            (lan, aop)
        };

        let true_anomaly = match (circular, equatorial) {
            (true, true) => quadrant(r.x / r_norm, v.x > 0.0),
            (true, false) => quadrant(n_vec.dot(&r) / (n * r_norm), n_vec.dot(&v) > 0.0),
            _ => quadrant(e_vec.dot(&r) / (e * r_norm), r.dot(&v) < 0.0),
        };

        OrbitalElements::new(
            semimajor_axis,
            inclination,
            e,
            longitude_of_ascending_node,
            argument_of_periapsis,
            Anomaly::True(true_anomaly),
        )
    }
}

#[cfg(test)]
mod state_vector_test {
    use super::*;
    use crate::constants::EARTH_MASS;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn earth() -> Mass {
        Mass::from_kilograms(EARTH_MASS)
    }

    fn km(x: f64, y: f64, z: f64) -> Vector3<Length> {
        Vector3::new(
            Length::from_kilometres(x),
            Length::from_kilometres(y),
            Length::from_kilometres(z),
        )
    }

    fn kms(x: f64, y: f64, z: f64) -> Vector3<Speed> {
        Vector3::new(
            Speed::from_kilometres_per_second(x),
            Speed::from_kilometres_per_second(y),
            Speed::from_kilometres_per_second(z),
        )
    }

    #[test]
    fn test_near_circular_equatorial() {
        let el = OrbitalElements::from_state_vector(
            earth(),
            &km(7000.0, 0.0, 0.0),
            &kms(0.0, 7.5, 0.0),
        )
        .unwrap();

        let mu = GRAVITATIONAL_CONSTANT * EARTH_MASS;
        let expected_e = 1.0 - 7500.0_f64.powi(2) * 7.0e6 / mu;
        assert_abs_diff_eq!(el.eccentricity(), expected_e, epsilon = 1e-12);
        assert_abs_diff_eq!(el.eccentricity(), 0.0122, epsilon = 1e-4);

        assert_eq!(el.inclination().radians(), 0.0);
        assert_eq!(el.longitude_of_ascending_node().radians(), 0.0);
        // sub-circular speed: the body sits at apoapsis
        assert_abs_diff_eq!(el.argument_of_periapsis().radians(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(el.true_anomaly().radians(), PI, epsilon = 1e-12);

        let expected_a = 1.0 / (2.0 / 7.0e6 - 7500.0_f64.powi(2) / mu);
        assert_abs_diff_eq!(el.semimajor_axis().metres(), expected_a, epsilon = 1e-6);
    }

    #[test]
    fn test_exact_circular_equatorial() {
        let mu = GRAVITATIONAL_CONSTANT * EARTH_MASS;
        let r = 7.0e6;
        let vc = (mu / r).sqrt();
        let el = OrbitalElements::from_state_vector(
            earth(),
            &km(7000.0, 0.0, 0.0),
            &Vector3::new(
                Speed::ZERO,
                Speed::from_metres_per_second(vc),
                Speed::ZERO,
            ),
        )
        .unwrap();

        assert!(el.eccentricity() < CIRCULAR_EPS);
        assert_eq!(el.argument_of_periapsis(), Angle::ZERO);
        assert_eq!(el.longitude_of_ascending_node(), Angle::ZERO);
        assert_eq!(el.true_anomaly().radians(), 0.0);
        assert_abs_diff_eq!(el.semimajor_axis().metres(), r, epsilon = 1e-3);
    }

    #[test]
    fn test_circular_inclined_argument_of_latitude() {
        let mu = GRAVITATIONAL_CONSTANT * EARTH_MASS;
        let r = 7.0e6;
        let vc = (mu / r).sqrt() * 1e-3;
        let inc = 30f64.to_radians();

        // a quarter of an orbit past the ascending node
        let el = OrbitalElements::from_state_vector(
            earth(),
            &km(0.0, 7000.0 * inc.cos(), 7000.0 * inc.sin()),
            &kms(-vc, 0.0, 0.0),
        )
        .unwrap();

        assert!(el.eccentricity() < CIRCULAR_EPS);
        assert_abs_diff_eq!(el.inclination().radians(), inc, epsilon = 1e-12);
        assert_abs_diff_eq!(el.longitude_of_ascending_node().radians(), 0.0, epsilon = 1e-12);
        assert_eq!(el.argument_of_periapsis(), Angle::ZERO);
        assert_abs_diff_eq!(el.true_anomaly().radians(), PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equatorial_periapsis_below_x_axis() {
        // prograde, at periapsis on the -y axis
        let el = OrbitalElements::from_state_vector(
            earth(),
            &km(0.0, -7000.0, 0.0),
            &kms(8.0, 0.0, 0.0),
        )
        .unwrap();

        assert!(el.eccentricity() > CIRCULAR_EPS);
        assert_eq!(el.longitude_of_ascending_node(), Angle::ZERO);
        assert_abs_diff_eq!(
            el.argument_of_periapsis().radians(),
            3.0 * PI / 2.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(el.true_anomaly().wrap_signed().radians(), 0.0, epsilon = 1e-7);
    }

    #[test]
    fn test_retrograde_equatorial() {
        let el = OrbitalElements::from_state_vector(
            earth(),
            &km(7000.0, 0.0, 0.0),
            &kms(0.0, -7.5, 0.0),
        )
        .unwrap();

        assert_abs_diff_eq!(el.inclination().radians(), PI, epsilon = 1e-12);
        assert_eq!(el.longitude_of_ascending_node(), Angle::ZERO);
        assert_abs_diff_eq!(el.argument_of_periapsis().radians(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(el.true_anomaly().radians(), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_states() {
        let res = OrbitalElements::from_state_vector(earth(), &km(0.0, 0.0, 0.0), &kms(0.0, 7.5, 0.0));
        assert!(matches!(res, Err(OrreryError::DegenerateGeometry(_))));

        let res = OrbitalElements::from_state_vector(earth(), &km(7000.0, 0.0, 0.0), &kms(0.0, 0.0, 0.0));
        assert!(matches!(res, Err(OrreryError::DegenerateGeometry(_))));

        // radial motion
        let res = OrbitalElements::from_state_vector(earth(), &km(7000.0, 0.0, 0.0), &kms(3.0, 0.0, 0.0));
        assert!(matches!(res, Err(OrreryError::DegenerateGeometry(_))));

        let res = OrbitalElements::from_state_vector(
            Mass::from_kilograms(-1.0),
            &km(7000.0, 0.0, 0.0),
            &kms(0.0, 7.5, 0.0),
        );
        assert!(matches!(res, Err(OrreryError::InvalidParameter(_))));
    }

    #[test]
    fn test_eccentricity_vector_points_to_periapsis() {
        // super-circular speed: the body sits at periapsis
        let (e_vec, energy) =
            eccentricity_vector(earth(), &km(7000.0, 0.0, 0.0), &kms(0.0, 8.0, 0.0)).unwrap();
        assert!(e_vec.x > 0.0);
        assert_abs_diff_eq!(e_vec.y, 0.0);
        assert_abs_diff_eq!(e_vec.z, 0.0);
        assert!(energy < 0.0);
    }

    #[test]
    fn test_escape_state_is_hyperbolic() {
        let el = OrbitalElements::from_state_vector(
            earth(),
            &km(7000.0, 0.0, 0.0),
            &kms(0.0, 12.0, 0.0),
        )
        .unwrap();
        assert!(el.eccentricity() > 1.0);
        assert!(el.semimajor_axis().metres() < 0.0);
        assert!(!el.is_elliptic());
        assert_abs_diff_eq!(el.true_anomaly().radians(), 0.0, epsilon = 1e-12);
    }
}
