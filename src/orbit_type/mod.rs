//! # Orbital element representation
//!
//! - [`orbital_elements`](crate::orbit_type::orbital_elements): the immutable
//!   [`OrbitalElements`](crate::orbit_type::orbital_elements::OrbitalElements) set
//!   `(a, i, e, Ω, ω, anomaly)` with on-demand anomaly conversions and derived
//!   quantities.
//! - [`state_vector`](crate::orbit_type::state_vector): derivation of the elements
//!   from a Cartesian position/velocity pair around a primary body.
//!
//! Exactly one anomaly is stored per element set, tagged with its kind by
//! [`Anomaly`]. The two other kinds are recomputed on every request.
//!
//! ## Typical workflow
//!
//! ```rust
//! use nalgebra::Vector3;
//! use orrery::constants::EARTH_MASS;
//! use orrery::orbit_type::orbital_elements::OrbitalElements;
//! use orrery::units::{Length, Mass, Speed};
//!
//! let r = Vector3::new(
//!     Length::from_kilometres(7000.0),
//!     Length::ZERO,
//!     Length::ZERO,
//! );
//! let v = Vector3::new(
//!     Speed::ZERO,
//!     Speed::from_kilometres_per_second(7.5),
//!     Speed::ZERO,
//! );
//!
//! let elements = OrbitalElements::from_state_vector(Mass::from_kilograms(EARTH_MASS), &r, &v).unwrap();
//! assert!(elements.is_elliptic());
//! println!("{elements}");
//! ```
use serde::{Deserialize, Serialize};

use crate::units::Angle;

/// Immutable orbital element set and its anomaly accessors.
pub mod orbital_elements;

/// Cartesian state vector → orbital elements.
pub mod state_vector;

/// Discriminant of an [`Anomaly`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnomalyKind {
    Mean,
    True,
    Eccentric,
}

/// Angular position along the orbit, tagged with its parameterization.
///
/// Variants
/// --------
/// * `Mean`: uniformly advancing angle, `M = n·(t − τ)`.
/// * `True`: actual angle between periapsis and the body, seen from the focus.
/// * `Eccentric`: auxiliary-circle angle linking the two through Kepler's equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Anomaly {
    Mean(Angle),
    True(Angle),
    Eccentric(Angle),
}

impl Anomaly {
    pub fn kind(&self) -> AnomalyKind {
        match self {
            Anomaly::Mean(_) => AnomalyKind::Mean,
            Anomaly::True(_) => AnomalyKind::True,
            Anomaly::Eccentric(_) => AnomalyKind::Eccentric,
        }
    }

    pub fn value(&self) -> Angle {
        match *self {
            Anomaly::Mean(a) | Anomaly::True(a) | Anomaly::Eccentric(a) => a,
        }
    }

    /// Same kind, value wrapped to `[0, 2π)`.
    pub(crate) fn wrapped(self) -> Self {
        match self {
            Anomaly::Mean(a) => Anomaly::Mean(a.wrap()),
            Anomaly::True(a) => Anomaly::True(a.wrap()),
            Anomaly::Eccentric(a) => Anomaly::Eccentric(a.wrap()),
        }
    }
}
