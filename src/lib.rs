//! Orbital elements, Kepler's equation and celestial reference-frame
//! transformations.
//!
//! * [`orbit_type`]: element sets, anomaly conversions, state vector → elements;
//! * [`kepler`]: the scalar anomaly relations and the Newton solver;
//! * [`coordinates`]: positions in each celestial frame;
//! * [`transformation`] and [`frames`]: invertible, composable frame changes.
pub mod constants;
pub mod coordinates;
pub mod frames;
pub mod kepler;
pub mod orbit_type;
pub mod orrery_errors;
pub mod ref_system;
pub mod time;
pub mod transformation;
pub mod units;
