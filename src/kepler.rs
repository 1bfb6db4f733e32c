//! # Anomaly conversions and Kepler's equation
//!
//! Pure functions converting between the three anomaly parameterizations of an
//! elliptic orbit (mean `M`, eccentric `E`, true `ν`), plus a Newton–Raphson
//! solver for Kepler's equation `E − e·sin E = M`.
//!
//! All angles are in radians. The conversion functions do **not** wrap their
//! inputs nor their outputs; callers (e.g. the anomaly accessors of
//! [`OrbitalElements`](crate::orbit_type::orbital_elements::OrbitalElements))
//! normalize with [`principal_angle`] where needed.
//!
//! ## Solver
//!
//! [`KeplerSolver`] runs a Newton iteration from the fixed initial guess
//! `E₀ = π`, with a hard iteration cap. It never fails: if the cap is reached the
//! last iterate is returned and the [`KeplerSolution`] reports
//! `converged == false`. Use [`KeplerSolution::into_result`] to turn that into an
//! error.
//!
//! ```rust
//! use orrery::kepler::{eccentric_to_mean, KeplerSolver};
//!
//! let solution = KeplerSolver::default().solve(0.3, 1.2);
//! assert!(solution.converged);
//! assert!((eccentric_to_mean(0.3, solution.eccentric_anomaly) - 1.2).abs() < 1e-8);
//! ```
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::constants::{DPI, KEPLER_DEFAULT_MAX_ITER, KEPLER_DEFAULT_PRECISION};
use crate::orrery_errors::OrreryError;

/// Principal value of an angle in radians, in `[0, 2π)`.
pub fn principal_angle(a: f64) -> f64 {
    let r = a.rem_euclid(DPI);
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if r >= DPI {
        0.0
    } else {
        r
    }
}

/// Principal difference `a − b` between two angles, in `[-π, π]`.
pub fn angle_diff(a: f64, b: f64) -> f64 {
    let a = principal_angle(a);
    let b = principal_angle(b);

    let mut diff = a - b;

    if diff > PI {
        diff -= DPI;
    } else if diff < -PI {
        diff += DPI;
    }

    diff
}

/// Mean anomaly → true anomaly, fourth-order series in `e`.
///
/// ```text
/// ν ≈ M + (2e − e³/4)·sin M + (5/4)e²·sin 2M + (13/12)e³·sin 3M
/// ```
///
/// This is an approximation, accurate for small to moderate eccentricities
/// only. It must not be used for near-parabolic orbits.
pub fn mean_to_true(e: f64, mean_anomaly: f64) -> f64 {
    let m = mean_anomaly;
    let e2 = e * e;
    let e3 = e2 * e;

    m + (2.0 * e - 0.25 * e3) * m.sin()
        + 1.25 * e2 * (2.0 * m).sin()
        + (13.0 / 12.0) * e3 * (3.0 * m).sin()
}

/// Mean anomaly → eccentric anomaly by solving Kepler's equation.
///
/// Convergence is declared when two successive Newton iterates differ by less
/// than `10^-precision`. After [`KEPLER_DEFAULT_MAX_ITER`] iterations the last
/// iterate is returned even if it has not converged; use [`KeplerSolver::solve`]
/// to inspect the convergence status.
///
/// Arguments
/// ---------
/// * `e`: eccentricity, `0 ≤ e < 1`.
/// * `mean_anomaly`: mean anomaly in radians.
/// * `precision`: number of decimal digits (8 is the usual choice).
pub fn mean_to_eccentric(e: f64, mean_anomaly: f64, precision: u32) -> f64 {
    let params = KeplerSolverParams {
        precision,
        ..KeplerSolverParams::default()
    };
    KeplerSolver::new(params)
        .solve(e, mean_anomaly)
        .eccentric_anomaly
}

/// True anomaly → eccentric anomaly, `atan2(√(1−e²)·sin ν, e + cos ν)`.
pub fn true_to_eccentric(e: f64, true_anomaly: f64) -> f64 {
    ((1.0 - e * e).sqrt() * true_anomaly.sin()).atan2(e + true_anomaly.cos())
}

/// Eccentric anomaly → mean anomaly (Kepler's equation).
pub fn eccentric_to_mean(e: f64, eccentric_anomaly: f64) -> f64 {
    eccentric_anomaly - e * eccentric_anomaly.sin()
}

/// Eccentric anomaly → true anomaly, `2·atan(√((1+e)/(1−e))·tan(E/2))`.
///
/// The result lies in `(-π, π)`.
pub fn eccentric_to_true(e: f64, eccentric_anomaly: f64) -> f64 {
    let factor = ((1.0 + e) / (1.0 - e)).sqrt();
    2.0 * (factor * (eccentric_anomaly / 2.0).tan()).atan()
}

/// True anomaly → mean anomaly, through the eccentric anomaly.
pub fn true_to_mean(e: f64, true_anomaly: f64) -> f64 {
    let ecc_anomaly = true_to_eccentric(e, true_anomaly);
    eccentric_to_mean(e, ecc_anomaly)
}

/// Tunable parameters of the Kepler equation solver.
///
/// Use [`KeplerSolverParams::default`] (8 digits, 30 iterations) or the
/// validating [`KeplerSolverParams::builder`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeplerSolverParams {
    /// Convergence threshold expressed as a number of decimal digits.
    pub precision: u32,
    /// Hard cap on the number of Newton iterations.
    pub max_iterations: usize,
}

impl KeplerSolverParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`KeplerSolverParamsBuilder`] initialized with the default values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use orrery::kepler::KeplerSolverParams;
    ///
    /// let params = KeplerSolverParams::builder()
    ///     .precision(12)
    ///     .max_iterations(50)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(params.precision, 12);
    /// ```
    pub fn builder() -> KeplerSolverParamsBuilder {
        KeplerSolverParamsBuilder::new()
    }

    /// Absolute step tolerance `10^-precision`.
    pub fn tolerance(&self) -> f64 {
        10f64.powi(-(self.precision as i32))
    }
}

impl Default for KeplerSolverParams {
    fn default() -> Self {
        KeplerSolverParams {
            precision: KEPLER_DEFAULT_PRECISION,
            max_iterations: KEPLER_DEFAULT_MAX_ITER,
        }
    }
}

/// Builder for [`KeplerSolverParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct KeplerSolverParamsBuilder {
    params: KeplerSolverParams,
}

impl KeplerSolverParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: KeplerSolverParams::default(),
        }
    }

    pub fn precision(mut self, v: u32) -> Self {
        self.params.precision = v;
        self
    }

    pub fn max_iterations(mut self, v: usize) -> Self {
        self.params.max_iterations = v;
        self
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `1 ≤ precision ≤ 15` – beyond 15 digits the step test can never pass in `f64`.
    /// * `max_iterations ≥ 1`.
    pub fn build(self) -> Result<KeplerSolverParams, OrreryError> {
        let p = self.params;

        if !(1..=15).contains(&p.precision) {
            return Err(OrreryError::InvalidSolverParameter(format!(
                "precision must be in 1..=15 digits, got {}",
                p.precision
            )));
        }
        if p.max_iterations == 0 {
            return Err(OrreryError::InvalidSolverParameter(
                "max_iterations must be >= 1".into(),
            ));
        }

        Ok(p)
    }
}

/// Outcome of a Kepler equation solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Last Newton iterate (radians, not wrapped).
    pub eccentric_anomaly: f64,
    /// Number of Newton steps performed.
    pub iterations: usize,
    /// `|E − e·sin E − M|` at the returned iterate.
    pub residual: f64,
    /// Whether the step tolerance was reached before the iteration cap.
    pub converged: bool,
}

impl KeplerSolution {
    /// Turn a non-converged solution into [`OrreryError::KeplerNonConvergence`].
    pub fn into_result(self) -> Result<f64, OrreryError> {
        if self.converged {
            Ok(self.eccentric_anomaly)
        } else {
            Err(OrreryError::KeplerNonConvergence {
                iterations: self.iterations,
                residual: self.residual,
            })
        }
    }
}

/// Newton–Raphson solver for `E − e·sin E = M`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeplerSolver {
    params: KeplerSolverParams,
}

impl KeplerSolver {
    pub fn new(params: KeplerSolverParams) -> Self {
        KeplerSolver { params }
    }

    pub fn params(&self) -> &KeplerSolverParams {
        &self.params
    }

    /// Solve Kepler's equation for the eccentric anomaly.
    ///
    /// Arguments
    /// ---------
    /// * `e`: eccentricity, `0 ≤ e < 1`.
    /// * `mean_anomaly`: mean anomaly in radians (not wrapped by this function).
    ///
    /// Return
    /// ------
    /// * A [`KeplerSolution`]; the iterate is returned even when the iteration
    ///   cap is hit, with `converged == false`.
    pub fn solve(&self, e: f64, mean_anomaly: f64) -> KeplerSolution {
        let tol = self.params.tolerance();

        let mut en = PI;
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.params.max_iterations {
            let en1 = en - (en - e * en.sin() - mean_anomaly) / (1.0 - e * en.cos());
            let step = (en1 - en).abs();
            iterations += 1;
            en = en1;

            trace!(iterations, eccentric_anomaly = en, step, "Kepler Newton step");

            if step < tol {
                converged = true;
                break;
            }
        }

        let residual = (en - e * en.sin() - mean_anomaly).abs();

        if !converged {
            warn!(
                eccentricity = e,
                mean_anomaly,
                iterations,
                residual,
                "Kepler solver reached its iteration cap without converging"
            );
        }

        KeplerSolution {
            eccentric_anomaly: en,
            iterations,
            residual,
            converged,
        }
    }
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_principal_angle() {
        assert_abs_diff_eq!(principal_angle(-PI / 2.0), 1.5 * PI, epsilon = 1e-15);
        assert_abs_diff_eq!(principal_angle(5.0 * PI), PI, epsilon = 1e-14);
        assert_eq!(principal_angle(-1e-18), 0.0);
        assert!(principal_angle(-1e-300) < DPI);
    }

    #[test]
    fn test_angle_diff() {
        assert_abs_diff_eq!(angle_diff(0.1, DPI - 0.1), 0.2, epsilon = 1e-14);
        assert_abs_diff_eq!(angle_diff(DPI - 0.1, 0.1), -0.2, epsilon = 1e-14);
    }

    #[test]
    fn test_solve_kepler_vallado() {
        // Vallado, Fundamentals of Astrodynamics, example 2-1
        let m = 235.4_f64.to_radians();
        let solution = KeplerSolver::default().solve(0.4, m);

        assert!(solution.converged);
        assert_abs_diff_eq!(
            solution.eccentric_anomaly.to_degrees(),
            220.512074767522,
            epsilon = 1e-6
        );
        assert!(solution.residual < 1e-12);
    }

    #[test]
    fn test_solve_kepler_circular() {
        let solution = KeplerSolver::default().solve(0.0, 1.2);
        assert!(solution.converged);
        assert_eq!(solution.eccentric_anomaly, 1.2);
        assert_eq!(solution.iterations, 2);
    }

    #[test]
    fn test_solver_iteration_cap() {
        let params = KeplerSolverParams {
            precision: 8,
            max_iterations: 1,
        };
        let solution = KeplerSolver::new(params).solve(0.5, 1.0);

        assert!(!solution.converged);
        assert_eq!(solution.iterations, 1);
        assert!(matches!(
            solution.into_result(),
            Err(OrreryError::KeplerNonConvergence { iterations: 1, .. })
        ));
    }

    #[test]
    fn test_mean_to_eccentric_precision() {
        let coarse = mean_to_eccentric(0.6, 2.0, 2);
        let fine = mean_to_eccentric(0.6, 2.0, 14);
        assert!((coarse - fine).abs() < 1e-2);
        assert!((eccentric_to_mean(0.6, fine) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_to_true_series() {
        assert_eq!(mean_to_true(0.0, 0.7), 0.7);

        // O(e⁴) truncation error
        let e = 0.01;
        for m in [0.3, 1.0, 2.5, 4.0, 5.5] {
            let exact = principal_angle(eccentric_to_true(e, mean_to_eccentric(e, m, 12)));
            assert_abs_diff_eq!(principal_angle(mean_to_true(e, m)), exact, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_true_eccentric_roundtrip() {
        let e = 0.25;
        for t in [0.1, 1.0, 2.0, 3.0, -2.5, -0.4] {
            let ecc = true_to_eccentric(e, t);
            assert_abs_diff_eq!(eccentric_to_true(e, ecc), t, epsilon = 1e-12);
        }
        assert_eq!(true_to_eccentric(e, 0.0), 0.0);
    }

    #[test]
    fn test_builder_validation() {
        assert!(KeplerSolverParams::builder().build().is_ok());
        assert!(matches!(
            KeplerSolverParams::builder().precision(0).build(),
            Err(OrreryError::InvalidSolverParameter(_))
        ));
        assert!(matches!(
            KeplerSolverParams::builder().precision(16).build(),
            Err(OrreryError::InvalidSolverParameter(_))
        ));
        assert!(matches!(
            KeplerSolverParams::builder().max_iterations(0).build(),
            Err(OrreryError::InvalidSolverParameter(_))
        ));
        assert_abs_diff_eq!(KeplerSolverParams::default().tolerance(), 1e-8, epsilon = 1e-22);
    }
}
