mod common;

use std::f64::consts::TAU;

use approx::assert_abs_diff_eq;
use orrery::kepler::{
    angle_diff, eccentric_to_mean, eccentric_to_true, mean_to_eccentric, mean_to_true,
    true_to_eccentric, true_to_mean, KeplerSolver, KeplerSolverParams,
};
use orrery::orbit_type::orbital_elements::OrbitalElements;
use orrery::orbit_type::AnomalyKind;
use orrery::units::{Angle, Length};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::assert_angle_close;

fn sample(rng: &mut StdRng, max_e: f64) -> (f64, f64) {
    let e = rng.random::<f64>() * max_e;
    let m = rng.random::<f64>() * TAU;
    (e, m)
}

#[test]
fn kepler_equation_residual_is_small() {
    let mut rng = StdRng::seed_from_u64(42_u64);
    let solver = KeplerSolver::new(
        KeplerSolverParams::builder()
            .precision(12)
            .build()
            .unwrap(),
    );

    for _ in 0..1000 {
        let (e, m) = sample(&mut rng, 0.9);
        let solution = solver.solve(e, m);
        assert!(solution.converged, "e = {e}, M = {m}");
        assert!(solution.iterations <= 30);

        let back = eccentric_to_mean(e, solution.eccentric_anomaly);
        assert!(angle_diff(back, m).abs() < 1e-10, "e = {e}, M = {m}");
    }
}

#[test]
fn true_and_eccentric_are_mutually_inverse() {
    let mut rng = StdRng::seed_from_u64(7_u64);

    for _ in 0..1000 {
        let (e, ea) = sample(&mut rng, 0.95);
        let t = eccentric_to_true(e, ea);
        let back = true_to_eccentric(e, t);
        assert!(angle_diff(back, ea).abs() < 1e-9, "e = {e}, E = {ea}");
    }
}

#[test]
fn mean_true_mean_closes_through_the_solver() {
    let mut rng = StdRng::seed_from_u64(1234_u64);

    for _ in 0..500 {
        let (e, m) = sample(&mut rng, 0.8);
        let ea = mean_to_eccentric(e, m, 12);
        let t = eccentric_to_true(e, ea);
        assert!(angle_diff(true_to_mean(e, t), m).abs() < 1e-9);
    }
}

#[test]
fn series_agrees_with_solver_at_low_eccentricity() {
    let mut rng = StdRng::seed_from_u64(99_u64);

    for _ in 0..500 {
        let (e, m) = sample(&mut rng, 0.05);
        let exact = eccentric_to_true(e, mean_to_eccentric(e, m, 12));
        let series = mean_to_true(e, m);
        assert!(angle_diff(series, exact).abs() < 1e-4, "e = {e}, M = {m}");
    }
}

#[test]
fn element_set_anomaly_accessors() {
    let mut rng = StdRng::seed_from_u64(2024_u64);

    for _ in 0..200 {
        let (e, m) = sample(&mut rng, 0.7);
        let a = Length::from_au(1.0 + rng.random::<f64>() * 4.0);
        let inc = Angle::from_degrees(rng.random::<f64>() * 180.0);
        let node = Angle::from_radians(rng.random::<f64>() * TAU);
        let peri = Angle::from_radians(rng.random::<f64>() * TAU);

        let from_mean =
            OrbitalElements::from_mean(a, inc, e, node, peri, Angle::from_radians(m)).unwrap();
        assert_eq!(from_mean.anomaly_kind(), AnomalyKind::Mean);
        assert_eq!(from_mean.mean_anomaly(), Angle::from_radians(m));

        let ea = from_mean.eccentric_anomaly();
        let from_ecc = OrbitalElements::from_eccentric(a, inc, e, node, peri, ea).unwrap();
        assert_angle_close(from_ecc.mean_anomaly(), from_mean.mean_anomaly(), 1e-7);

        let from_true =
            OrbitalElements::from_true(a, inc, e, node, peri, from_ecc.true_anomaly()).unwrap();
        assert_angle_close(from_true.eccentric_anomaly(), ea, 1e-9);
        assert_angle_close(from_true.mean_anomaly(), from_mean.mean_anomaly(), 1e-7);

        let derived = from_true.mean_anomaly().radians();
        assert!((0.0..TAU).contains(&derived));
    }
}

#[test]
fn solver_matches_textbook_case() {
    // Vallado, Fundamentals of Astrodynamics, example 2-1
    let ea = mean_to_eccentric(0.4, 235.4_f64.to_radians(), 12);
    assert_abs_diff_eq!(ea.to_degrees(), 220.512_074_767_522, epsilon = 1e-8);
}
