#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use orrery::orbit_type::orbital_elements::OrbitalElements;
use orrery::units::Angle;

/// Angles compared modulo 2π.
pub fn assert_angle_close(actual: Angle, expected: Angle, epsilon: f64) {
    let diff = (actual - expected).wrap_signed().radians();
    assert!(
        diff.abs() <= epsilon,
        "angles differ: actual = {actual}, expected = {expected}, diff = {diff:e} rad"
    );
}

pub fn assert_elements_close(actual: &OrbitalElements, expected: &OrbitalElements, epsilon: f64) {
    assert_abs_diff_eq!(
        actual.semimajor_axis().au(),
        expected.semimajor_axis().au(),
        epsilon = epsilon
    );
    assert_abs_diff_eq!(actual.eccentricity(), expected.eccentricity(), epsilon = epsilon);
    assert_angle_close(actual.inclination(), expected.inclination(), epsilon);
    assert_angle_close(
        actual.longitude_of_ascending_node(),
        expected.longitude_of_ascending_node(),
        epsilon,
    );
    assert_angle_close(
        actual.argument_of_periapsis(),
        expected.argument_of_periapsis(),
        epsilon,
    );
    assert_angle_close(actual.mean_anomaly(), expected.mean_anomaly(), epsilon);
}
