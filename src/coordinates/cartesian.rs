//! Geometric position forms and the conversions between them.
//!
//! * [`CartesianCoordinate`]: `(x, y, z)`
//! * [`CylindricalCoordinate`]: `(ρ, φ, z)`, φ measured from +x toward +y
//! * [`SphericalCoordinate`]: `(r, θ, φ)`, θ measured down from +z
//!
//! Conversions go through [`From`] and are lossless up to rounding. The
//! origin maps to zero angles.
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::units::{Angle, Length};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartesianCoordinate {
    x: Length,
    y: Length,
    z: Length,
}

impl CartesianCoordinate {
    pub fn new(x: Length, y: Length, z: Length) -> Self {
        CartesianCoordinate { x, y, z }
    }

    pub fn x(&self) -> Length {
        self.x
    }

    pub fn y(&self) -> Length {
        self.y
    }

    pub fn z(&self) -> Length {
        self.z
    }

    /// Components in metres.
    pub fn to_metres(&self) -> Vector3<f64> {
        Vector3::new(self.x.metres(), self.y.metres(), self.z.metres())
    }

    pub fn distance(&self) -> Length {
        Length::from_metres(self.to_metres().norm())
    }
}

impl From<Vector3<Length>> for CartesianCoordinate {
    fn from(v: Vector3<Length>) -> Self {
        CartesianCoordinate::new(v.x, v.y, v.z)
    }
}

impl From<CartesianCoordinate> for Vector3<Length> {
    fn from(c: CartesianCoordinate) -> Self {
        Vector3::new(c.x, c.y, c.z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CylindricalCoordinate {
    radial_distance: Length,
    azimuthal_angle: Angle,
    height: Length,
}

impl CylindricalCoordinate {
    pub fn new(radial_distance: Length, azimuthal_angle: Angle, height: Length) -> Self {
        CylindricalCoordinate {
            radial_distance,
            azimuthal_angle,
            height,
        }
    }

    /// Distance to the z-axis.
    pub fn radial_distance(&self) -> Length {
        self.radial_distance
    }

    pub fn azimuthal_angle(&self) -> Angle {
        self.azimuthal_angle
    }

    pub fn height(&self) -> Length {
        self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SphericalCoordinate {
    radius: Length,
    zenith_angle: Angle,
    azimuthal_angle: Angle,
}

impl SphericalCoordinate {
    pub fn new(radius: Length, zenith_angle: Angle, azimuthal_angle: Angle) -> Self {
        SphericalCoordinate {
            radius,
            zenith_angle,
            azimuthal_angle,
        }
    }

    pub fn radius(&self) -> Length {
        self.radius
    }

    /// Polar angle from +z.
    pub fn zenith_angle(&self) -> Angle {
        self.zenith_angle
    }

    pub fn azimuthal_angle(&self) -> Angle {
        self.azimuthal_angle
    }
}

impl From<CylindricalCoordinate> for CartesianCoordinate {
    fn from(c: CylindricalCoordinate) -> Self {
        let (sin_phi, cos_phi) = c.azimuthal_angle.sin_cos();
        CartesianCoordinate::new(
            c.radial_distance * cos_phi,
            c.radial_distance * sin_phi,
            c.height,
        )
    }
}

impl From<SphericalCoordinate> for CartesianCoordinate {
    fn from(s: SphericalCoordinate) -> Self {
        let (sin_theta, cos_theta) = s.zenith_angle.sin_cos();
        let (sin_phi, cos_phi) = s.azimuthal_angle.sin_cos();
        CartesianCoordinate::new(
            s.radius * (sin_theta * cos_phi),
            s.radius * (sin_theta * sin_phi),
            s.radius * cos_theta,
        )
    }
}

impl From<CartesianCoordinate> for CylindricalCoordinate {
    fn from(c: CartesianCoordinate) -> Self {
        let (x, y) = (c.x.metres(), c.y.metres());
        CylindricalCoordinate::new(
            Length::from_metres(x.hypot(y)),
            Angle::atan2(y, x),
            c.z,
        )
    }
}

impl From<CartesianCoordinate> for SphericalCoordinate {
    fn from(c: CartesianCoordinate) -> Self {
        let v = c.to_metres();
        let r = v.norm();
        let zenith = if r == 0.0 {
            Angle::ZERO
        } else {
            Angle::acos(v.z / r)
        };
        SphericalCoordinate::new(Length::from_metres(r), zenith, Angle::atan2(v.y, v.x))
    }
}

impl From<CylindricalCoordinate> for SphericalCoordinate {
    fn from(c: CylindricalCoordinate) -> Self {
        CartesianCoordinate::from(c).into()
    }
}

impl From<SphericalCoordinate> for CylindricalCoordinate {
    fn from(s: SphericalCoordinate) -> Self {
        CartesianCoordinate::from(s).into()
    }
}
