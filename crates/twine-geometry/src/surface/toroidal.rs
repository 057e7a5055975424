//! Torus of revolution.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use twine_core::{Result, TwineError, Validate};
use twine_math::{Point3, Vector3};

use super::Surface;

/// A torus of revolution centered at the origin with the z-axis as axis
/// of symmetry, parameterized by the poloidal angle `u = theta` (around
/// the tube) and the toroidal angle `v = phi` (around the axis), both in
/// `[0, 2*PI]`:
///
/// ```text
/// x = (R + r*cos(theta)) * cos(phi)
/// y = (R + r*cos(theta)) * sin(phi)
/// z = r * sin(theta)
/// ```
///
/// `major_radius` (`R`) is the distance from the axis to the tube
/// center, `minor_radius` (`r`) the radius of the tube. Conventionally
/// `R > r`; only positivity is required.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Torus {
    pub major_radius: f64,
    pub minor_radius: f64,
}

impl Torus {
    pub fn new(major_radius: f64, minor_radius: f64) -> Self {
        Self {
            major_radius,
            minor_radius,
        }
    }

    /// Evaluate the implicit torus equation
    /// `(sqrt(x^2 + y^2) - R)^2 + z^2 - r^2` at `p`.
    ///
    /// Zero (up to floating-point error) exactly when `p` lies on the
    /// surface.
    pub fn implicit(&self, p: Point3) -> f64 {
        let axis_dist = p.truncate().length() - self.major_radius;
        axis_dist * axis_dist + p.z * p.z - self.minor_radius * self.minor_radius
    }
}

impl Validate for Torus {
    fn validate(&self) -> Result<()> {
        if !(self.major_radius.is_finite() && self.major_radius > 0.0) {
            return Err(TwineError::Geometry(format!(
                "major radius must be positive and finite, got {}",
                self.major_radius
            )));
        }
        if !(self.minor_radius.is_finite() && self.minor_radius > 0.0) {
            return Err(TwineError::Geometry(format!(
                "minor radius must be positive and finite, got {}",
                self.minor_radius
            )));
        }
        Ok(())
    }
}

impl Surface for Torus {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let ring = self.major_radius + self.minor_radius * u.cos();
        Point3::new(ring * v.cos(), ring * v.sin(), self.minor_radius * u.sin())
    }

    fn normal_at(&self, u: f64, v: f64) -> Vector3 {
        // unit direction from the tube center to the surface point
        Vector3::new(u.cos() * v.cos(), u.cos() * v.sin(), u.sin())
    }

    fn domain_u(&self) -> (f64, f64) {
        (0.0, 2.0 * PI)
    }

    fn domain_v(&self) -> (f64, f64) {
        (0.0, 2.0 * PI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_torus_equators() {
        let torus = Torus::new(3.0, 1.0);

        // theta=0 (outer equator): distance from the axis is R + r
        let p = torus.point_at(0.0, 0.0);
        let dist_xy = (p.x * p.x + p.y * p.y).sqrt();
        assert!(
            (dist_xy - 4.0).abs() < 1e-10,
            "Outer equator distance: expected 4.0, got {}",
            dist_xy
        );

        // theta=PI (inner equator): distance from the axis is R - r
        let p = torus.point_at(PI, 0.0);
        let dist_xy = (p.x * p.x + p.y * p.y).sqrt();
        assert!(
            (dist_xy - 2.0).abs() < 1e-10,
            "Inner equator distance: expected 2.0, got {}",
            dist_xy
        );
    }

    #[test]
    fn test_torus_top() {
        let torus = Torus::new(3.0, 1.0);
        // theta=PI/2: the point sits at z=r on the tube-center circle
        let p = torus.point_at(PI / 2.0, 0.0);
        let dist_xy = (p.x * p.x + p.y * p.y).sqrt();
        assert!((dist_xy - 3.0).abs() < 1e-10);
        assert!((p.z - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_torus_implicit_zero_on_surface() {
        let torus = Torus::new(1.0, 0.3);
        for i in 0..8 {
            for j in 0..8 {
                let u = i as f64 * PI / 4.0;
                let v = j as f64 * PI / 4.0;
                let p = torus.point_at(u, v);
                assert!(
                    torus.implicit(p).abs() < 1e-12,
                    "point_at({}, {}) off the surface: {}",
                    u,
                    v,
                    torus.implicit(p)
                );
            }
        }
    }

    #[test]
    fn test_torus_normal_unit_and_radial() {
        let torus = Torus::new(2.0, 0.5);
        for i in 0..6 {
            let u = i as f64 * PI / 3.0;
            let v = (i as f64 + 0.5) * PI / 3.0;
            let n = torus.normal_at(u, v);
            assert!((n.length() - 1.0).abs() < 1e-10);

            // the point must lie one minor radius along the normal from
            // the tube-center circle
            let p = torus.point_at(u, v);
            let tube_center = p - torus.minor_radius * n;
            let dist_xy = (tube_center.x * tube_center.x + tube_center.y * tube_center.y).sqrt();
            assert!((dist_xy - torus.major_radius).abs() < 1e-10);
            assert!(tube_center.z.abs() < 1e-10);
        }
    }

    #[test]
    fn test_torus_angles_recoverable() {
        // invert the parametrization: theta from the tube cross-section,
        // phi from the position around the axis
        let torus = Torus::new(1.0, 0.3);
        let tol = twine_core::Tolerance::tight();
        for (theta, phi) in [(0.4, 1.1), (2.0, -2.5), (-1.2, 3.0)] {
            let p = torus.point_at(theta, phi);
            let axis_dist = p.truncate().length();
            let recovered_theta = p.z.atan2(axis_dist - torus.major_radius);
            let recovered_phi = p.y.atan2(p.x);
            assert!(
                tol.angular_eq(recovered_theta, theta),
                "theta {} recovered as {}",
                theta,
                recovered_theta
            );
            assert!(
                tol.angular_eq(recovered_phi, phi),
                "phi {} recovered as {}",
                phi,
                recovered_phi
            );
        }
    }

    #[test]
    fn test_torus_validate() {
        assert!(Torus::new(1.0, 0.3).validate().is_ok());
        assert!(Torus::new(0.0, 0.3).validate().is_err());
        assert!(Torus::new(1.0, -0.3).validate().is_err());
        assert!(Torus::new(f64::NAN, 0.3).validate().is_err());
    }
}
