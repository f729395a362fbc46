//! Validated 2x2 rotation matrix.
//!
//! Rows are stored as `[[r00, r01], [r10, r11]]`. A rotation by θ is
//! `[[cos θ, -sin θ], [sin θ, cos θ]]` (counter-clockwise positive).

use serde::{Deserialize, Serialize};
use std::ops::Mul;

use super::math::{deg_to_rad, rad_to_deg};
use super::point::Point2D;
use crate::error::{Error, Result};

/// Default tolerance for the orthonormality check in [`Rotation2D::from_matrix`].
pub const ORTHONORMAL_TOLERANCE: f64 = 1e-6;

/// A proper rotation of the plane (orthonormal, determinant +1).
///
/// The matrix is private: the trigonometric constructors are orthonormal by
/// construction, and [`Rotation2D::from_matrix`] checks caller-supplied data.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[[f64; 2]; 2]", into = "[[f64; 2]; 2]")]
pub struct Rotation2D {
    m: [[f64; 2]; 2],
}

impl Rotation2D {
    /// The identity rotation.
    pub const IDENTITY: Rotation2D = Rotation2D {
        m: [[1.0, 0.0], [0.0, 1.0]],
    };

    /// Rotation by an angle in degrees.
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(deg_to_rad(degrees))
    }

    /// Rotation by an angle in radians.
    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Self {
            m: [[c, -s], [s, c]],
        }
    }

    /// Validate a caller-supplied matrix with [`ORTHONORMAL_TOLERANCE`].
    pub fn from_matrix(m: [[f64; 2]; 2]) -> Result<Self> {
        Self::from_matrix_with_tolerance(m, ORTHONORMAL_TOLERANCE)
    }

    /// Validate a caller-supplied matrix.
    ///
    /// Rejects non-finite entries, rows that are not unit length or not
    /// mutually orthogonal (within `tolerance`), and reflections.
    pub fn from_matrix_with_tolerance(m: [[f64; 2]; 2], tolerance: f64) -> Result<Self> {
        if m.iter().flatten().any(|v| !v.is_finite()) {
            return Err(reject("matrix has non-finite entries".to_string()));
        }

        for (i, row) in m.iter().enumerate() {
            let norm_sq = row[0] * row[0] + row[1] * row[1];
            if (norm_sq - 1.0).abs() > tolerance {
                return Err(reject(format!(
                    "row {} has squared length {:.9}, expected 1",
                    i, norm_sq
                )));
            }
        }

        let dot = m[0][0] * m[1][0] + m[0][1] * m[1][1];
        if dot.abs() > tolerance {
            return Err(reject(format!("rows are not orthogonal (dot = {:.9})", dot)));
        }

        let det = m[0][0] * m[1][1] - m[0][1] * m[1][0];
        if det < 0.0 {
            return Err(reject(format!(
                "determinant {:.6} describes a reflection",
                det
            )));
        }

        Ok(Self { m })
    }

    /// Raw matrix rows.
    #[inline]
    pub fn matrix(&self) -> [[f64; 2]; 2] {
        self.m
    }

    /// Rotation angle in radians, [-π, π].
    #[inline]
    pub fn radians(&self) -> f64 {
        self.m[1][0].atan2(self.m[0][0])
    }

    /// Rotation angle in degrees, (-180, 180].
    ///
    /// Inverse of [`Rotation2D::from_degrees`] modulo 360.
    #[inline]
    pub fn degrees(&self) -> f64 {
        let rad = self.radians();
        // atan2 returns -π for a half turn approached from below
        if rad <= -std::f64::consts::PI {
            180.0
        } else {
            rad_to_deg(rad).clamp(-180.0, 180.0)
        }
    }

    /// Determinant (+1 up to rounding).
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.m[0][0] * self.m[1][1] - self.m[0][1] * self.m[1][0]
    }

    /// Transpose, which is the inverse rotation.
    #[inline]
    pub fn transpose(&self) -> Self {
        let m = self.m;
        Self {
            m: [[m[0][0], m[1][0]], [m[0][1], m[1][1]]],
        }
    }

    /// Matrix product `self · other`.
    #[inline]
    pub fn compose(&self, other: &Rotation2D) -> Self {
        let a = self.m;
        let b = other.m;
        Self {
            m: [
                [
                    a[0][0] * b[0][0] + a[0][1] * b[1][0],
                    a[0][0] * b[0][1] + a[0][1] * b[1][1],
                ],
                [
                    a[1][0] * b[0][0] + a[1][1] * b[1][0],
                    a[1][0] * b[0][1] + a[1][1] * b[1][1],
                ],
            ],
        }
    }

    /// Matrix-vector product `self · p`.
    #[inline]
    pub fn apply(&self, p: Point2D) -> Point2D {
        Point2D::new(
            self.m[0][0] * p.x + self.m[0][1] * p.y,
            self.m[1][0] * p.x + self.m[1][1] * p.y,
        )
    }

    /// Entry-wise comparison within `epsilon`.
    #[inline]
    pub fn approx_eq(&self, other: &Rotation2D, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

fn reject(reason: String) -> Error {
    log::debug!("Rejected rotation matrix: {}", reason);
    Error::InvalidRotation(reason)
}

impl Default for Rotation2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TryFrom<[[f64; 2]; 2]> for Rotation2D {
    type Error = Error;

    fn try_from(m: [[f64; 2]; 2]) -> Result<Self> {
        Self::from_matrix(m)
    }
}

impl From<Rotation2D> for [[f64; 2]; 2] {
    fn from(r: Rotation2D) -> Self {
        r.m
    }
}

impl Mul for Rotation2D {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<Point2D> for Rotation2D {
    type Output = Point2D;

    #[inline]
    fn mul(self, rhs: Point2D) -> Point2D {
        self.apply(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_degrees_matrix() {
        let r = Rotation2D::from_degrees(90.0);
        let m = r.matrix();
        assert_relative_eq!(m[0][0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(m[0][1], -1.0, epsilon = 1e-12);
        assert_relative_eq!(m[1][0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(m[1][1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degrees_boundaries() {
        assert_relative_eq!(Rotation2D::from_degrees(0.0).degrees(), 0.0);
        assert_relative_eq!(Rotation2D::from_degrees(180.0).degrees(), 180.0, epsilon = 1e-9);
        assert_relative_eq!(Rotation2D::from_degrees(-180.0).degrees(), 180.0, epsilon = 1e-9);
        assert_relative_eq!(Rotation2D::from_degrees(-90.0).degrees(), -90.0, epsilon = 1e-9);
        assert_relative_eq!(Rotation2D::from_degrees(450.0).degrees(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_transpose_is_inverse() {
        let r = Rotation2D::from_degrees(37.0);
        let product = r.compose(&r.transpose());
        assert!(product.approx_eq(&Rotation2D::IDENTITY, 1e-12));
    }

    #[test]
    fn test_apply() {
        let p = Rotation2D::from_degrees(90.0) * Point2D::new(1.0, 0.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_from_matrix_accepts_rotation() {
        let m = Rotation2D::from_degrees(123.0).matrix();
        let r = Rotation2D::from_matrix(m).unwrap();
        assert_relative_eq!(r.degrees(), 123.0, epsilon = 1e-9);
    }

    #[test]
    fn test_from_matrix_rejects_scale() {
        let err = Rotation2D::from_matrix([[2.0, 0.0], [0.0, 2.0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidRotation(_)));
    }

    #[test]
    fn test_from_matrix_rejects_shear() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert!(Rotation2D::from_matrix([[1.0, 0.0], [s, s]]).is_err());
    }

    #[test]
    fn test_from_matrix_rejects_reflection() {
        let err = Rotation2D::from_matrix([[1.0, 0.0], [0.0, -1.0]]).unwrap_err();
        assert!(err.to_string().contains("reflection"));
    }

    #[test]
    fn test_from_matrix_rejects_nan() {
        assert!(Rotation2D::from_matrix([[f64::NAN, 0.0], [0.0, 1.0]]).is_err());
    }

    #[test]
    fn test_tolerance_is_respected() {
        let m = [[1.0 + 1e-4, 0.0], [0.0, 1.0]];
        assert!(Rotation2D::from_matrix(m).is_err());
        assert!(Rotation2D::from_matrix_with_tolerance(m, 1e-3).is_ok());
    }
}
