//! Planar rigid-body transform (an element of SE(2)).

use serde::{Deserialize, Serialize};
use std::ops::Mul;

use super::math::degrees_approx_equal;
use super::point::Point2D;
use super::rotation::{Rotation2D, ORTHONORMAL_TOLERANCE};
use crate::error::Result;

/// A rotation followed by a translation: `p ↦ R·p + t`.
///
/// Immutable value type. "Setters" such as [`RigidTransform2D::with_angle`]
/// return a new transform.
///
/// # Composition
///
/// `a.compose(&b)` (or `a * b`) applies `b` first, then `a`:
/// ```
/// use rekha::{Point2D, RigidTransform2D};
///
/// let rotate = RigidTransform2D::from_angle(90.0);
/// let shift = RigidTransform2D::from_translation(Point2D::new(1.0, 0.0));
///
/// let p = (rotate * shift).apply(Point2D::ZERO);
/// assert!(p.approx_eq(&Point2D::new(0.0, 1.0), 1e-12));
///
/// let q = (shift * rotate).apply(Point2D::ZERO);
/// assert!(q.approx_eq(&Point2D::new(1.0, 0.0), 1e-12));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform2D {
    rotation: Rotation2D,
    translation: Point2D,
}

impl RigidTransform2D {
    /// Create a transform from a validated rotation and a translation.
    #[inline]
    pub fn new(rotation: Rotation2D, translation: Point2D) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// The identity transform.
    #[inline]
    pub const fn identity() -> Self {
        Self {
            rotation: Rotation2D::IDENTITY,
            translation: Point2D::ZERO,
        }
    }

    /// Pure rotation by `degrees` (any real angle), zero translation.
    #[inline]
    pub fn from_angle(degrees: f64) -> Self {
        Self::new(Rotation2D::from_degrees(degrees), Point2D::ZERO)
    }

    /// Rotation by `degrees` followed by `translation`.
    #[inline]
    pub fn from_angle_translation(degrees: f64, translation: Point2D) -> Self {
        Self::new(Rotation2D::from_degrees(degrees), translation)
    }

    /// Pure translation.
    #[inline]
    pub fn from_translation(translation: Point2D) -> Self {
        Self::new(Rotation2D::IDENTITY, translation)
    }

    /// Build from a raw rotation matrix, checked with [`ORTHONORMAL_TOLERANCE`].
    ///
    /// # Errors
    /// [`Error::InvalidRotation`](crate::Error::InvalidRotation) if the matrix
    /// is not a proper rotation.
    pub fn from_matrix(matrix: [[f64; 2]; 2], translation: Point2D) -> Result<Self> {
        Self::from_matrix_with_tolerance(matrix, translation, ORTHONORMAL_TOLERANCE)
    }

    /// Build from a raw rotation matrix with an explicit tolerance.
    pub fn from_matrix_with_tolerance(
        matrix: [[f64; 2]; 2],
        translation: Point2D,
        tolerance: f64,
    ) -> Result<Self> {
        let rotation = Rotation2D::from_matrix_with_tolerance(matrix, tolerance)?;
        Ok(Self::new(rotation, translation))
    }

    /// Same translation, rotation replaced by `degrees`.
    #[inline]
    pub fn with_angle(&self, degrees: f64) -> Self {
        Self::new(Rotation2D::from_degrees(degrees), self.translation)
    }

    /// Same rotation, translation replaced.
    #[inline]
    pub fn with_translation(&self, translation: Point2D) -> Self {
        Self::new(self.rotation, translation)
    }

    /// Rotation part.
    #[inline]
    pub fn rotation(&self) -> Rotation2D {
        self.rotation
    }

    /// Translation part.
    #[inline]
    pub fn translation(&self) -> Point2D {
        self.translation
    }

    /// Rotation matrix rows.
    #[inline]
    pub fn matrix(&self) -> [[f64; 2]; 2] {
        self.rotation.matrix()
    }

    /// Rotation angle in degrees, (-180, 180].
    #[inline]
    pub fn angle(&self) -> f64 {
        self.rotation.degrees()
    }

    /// Group inverse: `(Rᵗ, -Rᵗ·t)`.
    #[inline]
    pub fn inverse(&self) -> Self {
        let rt = self.rotation.transpose();
        Self::new(rt, -rt.apply(self.translation))
    }

    /// Group product `self ∘ other = (R1·R2, R1·t2 + t1)`.
    ///
    /// Applying the result equals applying `other`, then `self`.
    #[inline]
    pub fn compose(&self, other: &RigidTransform2D) -> Self {
        Self::new(
            self.rotation.compose(&other.rotation),
            self.rotation.apply(other.translation) + self.translation,
        )
    }

    /// Map a point: `R·p + t`.
    #[inline]
    pub fn apply(&self, point: Point2D) -> Point2D {
        self.rotation.apply(point) + self.translation
    }

    /// Map a point by the inverse transform: `Rᵗ·(p - t)`.
    #[inline]
    pub fn inverse_apply(&self, point: Point2D) -> Point2D {
        self.rotation.transpose().apply(point - self.translation)
    }

    /// The transform that, composed after `self`, yields `other`:
    /// `self.compose(&self.relative_to(other)) ≈ other`.
    #[inline]
    pub fn relative_to(&self, other: &RigidTransform2D) -> Self {
        self.inverse().compose(other)
    }

    /// Entry-wise comparison of rotation and translation within `epsilon`.
    #[inline]
    pub fn approx_eq(&self, other: &RigidTransform2D, epsilon: f64) -> bool {
        self.rotation.approx_eq(&other.rotation, epsilon)
            && self.translation.approx_eq(&other.translation, epsilon)
    }

    /// Check if this is the identity within `epsilon`.
    #[inline]
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }

    /// Same rotation angle (modulo 360) within `epsilon` degrees, ignoring translation.
    #[inline]
    pub fn same_angle(&self, other: &RigidTransform2D, epsilon: f64) -> bool {
        degrees_approx_equal(self.angle(), other.angle(), epsilon)
    }
}

impl Mul for RigidTransform2D {
    type Output = Self;

    /// Compose two transforms (same as `compose`).
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<Point2D> for RigidTransform2D {
    type Output = Point2D;

    /// Apply to a point (same as `apply`).
    #[inline]
    fn mul(self, rhs: Point2D) -> Point2D {
        self.apply(rhs)
    }
}
