//! Configuration sections.

use serde::{Deserialize, Serialize};

use crate::cloud::ByteOrder;
use crate::core::{Point2D, RigidTransform2D};
use crate::error::Result;

use super::defaults;

/// Geometry settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometrySection {
    /// Tolerance for accepting caller-supplied rotation matrices
    #[serde(default = "defaults::orthonormal_tolerance")]
    pub orthonormal_tolerance: f64,
}

impl Default for GeometrySection {
    fn default() -> Self {
        Self {
            orthonormal_tolerance: defaults::orthonormal_tolerance(),
        }
    }
}

/// Synthetic generator settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSection {
    /// RNG seed (0 = OS entropy)
    #[serde(default)]
    pub seed: u64,

    /// Per-coordinate Gaussian noise standard deviation
    #[serde(default)]
    pub noise_sigma: f64,

    /// Points sampled per generated line
    #[serde(default = "defaults::line_samples")]
    pub line_samples: usize,
}

impl Default for SyntheticSection {
    fn default() -> Self {
        Self {
            seed: 0,
            noise_sigma: 0.0,
            line_samples: defaults::line_samples(),
        }
    }
}

/// Raw record file settings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VelodyneSection {
    /// Element byte order
    #[serde(default)]
    pub byte_order: ByteOrder,

    /// Sensor-to-world transform applied to projected points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount: Option<MountSection>,
}

/// Sensor mount pose as written in the file.
///
/// The rotation is stored unchecked; it is validated against
/// `geometry.orthonormal_tolerance` by [`RekhaConfig::validate`](super::RekhaConfig::validate).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MountSection {
    /// Rotation matrix rows
    pub rotation: [[f64; 2]; 2],

    /// Translation in meters
    #[serde(default)]
    pub translation: Point2D,
}

impl MountSection {
    /// Validated transform, with the matrix checked against `tolerance`.
    pub fn to_transform(&self, tolerance: f64) -> Result<RigidTransform2D> {
        RigidTransform2D::from_matrix_with_tolerance(self.rotation, self.translation, tolerance)
    }
}

impl From<RigidTransform2D> for MountSection {
    fn from(transform: RigidTransform2D) -> Self {
        Self {
            rotation: transform.matrix(),
            translation: transform.translation(),
        }
    }
}
