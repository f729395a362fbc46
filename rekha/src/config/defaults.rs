//! Default values for serde.

use crate::core::ORTHONORMAL_TOLERANCE;

pub fn orthonormal_tolerance() -> f64 {
    ORTHONORMAL_TOLERANCE
}

pub fn line_samples() -> usize {
    10
}
