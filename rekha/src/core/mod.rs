//! Core algebra types.
//!
//! This is the bottom layer of the crate with no internal dependencies
//! besides [`crate::error`]:
//! - [`Point2D`]: point / free vector in the plane
//! - [`Rotation2D`]: validated 2x2 rotation matrix
//! - [`RigidTransform2D`]: element of SE(2), rotation followed by translation
//! - [`Line2D`]: infinite line (oblique or vertical) with distance queries
//! - [`math`]: angle conversions and normalization

pub mod math;

mod line;
mod point;
mod rotation;
mod transform;

pub use line::Line2D;
pub use point::Point2D;
pub use rotation::{Rotation2D, ORTHONORMAL_TOLERANCE};
pub use transform::RigidTransform2D;
