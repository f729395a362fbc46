//! Point clouds and the raw record file boundary.
//!
//! - [`PointCloud2D`]: SoA container with rigid-transform application
//! - [`velodyne`]: flat float32 `x, y, z, reflectance` record files

mod point_cloud;
pub mod velodyne;

pub use point_cloud::PointCloud2D;
pub use velodyne::{ByteOrder, VelodyneRecord};
