//! Fixed "corner" point cloud.

use crate::cloud::PointCloud2D;
use crate::core::Point2D;

use super::noise::NoiseGenerator;

/// A vertical wall from (0, 0) to (0, 1) turning right along y = 1.
pub const CORNER_POINTS: [Point2D; 6] = [
    Point2D::new(0.0, 0.0),
    Point2D::new(0.0, 0.25),
    Point2D::new(0.0, 0.5),
    Point2D::new(0.0, 0.75),
    Point2D::new(0.0, 1.0),
    Point2D::new(0.25, 1.0),
];

/// The corner cloud with optional per-coordinate Gaussian noise.
pub fn corner_cloud(noise_sigma: f64, noise: &mut NoiseGenerator) -> PointCloud2D {
    let mut cloud = PointCloud2D::from_points(&CORNER_POINTS);
    cloud.add_noise(noise_sigma, noise);
    log::trace!("Generated corner cloud (sigma = {})", noise_sigma);
    cloud
}
