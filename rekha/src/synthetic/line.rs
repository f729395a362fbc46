//! Random line cloud generator.

use serde::{Deserialize, Serialize};

use crate::cloud::PointCloud2D;
use crate::core::{Line2D, Point2D};
use crate::error::Result;

use super::noise::NoiseGenerator;

/// Line sampler parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSamplerConfig {
    /// Number of points sampled along the line
    pub samples: usize,
    /// Per-coordinate Gaussian noise standard deviation (0 = exact)
    pub noise_sigma: f64,
}

impl Default for LineSamplerConfig {
    fn default() -> Self {
        Self {
            samples: 10,
            noise_sigma: 0.0,
        }
    }
}

/// Ground-truth line and the points sampled from it.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledLine {
    /// Line through the two anchor points
    pub line: Line2D,
    /// The two random points that define the line
    pub anchors: (Point2D, Point2D),
    /// Sampled (and possibly noisy) points
    pub cloud: PointCloud2D,
}

/// Sample points on a random line through the unit square.
///
/// Two uniform points in [0, 1)² define the line. X values are drawn
/// uniformly from [0, 1) and mapped through `y = slope·x + intercept`;
/// a vertical line draws y values instead.
///
/// # Errors
/// [`Error::DegenerateLine`](crate::Error::DegenerateLine) if the two anchor
/// points coincide.
pub fn line_cloud(config: &LineSamplerConfig, noise: &mut NoiseGenerator) -> Result<SampledLine> {
    let p1 = Point2D::new(noise.uniform(), noise.uniform());
    let p2 = Point2D::new(noise.uniform(), noise.uniform());
    let line = Line2D::from_two_points(p1, p2)?;

    let mut cloud = PointCloud2D::with_capacity(config.samples);
    for _ in 0..config.samples {
        let t = noise.uniform();
        match line {
            Line2D::Oblique { slope, intercept } => cloud.push_xy(t, slope * t + intercept),
            Line2D::Vertical { x } => cloud.push_xy(x, t),
        }
    }
    cloud.add_noise(config.noise_sigma, noise);

    log::trace!(
        "Generated {} points on {:?} (sigma = {})",
        cloud.len(),
        line,
        config.noise_sigma
    );

    Ok(SampledLine {
        line,
        anchors: (p1, p2),
        cloud,
    })
}
