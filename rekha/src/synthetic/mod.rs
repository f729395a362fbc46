//! Synthetic point-cloud generators.
//!
//! These build test data from the core types: a fixed corner, and points
//! sampled on a random line, each with optional Gaussian noise.

mod corner;
mod line;
mod noise;

pub use corner::{corner_cloud, CORNER_POINTS};
pub use line::{line_cloud, LineSamplerConfig, SampledLine};
pub use noise::NoiseGenerator;
