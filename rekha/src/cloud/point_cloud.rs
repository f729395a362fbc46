//! 2D point cloud with structure-of-arrays layout.

use serde::{Deserialize, Serialize};

use crate::core::{Line2D, Point2D, RigidTransform2D};
use crate::error::Error;
use crate::synthetic::NoiseGenerator;

/// Collection of 2D points.
///
/// Coordinates are stored in separate `xs` / `ys` vectors.
///
/// # Invariant
/// `xs.len() == ys.len()`. The methods here keep it; code writing the
/// public fields directly must too. Deserialization rejects mismatched
/// lengths.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CloudColumns")]
pub struct PointCloud2D {
    /// X coordinates
    pub xs: Vec<f64>,
    /// Y coordinates
    pub ys: Vec<f64>,
}

impl PointCloud2D {
    /// Create an empty point cloud.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
        }
    }

    /// Create from a slice of points.
    pub fn from_points(points: &[Point2D]) -> Self {
        let mut cloud = Self::with_capacity(points.len());
        for p in points {
            cloud.push(*p);
        }
        cloud
    }

    /// Add a point.
    #[inline]
    pub fn push(&mut self, point: Point2D) {
        self.push_xy(point.x, point.y);
    }

    /// Add a point from coordinates.
    #[inline]
    pub fn push_xy(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Point at index, if in range.
    #[inline]
    pub fn point_at(&self, i: usize) -> Option<Point2D> {
        Some(Point2D::new(*self.xs.get(i)?, *self.ys.get(i)?))
    }

    /// Iterate over points.
    pub fn iter(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
    }

    /// Collect into a vector of points.
    pub fn to_points(&self) -> Vec<Point2D> {
        self.iter().collect()
    }

    /// Axis-aligned bounds as (min, max), or `None` if empty.
    pub fn bounds(&self) -> Option<(Point2D, Point2D)> {
        let first = self.point_at(0)?;
        let (min, max) = self.iter().fold((first, first), |(min, max), p| {
            (
                Point2D::new(min.x.min(p.x), min.y.min(p.y)),
                Point2D::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some((min, max))
    }

    /// Mean of all points, or `None` if empty.
    pub fn centroid(&self) -> Option<Point2D> {
        if self.is_empty() {
            return None;
        }
        let n = self.len() as f64;
        let sx: f64 = self.xs.iter().sum();
        let sy: f64 = self.ys.iter().sum();
        Some(Point2D::new(sx / n, sy / n))
    }

    /// Apply a rigid transform to every point, returning a new cloud.
    pub fn transform(&self, transform: &RigidTransform2D) -> PointCloud2D {
        let mut result = self.clone();
        result.transform_mut(transform);
        result
    }

    /// Apply a rigid transform to every point in place.
    pub fn transform_mut(&mut self, transform: &RigidTransform2D) {
        for (x, y) in self.xs.iter_mut().zip(self.ys.iter_mut()) {
            let p = transform.apply(Point2D::new(*x, *y));
            *x = p.x;
            *y = p.y;
        }
    }

    /// Add zero-mean Gaussian noise with standard deviation `sigma` to each
    /// coordinate independently. No-op when `sigma <= 0`.
    pub fn add_noise(&mut self, sigma: f64, noise: &mut NoiseGenerator) {
        if sigma <= 0.0 {
            return;
        }
        for (x, y) in self.xs.iter_mut().zip(self.ys.iter_mut()) {
            *x += noise.gaussian(sigma);
            *y += noise.gaussian(sigma);
        }
    }

    /// Largest perpendicular distance from any point to `line`, or `None` if empty.
    pub fn max_distance_to_line(&self, line: &Line2D) -> Option<f64> {
        self.iter().map(|p| line.distance_to_point(p)).reduce(f64::max)
    }
}

/// Unchecked serialized form of [`PointCloud2D`].
#[derive(Deserialize)]
struct CloudColumns {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl TryFrom<CloudColumns> for PointCloud2D {
    type Error = Error;

    fn try_from(columns: CloudColumns) -> Result<Self, Error> {
        if columns.xs.len() != columns.ys.len() {
            return Err(Error::MismatchedCloud {
                xs: columns.xs.len(),
                ys: columns.ys.len(),
            });
        }
        Ok(Self {
            xs: columns.xs,
            ys: columns.ys,
        })
    }
}

impl FromIterator<Point2D> for PointCloud2D {
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> Self {
        let mut cloud = PointCloud2D::new();
        for p in iter {
            cloud.push(p);
        }
        cloud
    }
}
