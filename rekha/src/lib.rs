//! # Rekha: planar rigid transforms and lines
//!
//! Small 2D algebra layer for generating and analyzing synthetic point-cloud
//! data.
//!
//! ## Quick Start
//!
//! ```rust
//! use rekha::{Line2D, Point2D, RigidTransform2D};
//!
//! // Rigid transforms compose right-to-left: `b` is applied first
//! let a = RigidTransform2D::from_angle(30.0);
//! let b = RigidTransform2D::from_angle_translation(60.0, Point2D::new(1.0, 0.0));
//! let p = Point2D::new(0.5, 0.5);
//! assert!((a * b).apply(p).approx_eq(&a.apply(b.apply(p)), 1e-12));
//! assert!((a * a.inverse()).is_identity(1e-12));
//!
//! // Lines through two points, with perpendicular distance
//! let line = Line2D::from_two_points(Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0))?;
//! assert!((line.distance_to_point(Point2D::new(1.0, 0.0)) - 0.5f64.sqrt()).abs() < 1e-12);
//! # Ok::<(), rekha::Error>(())
//! ```
//!
//! ## Coordinate Frame
//!
//! - Angles are in degrees at the API, counter-clockwise positive
//! - A rotation by θ is `[[cos θ, -sin θ], [sin θ, cos θ]]`
//! - Points are `f64` pairs
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────┐      ┌──────────────┐
//!   │  synthetic   │      │    cloud     │
//!   │ corner, line │─────►│ PointCloud2D │◄──── velodyne record files
//!   └──────┬───────┘      └──────┬───────┘
//!          │                     │
//!          ▼                     ▼
//!   ┌─────────────────────────────────────┐
//!   │                core                 │
//!   │  Point2D  Rotation2D                │
//!   │  RigidTransform2D (SE2)  Line2D     │
//!   └─────────────────────────────────────┘
//! ```
//!
//! - [`core`]: the algebra; pure `Copy` value types, no I/O
//! - [`cloud`]: point containers and the raw record file boundary
//! - [`synthetic`]: seeded generators for corner and line clouds
//! - [`config`]: YAML configuration
//! - [`error`]: crate error type

pub mod cloud;
pub mod config;
pub mod core;
pub mod error;
pub mod synthetic;

pub use cloud::{ByteOrder, PointCloud2D, VelodyneRecord};
pub use config::RekhaConfig;
pub use crate::core::{Line2D, Point2D, RigidTransform2D, Rotation2D};
pub use error::{Error, Result};
pub use synthetic::{corner_cloud, line_cloud, LineSamplerConfig, NoiseGenerator, SampledLine};
