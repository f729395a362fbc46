//! Infinite 2D line with point-distance queries.
//!
//! Lines are stored in slope-intercept form `y = slope·x + intercept`,
//! with a separate variant for vertical lines `x = const`, which the
//! slope-intercept form cannot express.
//!
//! # Point-to-Line Distance
//!
//! ```text
//! oblique:  |slope·x - y + intercept| / sqrt(1 + slope²)
//! vertical: |x - x0|
//! ```

use serde::{Deserialize, Serialize};

use super::point::Point2D;
use super::transform::RigidTransform2D;
use crate::error::{Error, Result};

/// An infinite line in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Line2D {
    /// `y = slope·x + intercept`, both finite.
    Oblique {
        /// Rise over run
        slope: f64,
        /// Value of y at x = 0
        intercept: f64,
    },
    /// `x = x`.
    Vertical {
        /// X coordinate shared by every point of the line
        x: f64,
    },
}

impl Line2D {
    /// Create a line `y = slope·x + intercept`.
    ///
    /// # Errors
    /// [`Error::DegenerateLine`] if either parameter is not finite.
    pub fn new(slope: f64, intercept: f64) -> Result<Self> {
        if !slope.is_finite() || !intercept.is_finite() {
            return Err(degenerate(format!(
                "slope {} and intercept {} must be finite",
                slope, intercept
            )));
        }
        Ok(Line2D::Oblique { slope, intercept })
    }

    /// Create the vertical line `x = x`.
    pub fn vertical(x: f64) -> Result<Self> {
        if !x.is_finite() {
            return Err(degenerate(format!("vertical line at x = {}", x)));
        }
        Ok(Line2D::Vertical { x })
    }

    /// Line through two points.
    ///
    /// Points sharing the same x coordinate give a [`Line2D::Vertical`]
    /// line, as do points so close in x that the slope overflows.
    ///
    /// # Errors
    /// [`Error::DegenerateLine`] if the points coincide or are not finite,
    /// or if the intercept overflows.
    ///
    /// # Example
    /// ```
    /// use rekha::{Line2D, Point2D};
    ///
    /// let line = Line2D::from_two_points(Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0)).unwrap();
    /// assert_eq!(line.slope(), Some(1.0));
    /// assert_eq!(line.intercept(), Some(0.0));
    ///
    /// let d = line.distance_to_point(Point2D::new(1.0, 0.0));
    /// assert!((d - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    ///
    /// assert!(Line2D::from_two_points(Point2D::new(2.0, 3.0), Point2D::new(2.0, 3.0)).is_err());
    /// ```
    pub fn from_two_points(p1: Point2D, p2: Point2D) -> Result<Self> {
        if !p1.is_finite() || !p2.is_finite() {
            return Err(degenerate(format!(
                "points ({}, {}) and ({}, {}) must be finite",
                p1.x, p1.y, p2.x, p2.y
            )));
        }
        if p1 == p2 {
            return Err(degenerate(format!(
                "points coincide at ({}, {})",
                p1.x, p1.y
            )));
        }
        Self::through_distinct(p1, p2)
    }

    /// Line through two distinct finite points.
    fn through_distinct(p1: Point2D, p2: Point2D) -> Result<Self> {
        Self::through_anchor(p1, p2 - p1)
    }

    /// Line through `anchor` along `direction`.
    ///
    /// A direction whose slope overflows gives a vertical line. An intercept
    /// that overflows under a finite slope cannot be represented at all.
    fn through_anchor(anchor: Point2D, direction: Point2D) -> Result<Self> {
        let slope = direction.y / direction.x;
        if !slope.is_finite() {
            log::debug!("Line through x = {} is vertical", anchor.x);
            return Ok(Line2D::Vertical { x: anchor.x });
        }
        let intercept = anchor.y - slope * anchor.x;
        if !intercept.is_finite() {
            return Err(degenerate(format!(
                "intercept overflows for slope {} through ({}, {})",
                slope, anchor.x, anchor.y
            )));
        }
        Ok(Line2D::Oblique { slope, intercept })
    }

    /// Slope, or `None` for a vertical line.
    #[inline]
    pub fn slope(&self) -> Option<f64> {
        match *self {
            Line2D::Oblique { slope, .. } => Some(slope),
            Line2D::Vertical { .. } => None,
        }
    }

    /// Intercept with the y axis, or `None` for a vertical line.
    #[inline]
    pub fn intercept(&self) -> Option<f64> {
        match *self {
            Line2D::Oblique { intercept, .. } => Some(intercept),
            Line2D::Vertical { .. } => None,
        }
    }

    /// True for [`Line2D::Vertical`].
    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Line2D::Vertical { .. })
    }

    /// Evaluate `y = slope·x + intercept`; `None` for a vertical line.
    #[inline]
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match *self {
            Line2D::Oblique { slope, intercept } => Some(slope * x + intercept),
            Line2D::Vertical { .. } => None,
        }
    }

    /// Normalized coefficients `(a, b, c)` of `a·x + b·y + c = 0`, `a² + b² = 1`.
    pub fn coefficients(&self) -> (f64, f64, f64) {
        match *self {
            Line2D::Oblique { slope, intercept } => {
                // slope·x - y + intercept = 0
                let norm = slope.hypot(1.0);
                (slope / norm, -1.0 / norm, intercept / norm)
            }
            Line2D::Vertical { x } => (1.0, 0.0, -x),
        }
    }

    /// Perpendicular distance from `p` to the line (always >= 0).
    #[inline]
    pub fn distance_to_point(&self, p: Point2D) -> f64 {
        match *self {
            Line2D::Oblique { slope, intercept } => {
                (slope * p.x - p.y + intercept).abs() / (1.0 + slope * slope).sqrt()
            }
            Line2D::Vertical { x } => (p.x - x).abs(),
        }
    }

    /// Signed distance: positive below an oblique line, right of a vertical one.
    #[inline]
    pub fn signed_distance(&self, p: Point2D) -> f64 {
        let (a, b, c) = self.coefficients();
        a * p.x + b * p.y + c
    }

    /// Foot of the perpendicular from `p`.
    pub fn project(&self, p: Point2D) -> Point2D {
        let (a, b, _) = self.coefficients();
        let d = self.signed_distance(p);
        Point2D::new(p.x - a * d, p.y - b * d)
    }

    /// Check if `p` lies on the line within `tolerance`.
    #[inline]
    pub fn contains(&self, p: Point2D, tolerance: f64) -> bool {
        self.distance_to_point(p) <= tolerance
    }

    /// Image of this line under a rigid transform.
    ///
    /// Oblique lines may become vertical and vice versa. Only the anchor
    /// point is translated; the direction is rotated on its own.
    ///
    /// # Errors
    /// [`Error::DegenerateLine`] if the image is oblique but its intercept
    /// overflows.
    pub fn transformed(&self, transform: &RigidTransform2D) -> Result<Line2D> {
        let (anchor, direction) = match *self {
            Line2D::Oblique { slope, intercept } => {
                (Point2D::new(0.0, intercept), Point2D::new(1.0, slope))
            }
            Line2D::Vertical { x } => (Point2D::new(x, 0.0), Point2D::new(0.0, 1.0)),
        };
        Self::through_anchor(
            transform.apply(anchor),
            transform.rotation().apply(direction),
        )
    }
}

fn degenerate(reason: String) -> Error {
    log::debug!("Rejected line: {}", reason);
    Error::DegenerateLine(reason)
}
