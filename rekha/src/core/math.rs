//! Angle conversions and normalization.
//!
//! Public angles in this crate are in degrees; trigonometry is done in
//! radians internally. Counter-clockwise rotation is positive.

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Normalize an angle in degrees to (-180, 180].
///
/// # Example
/// ```
/// use rekha::core::math::normalize_degrees;
///
/// assert_eq!(normalize_degrees(270.0), -90.0);
/// assert_eq!(normalize_degrees(-180.0), 180.0);
/// assert_eq!(normalize_degrees(540.0), 180.0);
/// ```
#[inline]
pub fn normalize_degrees(deg: f64) -> f64 {
    let mut a = deg % 360.0;
    if a > 180.0 {
        a -= 360.0;
    } else if a <= -180.0 {
        a += 360.0;
    }
    a
}

/// Shortest signed difference from `from` to `to`, in degrees (-180, 180].
#[inline]
pub fn degrees_diff(from: f64, to: f64) -> f64 {
    normalize_degrees(to - from)
}

/// Check if two angles in degrees are equal modulo 360 within `tolerance`.
///
/// Handles wrap-around at ±180 correctly.
///
/// # Example
/// ```
/// use rekha::core::math::degrees_approx_equal;
///
/// assert!(degrees_approx_equal(179.9999, -179.9999, 1e-3));
/// assert!(degrees_approx_equal(30.0, 390.0, 1e-9));
/// assert!(!degrees_approx_equal(0.0, 180.0, 1.0));
/// ```
#[inline]
pub fn degrees_approx_equal(a: f64, b: f64, tolerance: f64) -> bool {
    degrees_diff(a, b).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_conversions() {
        assert_relative_eq!(deg_to_rad(180.0), std::f64::consts::PI);
        assert_relative_eq!(rad_to_deg(std::f64::consts::FRAC_PI_2), 90.0);
    }

    #[test]
    fn test_normalize_range() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(180.0), 180.0);
        assert_eq!(normalize_degrees(-180.0), 180.0);
        assert_eq!(normalize_degrees(181.0), -179.0);
        assert_eq!(normalize_degrees(-181.0), 179.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-450.0), -90.0);
    }

    #[test]
    fn test_degrees_diff_wraps() {
        assert_relative_eq!(degrees_diff(170.0, -170.0), 20.0, epsilon = 1e-12);
        assert_relative_eq!(degrees_diff(-170.0, 170.0), -20.0, epsilon = 1e-12);
    }
}
