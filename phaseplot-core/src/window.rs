use serde::{Deserialize, Serialize};
use std::fmt;

/// Rectangular window into the complex plane.
///
/// Bounds are inclusive at the min edge; the pixel mapping places pixel
/// (0, 0) at (x_min, y_min). A window is valid when all four bounds are
/// finite and both axes have positive extent. Degenerate windows would
/// make the pixel mapping collapse, so they are rejected at construction
/// and again at configuration validation, never mid-render.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaneWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlaneWindow {
    /// Create a window, rejecting degenerate or non-finite bounds.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, String> {
        let window = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        if !window.is_valid() {
            return Err(format!("degenerate window bounds: {window}"));
        }
        Ok(window)
    }

    /// True when all bounds are finite and min < max on both axes.
    pub fn is_valid(&self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
            && self.x_min < self.x_max
            && self.y_min < self.y_max
    }

    /// Extent along the real axis.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Extent along the imaginary axis.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl Default for PlaneWindow {
    /// The [-5, 5] × [-5, 5] square centered on the origin.
    fn default() -> Self {
        Self {
            x_min: -5.0,
            x_max: 5.0,
            y_min: -5.0,
            y_max: 5.0,
        }
    }
}

impl fmt::Display for PlaneWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x: [{}, {}], y: [{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Construction ====================

    #[test]
    fn test_new_stores_bounds() {
        let window = PlaneWindow::new(-2.0, 1.0, -1.5, 1.5).unwrap();
        assert_eq!(window.x_min, -2.0);
        assert_eq!(window.x_max, 1.0);
        assert_eq!(window.y_min, -1.5);
        assert_eq!(window.y_max, 1.5);
    }

    #[test]
    fn test_new_rejects_reversed_bounds() {
        assert!(PlaneWindow::new(5.0, -5.0, -5.0, 5.0).is_err());
        assert!(PlaneWindow::new(-5.0, 5.0, 5.0, -5.0).is_err());
    }

    #[test]
    fn test_new_rejects_zero_extent() {
        assert!(PlaneWindow::new(1.0, 1.0, -5.0, 5.0).is_err());
        assert!(PlaneWindow::new(-5.0, 5.0, 2.0, 2.0).is_err());
    }

    #[test]
    fn test_new_rejects_non_finite_bounds() {
        assert!(PlaneWindow::new(f64::NAN, 5.0, -5.0, 5.0).is_err());
        assert!(PlaneWindow::new(-5.0, f64::INFINITY, -5.0, 5.0).is_err());
        assert!(PlaneWindow::new(-5.0, 5.0, f64::NEG_INFINITY, 5.0).is_err());
    }

    // ==================== Geometry ====================

    #[test]
    fn test_width_and_height() {
        let window = PlaneWindow::new(-2.0, 1.0, -1.5, 1.5).unwrap();
        assert_eq!(window.width(), 3.0);
        assert_eq!(window.height(), 3.0);
    }

    #[test]
    fn test_default_is_the_origin_square() {
        let window = PlaneWindow::default();
        assert!(window.is_valid());
        assert_eq!(window.width(), 10.0);
        assert_eq!(window.height(), 10.0);
        assert_eq!(window.x_min, -5.0);
        assert_eq!(window.y_max, 5.0);
    }

    // ==================== Display and serialization ====================

    #[test]
    fn test_display_format() {
        let window = PlaneWindow::default();
        assert_eq!(window.to_string(), "x: [-5, 5], y: [-5, 5]");
    }

    #[test]
    fn test_serde_roundtrip() {
        let window = PlaneWindow::new(-0.5, 0.25, -1.0, 1.0).unwrap();
        let json = serde_json::to_string(&window).unwrap();
        let back: PlaneWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(window, back);
    }
}
