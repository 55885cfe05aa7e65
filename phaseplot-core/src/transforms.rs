//! Pixel-space to complex-plane mapping.

use crate::{Complex, PixelGrid, PlaneWindow};

/// Map a pixel coordinate to the complex-plane point it samples.
///
/// Linear interpolation on both axes:
/// `re = x_min + (px / width) · (x_max - x_min)` and likewise for the
/// imaginary axis, so pixel (0, 0) samples exactly (x_min, y_min) and the
/// max edges fall one pixel step outside the grid. Pixel row number grows
/// with the imaginary coordinate; hosts that want y to point up flip the
/// window bounds themselves.
pub fn pixel_to_plane(px: u32, py: u32, grid: &PixelGrid, window: &PlaneWindow) -> Complex {
    Complex::new(
        window.x_min + window.width() * (px as f64 / grid.width as f64),
        window.y_min + window.height() * (py as f64 / grid.height as f64),
    )
}
