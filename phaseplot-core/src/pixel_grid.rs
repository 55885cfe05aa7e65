use serde::{Deserialize, Serialize};

/// Pixel grid dimensions (always u32 coordinates).
///
/// Fixed for the lifetime of a render surface; hosts construct one when
/// they size their canvas and pass it to every render and hover call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelGrid {
    pub width: u32,
    pub height: u32,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when (px, py) lies on the grid.
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px < self.width && py < self.height
    }

    /// Row-major buffer index of a pixel.
    pub fn index_of(&self, px: u32, py: u32) -> usize {
        py as usize * self.width as usize + px as usize
    }
}
