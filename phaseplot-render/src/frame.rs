use phaseplot_core::PixelGrid;

/// Row-major RGB pixel buffer produced by one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
    eval_failures: u32,
}

impl Frame {
    pub(crate) fn new(grid: &PixelGrid, pixels: Vec<[u8; 3]>, eval_failures: u32) -> Self {
        debug_assert_eq!(pixels.len(), grid.pixel_count());
        Self {
            width: grid.width,
            height: grid.height,
            pixels,
            eval_failures,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Pixel at (x, y), or None off the grid.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x < self.width && y < self.height {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// How many samples failed evaluation and were substituted with the
    /// zero value.
    pub fn eval_failures(&self) -> u32 {
        self.eval_failures
    }

    /// Flat RGBA bytes (alpha 255) for canvas-style hosts.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for [r, g, b] in &self.pixels {
            bytes.extend_from_slice(&[*r, *g, *b, 255]);
        }
        bytes
    }
}
