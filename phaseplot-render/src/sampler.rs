//! Frame rendering and point inspection: drives function evaluation
//! through the compression and encoding stages.

use crate::{encode, Frame, RenderConfig};
use phaseplot_core::{
    pixel_to_plane, Complex, ComplexFunction, PixelGrid, PlaneWindow, RenderParameters,
};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};

/// One inspected point: the plane coordinate under a pixel and the
/// function value there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointSample {
    pub coordinate: Complex,
    pub value: Complex,
}

impl PointSample {
    /// The coordinate as `(re, im)` with 2 decimal places.
    pub fn coordinate_display(&self) -> String {
        format!("{:.2}", self.coordinate)
    }

    /// The function value as `(re, im)` with 2 decimal places.
    pub fn value_display(&self) -> String {
        format!("{:.2}", self.value)
    }
}

/// Evaluate the function, substituting the zero value when the call
/// errors or returns NaN components. The bool reports the substitution.
fn eval_with_fallback(
    function: &dyn ComplexFunction,
    z: Complex,
    params: &RenderParameters,
) -> (Complex, bool) {
    match function.eval(z, params) {
        Ok(value) if !value.is_nan() => (value, false),
        _ => (Complex::ZERO, true),
    }
}

/// Compress and encode one function value into a pixel color.
fn shade(value: &Complex, config: &RenderConfig) -> [u8; 3] {
    let lightness = config.mode.compress(value.mag());
    encode(config.color_space, value.phase(), lightness)
}

/// Render every pixel of `grid` through `function` under one
/// configuration snapshot.
///
/// Each pixel is an independent pure computation, so rows run in
/// parallel and the output is deterministic for a deterministic
/// function. A sample whose evaluation fails (an `Err`, or NaN
/// components) gets the color of the zero value for that pixel only;
/// the frame carries the substitution count and a single warning is
/// logged per pass. Nothing in here can abort a frame.
///
/// `config` must have passed [`RenderConfig::validate`].
pub fn render_frame(
    grid: &PixelGrid,
    config: &RenderConfig,
    function: &dyn ComplexFunction,
) -> Frame {
    debug_assert!(config.validate().is_ok(), "config validated before render");

    let failures = AtomicU32::new(0);
    let mut pixels = vec![[0u8; 3]; grid.pixel_count()];

    // chunk size must be nonzero even when the grid is empty
    let row_len = grid.width.max(1) as usize;
    pixels.par_chunks_mut(row_len).enumerate().for_each(|(py, row)| {
        for (px, pixel) in row.iter_mut().enumerate() {
            let z = pixel_to_plane(px as u32, py as u32, grid, &config.window);
            let (value, failed) = eval_with_fallback(function, z, &config.params);
            if failed {
                failures.fetch_add(1, Ordering::Relaxed);
            }
            *pixel = shade(&value, config);
        }
    });

    let eval_failures = failures.into_inner();
    if eval_failures > 0 {
        log::warn!(
            "{eval_failures} of {} samples failed evaluation; substituted the zero value",
            grid.pixel_count()
        );
    }

    Frame::new(grid, pixels, eval_failures)
}

/// Inspect the sample under one pixel: same mapping and fallback policy
/// as [`render_frame`], without the color stages.
pub fn sample_at(
    px: u32,
    py: u32,
    grid: &PixelGrid,
    window: &PlaneWindow,
    function: &dyn ComplexFunction,
    params: &RenderParameters,
) -> PointSample {
    let coordinate = pixel_to_plane(px, py, grid, window);
    let (value, failed) = eval_with_fallback(function, coordinate, params);
    if failed {
        log::debug!("evaluation failed at {coordinate}; substituted the zero value");
    }
    PointSample { coordinate, value }
}
