//! (phase, lightness) → RGB pixel encoding.

use crate::color_space::{hsl_to_rgb, lab_to_rgb};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Fixed saturation of the hue-wheel encoding.
pub const WHEEL_SATURATION: f64 = 0.5;

/// Radius of the chroma circle in the perceptual encoding's (a, b) plane.
pub const CHROMA_RADIUS: f64 = 100.0;

/// Selects how a (phase, lightness) pair becomes a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpace {
    /// CIE Lab with phase as the hue angle on a chroma circle of radius
    /// 100. Perceptually even: equal phase steps read as equal color
    /// steps, at the cost of heavy gamut clamping.
    Perceptual,
    /// HSL wheel: phase maps linearly onto hue at 50% saturation. Cheap
    /// and familiar, with the usual perceptual lumpiness around green.
    HueWheel,
}

impl Default for ColorSpace {
    fn default() -> Self {
        Self::Perceptual
    }
}

/// Chroma-plane components of a phase angle: (100·cos, 100·sin).
pub fn chroma_components(phase: f64) -> (f64, f64) {
    (CHROMA_RADIUS * phase.cos(), CHROMA_RADIUS * phase.sin())
}

/// Map a phase in (-π, π] linearly onto hue degrees in [0, 360).
///
/// Phase -π lands on hue 0 and +π wraps back onto 0, so both ends of the
/// branch cut get the same color.
fn phase_to_hue(phase: f64) -> f64 {
    ((phase + PI) / TAU * 360.0).rem_euclid(360.0)
}

/// Encode one sample as an 8-bit RGB color.
///
/// `phase` is in (-π, π] and `lightness` in [0, 100], as produced by the
/// arithmetic and compression stages.
pub fn encode(color_space: ColorSpace, phase: f64, lightness: f64) -> [u8; 3] {
    match color_space {
        ColorSpace::Perceptual => {
            let (a, b) = chroma_components(phase);
            lab_to_rgb(lightness, a, b)
        }
        ColorSpace::HueWheel => {
            hsl_to_rgb(phase_to_hue(phase), WHEEL_SATURATION, lightness / 100.0)
        }
    }
}
