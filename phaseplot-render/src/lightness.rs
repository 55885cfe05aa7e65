//! Magnitude-to-lightness compression curves.
//!
//! Function magnitudes are unbounded, lightness lives in [0, 100]. Each
//! curve squashes [0, +∞) monotonically onto that range; which curve is
//! active changes how much detail survives near the poles and zeros of
//! the rendered function.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::f64::consts::FRAC_2_PI;

/// Selects the active magnitude-to-lightness curve.
///
/// All five curves map 0 → 0 and +∞ → 100. The rational curves of higher
/// order pull small magnitudes harder toward black and saturate faster
/// once the magnitude passes 1, which is the user-visible difference
/// between them. A selector tag the engine does not recognize becomes
/// [`LightnessMode::Unknown`], which compresses everything to a flat 50.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightnessMode {
    /// (2/π)·atan(r), the gentlest curve.
    Arctan,
    /// r/(r+1)
    N1,
    /// r²/(r²+1)
    N2,
    /// r³/(r³+1)
    N3,
    /// r⁴/(r⁴+1), the steepest curve.
    N4,
    /// Unrecognized selector; compresses to a fixed 50.
    Unknown,
}

impl LightnessMode {
    /// Parse a selector tag; unrecognized tags map to `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "arctan" => Self::Arctan,
            "n1" => Self::N1,
            "n2" => Self::N2,
            "n3" => Self::N3,
            "n4" => Self::N4,
            _ => Self::Unknown,
        }
    }

    /// The wire/config tag for this mode.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Arctan => "arctan",
            Self::N1 => "n1",
            Self::N2 => "n2",
            Self::N3 => "n3",
            Self::N4 => "n4",
            Self::Unknown => "unknown",
        }
    }

    /// Compress a magnitude into a lightness percentage in [0, 100].
    ///
    /// Total over the whole magnitude range: `compress(0)` is exactly 0,
    /// +∞ saturates to 100 (the rational curves take their limit value
    /// instead of evaluating ∞/∞), and the result is clamped so float
    /// rounding can never leave the documented range.
    pub fn compress(self, magnitude: f64) -> f64 {
        let unit = match self {
            Self::Arctan => FRAC_2_PI * magnitude.atan(),
            Self::N1 => squash(magnitude),
            Self::N2 => squash(magnitude * magnitude),
            Self::N3 => squash(magnitude * magnitude * magnitude),
            Self::N4 => squash(magnitude * magnitude * magnitude * magnitude),
            Self::Unknown => return 50.0,
        };
        (unit * 100.0).clamp(0.0, 100.0)
    }
}

/// p/(p+1), taking the limit value 1 at +∞ where the quotient itself
/// would be ∞/∞.
fn squash(powered: f64) -> f64 {
    if powered.is_infinite() {
        1.0
    } else {
        powered / (powered + 1.0)
    }
}

impl Default for LightnessMode {
    fn default() -> Self {
        Self::Arctan
    }
}

// Hand-written serde over the string tag: derived external tagging would
// reject unrecognized tags, but unknown selectors must deserialize to
// `Unknown` and keep rendering.
impl Serialize for LightnessMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for LightnessMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}
