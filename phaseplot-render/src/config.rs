//! Render configuration: the host-owned snapshot a render pass consumes.

use crate::{ColorSpace, LightnessMode};
use phaseplot_core::{PlaneWindow, RenderParameters};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected configuration updates.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid window: {0}")]
    InvalidWindow(String),
    #[error("non-finite render parameters: {0}")]
    NonFiniteParameters(String),
}

/// Everything a render pass reads, in one consistent snapshot.
///
/// Hosts mutate a config between passes and lend it to `render_frame` by
/// shared reference, so a pass can never observe a half-applied update.
/// Every field has a default and deserializes independently; a partial
/// JSON document (or `{}`) yields a renderable config.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub window: PlaneWindow,
    #[serde(default)]
    pub params: RenderParameters,
    #[serde(default)]
    pub mode: LightnessMode,
    #[serde(default)]
    pub color_space: ColorSpace,
}

impl RenderConfig {
    /// Validate a config at update time, before any pass runs with it.
    ///
    /// A degenerate window would collapse the pixel mapping and
    /// non-finite parameters would poison every sample of the frame,
    /// so both are rejected here instead of surfacing mid-render.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.window.is_valid() {
            return Err(ConfigError::InvalidWindow(self.window.to_string()));
        }
        if !self.params.is_finite() {
            return Err(ConfigError::NonFiniteParameters(format!(
                "({}, {}, {}, {})",
                self.params.param1, self.params.param2, self.params.param3, self.params.param4
            )));
        }
        Ok(())
    }

    /// One-line status summary for host display.
    pub fn summary(&self) -> String {
        format!(
            "Range: {} | Param1: {:.2}, Param2: {:.2}",
            self.window, self.params.param1, self.params.param2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mode, LightnessMode::Arctan);
        assert_eq!(config.color_space, ColorSpace::Perceptual);
        assert_eq!(config.window, PlaneWindow::default());
    }

    #[test]
    fn test_validate_rejects_degenerate_windows() {
        let mut config = RenderConfig::default();
        config.window.x_max = config.window.x_min;
        match config.validate() {
            Err(ConfigError::InvalidWindow(detail)) => {
                assert!(detail.contains("x: [-5, -5]"), "detail = {detail}")
            }
            other => panic!("expected InvalidWindow, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_non_finite_parameters() {
        let mut config = RenderConfig::default();
        config.params.param3 = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteParameters(_))
        ));
    }

    #[test]
    fn test_summary_matches_the_status_line_format() {
        let config = RenderConfig::default();
        assert_eq!(
            config.summary(),
            "Range: x: [-5, 5], y: [-5, 5] | Param1: 1.00, Param2: 0.00"
        );
    }

    #[test]
    fn test_empty_json_yields_the_default_config() {
        let config: RenderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RenderConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_with_unknown_mode_tag() {
        let json = r#"{"mode": "sqrt", "params": {"param1": 3.0}}"#;
        let config: RenderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mode, LightnessMode::Unknown);
        assert_eq!(config.params.param1, 3.0);
        assert_eq!(config.params.param2, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = RenderConfig {
            window: PlaneWindow::new(-2.0, 2.0, -1.0, 1.0).unwrap(),
            params: RenderParameters::new(3.0, 0.5, 0.0, -1.0),
            mode: LightnessMode::N3,
            color_space: ColorSpace::HueWheel,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
