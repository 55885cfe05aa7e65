use crate::Complex;
use serde::{Deserialize, Serialize};

fn default_param1() -> f64 {
    1.0
}

/// Scalar parameters threaded into every function evaluation.
///
/// The built-in power map reads them as two complex values: the exponent
/// `param1 + param2·i` and the offset `param3 + param4·i`. Host-supplied
/// functions are free to interpret them however they like.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderParameters {
    #[serde(default = "default_param1")]
    pub param1: f64,
    #[serde(default)]
    pub param2: f64,
    #[serde(default)]
    pub param3: f64,
    #[serde(default)]
    pub param4: f64,
}

impl RenderParameters {
    pub fn new(param1: f64, param2: f64, param3: f64, param4: f64) -> Self {
        Self {
            param1,
            param2,
            param3,
            param4,
        }
    }

    /// Exponent of the built-in power map: param1 + param2·i.
    pub fn exponent(&self) -> Complex {
        Complex::new(self.param1, self.param2)
    }

    /// Additive offset of the built-in power map: param3 + param4·i.
    pub fn offset(&self) -> Complex {
        Complex::new(self.param3, self.param4)
    }

    /// True when all four parameters are finite.
    pub fn is_finite(&self) -> bool {
        self.param1.is_finite()
            && self.param2.is_finite()
            && self.param3.is_finite()
            && self.param4.is_finite()
    }
}

impl Default for RenderParameters {
    /// The identity map: z^1 + 0.
    fn default() -> Self {
        Self {
            param1: 1.0,
            param2: 0.0,
            param3: 0.0,
            param4: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_the_identity_map() {
        let params = RenderParameters::default();
        assert_eq!(params.exponent(), Complex::new(1.0, 0.0));
        assert_eq!(params.offset(), Complex::ZERO);
        assert!(params.is_finite());
    }

    #[test]
    fn test_complex_views() {
        let params = RenderParameters::new(2.0, -1.0, 0.5, 0.25);
        assert_eq!(params.exponent(), Complex::new(2.0, -1.0));
        assert_eq!(params.offset(), Complex::new(0.5, 0.25));
    }

    #[test]
    fn test_is_finite_rejects_nan_and_infinity() {
        assert!(!RenderParameters::new(f64::NAN, 0.0, 0.0, 0.0).is_finite());
        assert!(!RenderParameters::new(1.0, 0.0, f64::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_empty_json_deserializes_to_defaults() {
        let params: RenderParameters = serde_json::from_str("{}").unwrap();
        assert_eq!(params, RenderParameters::default());
    }

    #[test]
    fn test_partial_json_keeps_remaining_defaults() {
        let params: RenderParameters = serde_json::from_str(r#"{"param2": 3.0}"#).unwrap();
        assert_eq!(params.param1, 1.0);
        assert_eq!(params.param2, 3.0);
        assert_eq!(params.param3, 0.0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let params = RenderParameters::new(2.0, 0.5, -1.0, 0.0);
        let json = serde_json::to_string(&params).unwrap();
        let back: RenderParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }
}
