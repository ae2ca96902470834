//! Serialized shape of a profile, as it appears in a profile set file.
//!
//! Every optional field has a serde default that makes its stage a no-op.
//! Range checks happen later in [`FilmProfile::from_record`](super::FilmProfile::from_record).

use serde::{Deserialize, Serialize};

use crate::color::Srgb;

fn one() -> f64 {
    1.0
}

fn default_grain_size() -> i64 {
    1
}

fn default_halation_threshold() -> f64 {
    0.7
}

/// One profile entry in a profile set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub color_curves: ColorCurvesRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_curve: Option<AdvancedCurveRecord>,
    #[serde(default = "one")]
    pub contrast: f64,
    #[serde(default = "one")]
    pub saturation: f64,
    #[serde(default)]
    pub chromatic_aberration: f64,
    #[serde(default)]
    pub blur: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color: Option<ColorLiteral>,
    #[serde(default)]
    pub grain_amount: f64,
    #[serde(default = "default_grain_size")]
    pub grain_size: i64,
    #[serde(default)]
    pub halation_strength: f64,
    #[serde(default = "default_halation_threshold")]
    pub halation_threshold: f64,
    #[serde(default)]
    pub vignette_strength: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_tint: Option<ColorLiteral>,
    #[serde(default)]
    pub highlight_rolloff: f64,
    #[serde(default)]
    pub color_bleed: f64,
}

/// Control points of one curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRecord {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl CurveRecord {
    /// The diagonal through `(0, 0)` and `(1, 1)`.
    pub fn identity() -> Self {
        Self {
            x: vec![0.0, 1.0],
            y: vec![0.0, 1.0],
        }
    }
}

/// Per-channel curves, keyed `R`, `G`, `B`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorCurvesRecord {
    #[serde(rename = "R")]
    pub red: CurveRecord,
    #[serde(rename = "G")]
    pub green: CurveRecord,
    #[serde(rename = "B")]
    pub blue: CurveRecord,
}

impl ColorCurvesRecord {
    pub fn identity() -> Self {
        Self {
            red: CurveRecord::identity(),
            green: CurveRecord::identity(),
            blue: CurveRecord::identity(),
        }
    }
}

/// Hue anchors (degrees) with optional per-anchor adjustments.
///
/// ```json
/// { "hue": [0, 120, 240], "saturation": [1.1, 1.0, 0.9], "hue_shift": [0, 5, 0] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedCurveRecord {
    pub hue: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue_shift: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<f64>>,
}

/// An RGB color written as `[r, g, b]` (0..=255) or a hex string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorLiteral {
    Triple([i64; 3]),
    Hex(String),
}

impl ColorLiteral {
    /// Resolve to 8-bit channel values.
    pub fn to_bytes(&self) -> Result<[u8; 3], String> {
        match self {
            ColorLiteral::Triple(channels) => {
                let mut bytes = [0u8; 3];
                for (out, &c) in bytes.iter_mut().zip(channels) {
                    *out = u8::try_from(c)
                        .map_err(|_| format!("channel value {c} is outside 0..=255"))?;
                }
                Ok(bytes)
            }
            ColorLiteral::Hex(hex) => hex
                .parse::<Srgb>()
                .map(Srgb::to_bytes)
                .map_err(|err| format!("{hex:?}: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_gets_defaults() {
        let json = r#"{
            "color_curves": {
                "R": {"x": [0, 1], "y": [0, 1]},
                "G": {"x": [0, 1], "y": [0, 1]},
                "B": {"x": [0, 1], "y": [0, 1]}
            }
        }"#;
        let record: ProfileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.contrast, 1.0);
        assert_eq!(record.saturation, 1.0);
        assert_eq!(record.grain_size, 1);
        assert_eq!(record.halation_threshold, 0.7);
        assert_eq!(record.base_color, None);
        assert_eq!(record.advanced_curve, None);
        assert_eq!(record.color_curves, ColorCurvesRecord::identity());
    }

    #[test]
    fn test_missing_color_curves_is_rejected() {
        let err = serde_json::from_str::<ProfileRecord>(r#"{"contrast": 1.2}"#).unwrap_err();
        assert!(err.to_string().contains("color_curves"));
    }

    #[test]
    fn test_color_literals() {
        let triple: ColorLiteral = serde_json::from_str("[255, 240, 200]").unwrap();
        assert_eq!(triple.to_bytes().unwrap(), [255, 240, 200]);

        let hex: ColorLiteral = serde_json::from_str(r##""#FFF0C8""##).unwrap();
        assert_eq!(hex.to_bytes().unwrap(), [255, 240, 200]);

        let bad = ColorLiteral::Triple([0, 300, 0]);
        assert!(bad.to_bytes().unwrap_err().contains("300"));
        assert!(ColorLiteral::Hex("#12".into()).to_bytes().is_err());
    }

    #[test]
    fn test_advanced_curve_record() {
        let json = r#"{"hue": [0, 180], "saturation": [1.2, 0.8]}"#;
        let record: AdvancedCurveRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.hue, vec![0.0, 180.0]);
        assert_eq!(record.saturation, Some(vec![1.2, 0.8]));
        assert_eq!(record.hue_shift, None);
    }
}
