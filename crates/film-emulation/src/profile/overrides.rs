//! Per-run settings that sit on top of a profile.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chemistry::print::NEUTRAL_TEMPERATURE;

/// Which curve set a run applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveMode {
    /// Per-channel color curves only.
    Color,
    /// The advanced (hue-indexed) curve only; an error if the profile has none.
    Advanced,
    /// Color curves, then the advanced curve when present.
    Both,
    /// The advanced curve if present, else the color curves.
    #[default]
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown curve mode {0:?} (expected color, advanced, both or auto)")]
pub struct ParseCurveModeError(String);

impl FromStr for CurveMode {
    type Err = ParseCurveModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "color" => Ok(CurveMode::Color),
            "advanced" => Ok(CurveMode::Advanced),
            "both" => Ok(CurveMode::Both),
            "auto" => Ok(CurveMode::Auto),
            _ => Err(ParseCurveModeError(s.to_string())),
        }
    }
}

impl fmt::Display for CurveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurveMode::Color => "color",
            CurveMode::Advanced => "advanced",
            CurveMode::Both => "both",
            CurveMode::Auto => "auto",
        };
        f.write_str(name)
    }
}

/// Overrides for one invocation. Profiles are never mutated; these values
/// replace the profile's own for the run only.
///
/// ```
/// use film_emulation::{CurveMode, RunOverrides};
///
/// let overrides = RunOverrides::default()
///     .color_temp(7200.0)
///     .curve_mode(CurveMode::Color)
///     .seed(42);
/// assert_eq!(overrides.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RunOverrides {
    /// Replaces the profile's chromatic aberration strength.
    pub chroma: Option<f32>,
    /// Replaces the profile's blur radius.
    pub blur: Option<f32>,
    /// Color temperature in Kelvin (6500 = neutral).
    pub color_temp: f32,
    pub cross_process: bool,
    pub curve_mode: CurveMode,
    /// Add a random light leak as the last stage.
    pub light_leak: bool,
    /// Seed for grain and light leaks; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for RunOverrides {
    fn default() -> Self {
        Self {
            chroma: None,
            blur: None,
            color_temp: NEUTRAL_TEMPERATURE,
            cross_process: false,
            curve_mode: CurveMode::Auto,
            light_leak: false,
            seed: None,
        }
    }
}

impl RunOverrides {
    pub fn chroma(mut self, strength: f32) -> Self {
        self.chroma = Some(strength);
        self
    }

    pub fn blur(mut self, radius: f32) -> Self {
        self.blur = Some(radius);
        self
    }

    pub fn color_temp(mut self, kelvin: f32) -> Self {
        self.color_temp = kelvin;
        self
    }

    pub fn cross_process(mut self, enabled: bool) -> Self {
        self.cross_process = enabled;
        self
    }

    pub fn curve_mode(mut self, mode: CurveMode) -> Self {
        self.curve_mode = mode;
        self
    }

    pub fn light_leak(mut self, enabled: bool) -> Self {
        self.light_leak = enabled;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_mode_parse_and_display() {
        for mode in [
            CurveMode::Color,
            CurveMode::Advanced,
            CurveMode::Both,
            CurveMode::Auto,
        ] {
            assert_eq!(mode.to_string().parse::<CurveMode>().unwrap(), mode);
        }
        assert_eq!(" Both ".parse::<CurveMode>().unwrap(), CurveMode::Both);
        assert_eq!(
            "sepia".parse::<CurveMode>().unwrap_err().to_string(),
            "unknown curve mode \"sepia\" (expected color, advanced, both or auto)"
        );
    }

    #[test]
    fn test_curve_mode_serde() {
        let mode: CurveMode = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(mode, CurveMode::Advanced);
        assert_eq!(serde_json::to_string(&CurveMode::Auto).unwrap(), "\"auto\"");
    }

    #[test]
    fn test_defaults() {
        let overrides = RunOverrides::default();
        assert_eq!(overrides.color_temp, 6500.0);
        assert_eq!(overrides.curve_mode, CurveMode::Auto);
        assert!(!overrides.cross_process && !overrides.light_leak);
        assert_eq!(overrides.chroma, None);
    }
}
