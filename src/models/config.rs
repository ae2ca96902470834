use crate::assets::AssetLoader;
use film_emulation::CurveMode;
use serde::Deserialize;
use std::path::PathBuf;

/// Tool configuration loaded from config.yaml
///
/// Every field is optional; command line flags take precedence.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Output directory (default: next to the input image)
    pub output_dir: Option<PathBuf>,

    /// JPEG quality for written images, 1-100
    pub jpeg_quality: u8,

    /// Render profiles concurrently
    pub parallel: bool,

    /// Worker threads for parallel runs (default: rayon's choice)
    pub jobs: Option<usize>,

    /// Batch seed (default: entropy)
    pub seed: Option<u64>,

    /// Color temperature in Kelvin
    pub color_temp: f32,

    /// Which curve set to apply
    pub curve_mode: CurveMode,

    /// Profile set replacing the embedded stocks
    pub profiles: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            jpeg_quality: 95,
            parallel: false,
            jobs: None,
            seed: None,
            color_temp: 6500.0,
            curve_mode: CurveMode::Auto,
            profiles: None,
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text. A file holding only comments
    /// yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let has_content = content.lines().any(|line| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        });
        if !has_content {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::debug!(
                        quality = config.jpeg_quality,
                        parallel = config.parallel,
                        curve_mode = %config.curve_mode,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
