//! Asset loading with embedded fallbacks
//!
//! Filmsim ships a default profile set and a default config inside the
//! binary. Either can be replaced by a file on disk:
//!
//! - If no path is configured: use the embedded asset only (no filesystem access)
//! - If a path is configured and exists: read it from the filesystem
//! - If a configured config path is missing: fall back to the embedded config
//!
//! A configured profile set that cannot be read is an error rather than a
//! silent fallback, since running the wrong stocks is worse than not running.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default assets (profile set and config)
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "profiles.json"]
#[include = "config.yaml"]
struct EmbeddedAssets;

const PROFILES_FILE: &str = "profiles.json";
const CONFIG_FILE: &str = "config.yaml";

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Profiles,
    Config,
}

impl AssetCategory {
    fn embedded_name(self) -> &'static str {
        match self {
            AssetCategory::Profiles => PROFILES_FILE,
            AssetCategory::Config => CONFIG_FILE,
        }
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// External profile set (from `--profiles`, config or FILMSIM_PROFILES)
    profiles_file: Option<PathBuf>,
    /// External config file (from `--config` or FILMSIM_CONFIG)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the user asked for them.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(profiles_file: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            profiles_file,
            config_file,
        }
    }

    /// Loader configured from the FILMSIM_PROFILES and FILMSIM_CONFIG env vars
    pub fn from_env() -> Self {
        Self::new(
            std::env::var_os("FILMSIM_PROFILES").map(PathBuf::from),
            std::env::var_os("FILMSIM_CONFIG").map(PathBuf::from),
        )
    }

    /// Replace the profile set path, keeping the config path
    pub fn profiles_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.profiles_file = path;
        }
        self
    }

    /// Replace the config path, keeping the profile set path
    pub fn config_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.config_file = path;
        }
        self
    }

    /// The configured external profile set, if any
    pub fn profiles_path(&self) -> Option<&Path> {
        self.profiles_file.as_deref()
    }

    /// The configured external config file, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Read the profile set JSON
    ///
    /// A configured path is read from the filesystem; otherwise the
    /// embedded profile set is used.
    pub fn read_profiles(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.profiles_file {
            tracing::trace!(path = %path.display(), "Loading profiles from filesystem");
            return Ok(Cow::Owned(fs::read(path)?));
        }

        Self::embedded(AssetCategory::Profiles).map(|data| {
            tracing::trace!("Loading profiles from embedded assets");
            data
        })
    }

    /// Read the profile set as a UTF-8 string
    pub fn read_profiles_string(&self) -> io::Result<String> {
        into_string(self.read_profiles()?)
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
            tracing::warn!(path = %path.display(), "Config file not found, using embedded default");
        }

        Self::embedded(AssetCategory::Config).map(|data| {
            tracing::trace!("Loading config from embedded assets");
            data
        })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        into_string(self.read_config()?)
    }

    fn embedded(category: AssetCategory) -> io::Result<Cow<'static, [u8]>> {
        let name = category.embedded_name();
        EmbeddedAssets::get(name).map(|f| f.data).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("Embedded {name} not found"),
            )
        })
    }

    /// Extract embedded assets to the filesystem (init command)
    ///
    /// Files land at the configured paths, or in `dir` under their embedded
    /// names when no path is configured. Existing files are skipped unless
    /// `force` is set.
    pub fn init(
        &self,
        dir: &Path,
        categories: &[AssetCategory],
        force: bool,
    ) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for &category in categories {
            let configured = match category {
                AssetCategory::Profiles => self.profiles_file.clone(),
                AssetCategory::Config => self.config_file.clone(),
            };
            let path = configured.unwrap_or_else(|| dir.join(category.embedded_name()));

            if !force && path.exists() {
                report.skipped.push(path.display().to_string());
                continue;
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let data = Self::embedded(category)?;
            fs::write(&path, &*data)?;
            tracing::info!(path = %path.display(), "Extracted embedded asset");
            report.written.push(path.display().to_string());
        }

        Ok(report)
    }

    /// List embedded assets (for display)
    pub fn list_embedded() -> Vec<String> {
        let mut names: Vec<String> = EmbeddedAssets::iter().map(|s| s.to_string()).collect();
        names.sort();
        names
    }
}

fn into_string(bytes: Cow<'static, [u8]>) -> io::Result<String> {
    String::from_utf8(bytes.into_owned()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_assets_present() {
        assert_eq!(
            AssetLoader::list_embedded(),
            vec!["config.yaml".to_string(), "profiles.json".to_string()]
        );
    }

    #[test]
    fn test_embedded_profiles_parse() {
        let loader = AssetLoader::default();
        let json = loader.read_profiles_string().unwrap();
        let set = film_emulation::ProfileSet::from_json_str(&json).unwrap();
        assert!(!set.is_empty());
        assert_eq!(set.valid_count(), set.len(), "every embedded stock must validate");
    }

    #[test]
    fn test_missing_config_falls_back_to_embedded() {
        let loader = AssetLoader::new(None, Some(PathBuf::from("/nonexistent/filmsim.yaml")));
        let content = loader.read_config_string().unwrap();
        assert!(content.contains("jpeg_quality"));
    }

    #[test]
    fn test_missing_profiles_file_is_an_error() {
        let loader = AssetLoader::new(Some(PathBuf::from("/nonexistent/profiles.json")), None);
        let err = loader.read_profiles().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_external_profiles_override_embedded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mine.json");
        fs::write(&path, "{}").unwrap();

        let loader = AssetLoader::new(Some(path), None);
        assert_eq!(loader.read_profiles_string().unwrap(), "{}");
    }

    #[test]
    fn test_builder_keeps_existing_path_on_none() {
        let loader = AssetLoader::new(Some(PathBuf::from("a.json")), None)
            .profiles_file(None)
            .config_file(Some(PathBuf::from("b.yaml")));
        assert_eq!(loader.profiles_path(), Some(Path::new("a.json")));
        assert_eq!(loader.config_path(), Some(Path::new("b.yaml")));
    }

    #[test]
    fn test_init_writes_then_skips() {
        let dir = TempDir::new().unwrap();
        let loader = AssetLoader::default();
        let categories = [AssetCategory::Profiles, AssetCategory::Config];

        let first = loader.init(dir.path(), &categories, false).unwrap();
        assert_eq!(first.written.len(), 2);
        assert!(first.skipped.is_empty());
        assert!(dir.path().join("profiles.json").exists());

        let second = loader.init(dir.path(), &categories, false).unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.skipped.len(), 2);

        let forced = loader.init(dir.path(), &categories, true).unwrap();
        assert_eq!(forced.written.len(), 2);
    }

    #[test]
    fn test_init_respects_configured_path() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested").join("stocks.json");
        let loader = AssetLoader::new(Some(target.clone()), None);

        let report = loader.init(dir.path(), &[AssetCategory::Profiles], false).unwrap();
        assert_eq!(report.written, vec![target.display().to_string()]);
        assert!(target.exists());
    }
}
