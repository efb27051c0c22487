//! Asset loading with embedded fallbacks
//!
//! The bead palette and the default config ship inside the binary. Either can
//! be replaced by an external file:
//!
//! - If the env var is NOT set: use the embedded asset only (no filesystem access)
//! - If the env var IS set and the file exists: read the file
//! - If the env var IS set but the file is missing: fall back to the embedded asset

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default assets (palette and config)
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "palette.json"]
#[include = "config.yaml"]
struct EmbeddedAssets;

const PALETTE_ASSET: &str = "palette.json";
const CONFIG_ASSET: &str = "config.yaml";

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Palette,
    Config,
}

impl AssetCategory {
    fn embedded_name(self) -> &'static str {
        match self {
            AssetCategory::Palette => PALETTE_ASSET,
            AssetCategory::Config => CONFIG_ASSET,
        }
    }
}

/// Where an asset is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Embedded,
    /// Configured external file that exists
    File(PathBuf),
    /// Configured external file that does not exist (embedded is used)
    Missing(PathBuf),
}

impl std::fmt::Display for AssetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetSource::Embedded => f.write_str("embedded"),
            AssetSource::File(path) => write!(f, "{}", path.display()),
            AssetSource::Missing(path) => {
                write!(f, "embedded ({} not found)", path.display())
            }
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
    /// External palette file (from PALETTE_FILE env var)
    palette_file: Option<PathBuf>,
    /// External config file (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(palette_file: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            palette_file,
            config_file,
        }
    }

    /// Create a loader from `PALETTE_FILE` and `CONFIG_FILE`
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("PALETTE_FILE").ok().map(PathBuf::from),
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
        )
    }

    fn external_path(&self, category: AssetCategory) -> Option<&Path> {
        match category {
            AssetCategory::Palette => self.palette_file.as_deref(),
            AssetCategory::Config => self.config_file.as_deref(),
        }
    }

    /// Where `category` will be read from
    pub fn source(&self, category: AssetCategory) -> AssetSource {
        match self.external_path(category) {
            Some(path) if path.exists() => AssetSource::File(path.to_path_buf()),
            Some(path) => AssetSource::Missing(path.to_path_buf()),
            None => AssetSource::Embedded,
        }
    }

    /// Read an asset, preferring the external file when configured and present
    pub fn read(&self, category: AssetCategory) -> io::Result<Cow<'static, [u8]>> {
        if let Some(path) = self.external_path(category) {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading asset from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
            tracing::debug!(path = %path.display(), "Configured asset missing, using embedded");
        }

        let name = category.embedded_name();
        EmbeddedAssets::get(name)
            .map(|f| {
                tracing::trace!(asset = name, "Loading asset from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("Embedded {name} not found"))
            })
    }

    fn read_string(&self, category: AssetCategory) -> io::Result<String> {
        let bytes = self.read(category)?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Read the palette JSON as a UTF-8 string
    pub fn read_palette_string(&self) -> io::Result<String> {
        self.read_string(AssetCategory::Palette)
    }

    /// Read the config YAML as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        self.read_string(AssetCategory::Config)
    }

    /// Extract embedded assets to filesystem (init command)
    ///
    /// Uses the configured paths, or `./palette.json` and `./config.yaml`.
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for &category in categories {
            let name = category.embedded_name();
            let path = self
                .external_path(category)
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".").join(name));

            if !force && path.exists() {
                report.skipped.push(path.display().to_string());
                continue;
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            if let Some(data) = EmbeddedAssets::get(name) {
                fs::write(&path, &*data.data)?;
                report.written.push(path.display().to_string());
            }
        }

        Ok(report)
    }

    /// List embedded assets by category (for display)
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        EmbeddedAssets::iter()
            .filter(|f| *f == category.embedded_name())
            .map(|f| f.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_assets_present() {
        let loader = AssetLoader::default();
        let palette = loader.read_palette_string().unwrap();
        assert!(palette.contains("\"MARD\""));
        let config = loader.read_config_string().unwrap();
        assert!(config.contains("default_size"));
    }

    #[test]
    fn test_external_file_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("palette.json");
        fs::write(&path, r##"{"#123456": {"MARD": "Z1"}}"##).unwrap();

        let loader = AssetLoader::new(Some(path.clone()), None);
        assert_eq!(loader.source(AssetCategory::Palette), AssetSource::File(path));
        assert!(loader.read_palette_string().unwrap().contains("Z1"));
        assert_eq!(loader.source(AssetCategory::Config), AssetSource::Embedded);
    }

    #[test]
    fn test_missing_external_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.yaml");

        let loader = AssetLoader::new(None, Some(path.clone()));
        assert_eq!(loader.source(AssetCategory::Config), AssetSource::Missing(path));
        assert!(loader.read_config_string().unwrap().contains("max_size"));
    }

    #[test]
    fn test_init_writes_then_skips() {
        let dir = TempDir::new().unwrap();
        let palette = dir.path().join("sub/palette.json");
        let config = dir.path().join("config.yaml");
        let loader = AssetLoader::new(Some(palette.clone()), Some(config.clone()));
        let all = [AssetCategory::Palette, AssetCategory::Config];

        let report = loader.init(&all, false).unwrap();
        assert_eq!(report.written.len(), 2);
        assert!(palette.exists());
        assert!(config.exists());

        let report = loader.init(&all, false).unwrap();
        assert!(report.written.is_empty());
        assert_eq!(report.skipped.len(), 2);

        let report = loader.init(&[AssetCategory::Config], true).unwrap();
        assert_eq!(report.written.len(), 1);
    }

    #[test]
    fn test_list_embedded() {
        assert_eq!(AssetLoader::list_embedded(AssetCategory::Palette), vec!["palette.json"]);
        assert_eq!(AssetLoader::list_embedded(AssetCategory::Config), vec!["config.yaml"]);
    }
}
