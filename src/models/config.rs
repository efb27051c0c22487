use crate::assets::AssetLoader;
use bead_quant::{FilterStyle, ScalePolicy, ToneOptions, DEFAULT_GRID_SIZE, MAX_SURFACE_SIZE};
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Grid size bounds and request defaults
    #[serde(default)]
    pub grid: GridConfig,

    /// Tone curve applied before color matching
    #[serde(default)]
    pub tone: ToneOptions,

    /// Largest accepted image upload in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

/// Grid defaults and the range of sizes a request may ask for
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GridConfig {
    pub default_size: u32,
    pub min_size: u32,
    pub max_size: u32,
    pub default_style: FilterStyle,
    pub default_scale: ScalePolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_GRID_SIZE,
            min_size: 5,
            max_size: 64,
            default_style: FilterStyle::None,
            default_scale: ScalePolicy::Contain,
        }
    }
}

impl GridConfig {
    /// Check that the bounds are usable and the default lies within them
    pub fn validate(&self) -> Result<(), String> {
        if self.min_size == 0 {
            return Err("grid.min_size must be at least 1".to_string());
        }
        if self.max_size > MAX_SURFACE_SIZE {
            return Err(format!(
                "grid.max_size ({}) exceeds the largest supported grid ({MAX_SURFACE_SIZE})",
                self.max_size
            ));
        }
        if self.min_size > self.max_size {
            return Err(format!(
                "grid.min_size ({}) is larger than grid.max_size ({})",
                self.min_size, self.max_size
            ));
        }
        if !(self.min_size..=self.max_size).contains(&self.default_size) {
            return Err(format!(
                "grid.default_size ({}) is outside {}..={}",
                self.default_size, self.min_size, self.max_size
            ));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.grid.validate().map_err(anyhow::Error::msg)?;
        Ok(config)
    }

    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        default_size = config.grid.default_size,
                        min_size = config.grid.min_size,
                        max_size = config.grid.max_size,
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

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            tone: ToneOptions::default(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}
