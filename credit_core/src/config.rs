//! Configuration file support for the credit tracker.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/credits/config.toml`.

use crate::{Error, RequirementMode, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the catalog, requirement files and student records
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Source file names, relative to the data directory
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,

    #[serde(default = "default_graduation_requirements")]
    pub graduation_requirements: PathBuf,

    #[serde(default = "default_promotion_requirements")]
    pub promotion_requirements: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            graduation_requirements: default_graduation_requirements(),
            promotion_requirements: default_promotion_requirements(),
        }
    }
}

/// Report presentation options
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportConfig {
    /// List courses not yet taken under each category
    #[serde(default = "default_show_untaken")]
    pub show_untaken: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_untaken: default_show_untaken(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_catalog() -> PathBuf {
    PathBuf::from("courses.txt")
}

fn default_graduation_requirements() -> PathBuf {
    PathBuf::from("requirements1.txt")
}

fn default_promotion_requirements() -> PathBuf {
    PathBuf::from("requirements2.txt")
}

fn default_show_untaken() -> bool {
    true
}

impl FilesConfig {
    /// Requirement file for the given mode, before joining the data dir
    pub fn requirements_for(&self, mode: RequirementMode) -> &Path {
        match mode {
            RequirementMode::Promotion => self.promotion_requirements.as_path(),
            RequirementMode::Graduation => self.graduation_requirements.as_path(),
        }
    }
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let Some(config_path) = Self::default_config_path() else {
            tracing::info!("No config directory available, using defaults");
            return Ok(Self::default());
        };

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("credits").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Catalog file inside `data_dir`
    pub fn catalog_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.files.catalog)
    }

    /// Requirement file for `mode` inside `data_dir`
    pub fn requirements_path(&self, data_dir: &Path, mode: RequirementMode) -> PathBuf {
        data_dir.join(self.files.requirements_for(mode))
    }
}
