//! Configuration file support for theme-builder
//!
//! Handles `theme-builder.toml` loading and saving. Every path the build
//! touches comes from here; nothing is derived from the executable's own
//! location.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "theme-builder.toml";

/// Contents of `theme-builder.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Theme source document (.json or .toml)
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Directory the rendered theme is written into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Output file name without the `.json` extension
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            output_dir: default_output_dir(),
            file_name: default_file_name(),
        }
    }
}

fn default_source() -> PathBuf {
    PathBuf::from("src/theme.source.json")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("themes")
}

fn default_file_name() -> String {
    "hate-of-nature-color-theme".to_string()
}

/// Concrete paths for a single build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub file_name: String,
}

impl BuildConfig {
    /// Full path of the rendered theme file
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.json", self.file_name))
    }
}

impl Config {
    /// Load configuration file (returns default if not found)
    ///
    /// Searches for `theme-builder.toml` in the current directory.
    pub fn load() -> Result<Self> {
        let config_path = PathBuf::from(CONFIG_FILE_NAME);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from specified path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Load and resolve the build paths
    ///
    /// With an explicit config file, relative paths are taken from the
    /// directory holding that file. Otherwise `theme-builder.toml` in the
    /// current directory is used if present, and paths stay relative to the
    /// current directory.
    pub fn load_build_config(explicit: Option<&Path>) -> Result<BuildConfig> {
        match explicit {
            Some(path) => {
                let config = Self::load_from(path)?;
                let base = path.parent().unwrap_or_else(|| Path::new(""));
                Ok(config.resolve(base))
            }
            None => Ok(Self::load()?.resolve(Path::new(""))),
        }
    }

    /// Resolve relative paths against `base`
    pub fn resolve(&self, base: &Path) -> BuildConfig {
        BuildConfig {
            source: base.join(&self.source),
            output_dir: base.join(&self.output_dir),
            file_name: self.file_name.clone(),
        }
    }

    /// Save configuration to specified path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default(path: &Path) -> Result<()> {
        let config = Config::default();
        config.save_to(path)
    }
}
