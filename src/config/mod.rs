//! Configuration management for Flipswitch.
//!
//! Settings are read from `config.toml` in the platform configuration
//! directory (e.g. `~/.config/flipswitch/config.toml` on Linux). A missing
//! file is not an error; defaults are used instead.

mod settings;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::cli::Args;

pub use settings::{Settings, DEFAULT_PROMPT};

/// Name of the configuration file.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// The configuration file could not be read.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    /// The configuration file is not valid TOML for [`Config`].
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but holds invalid values.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The full application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Prompt and display settings.
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns the default configuration if the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Resolve the configuration for a run from the command line.
    ///
    /// An explicit `--config` file must load cleanly. Without one, the
    /// default location is tried and any failure falls back to defaults.
    /// Command-line overrides are applied last.
    pub fn for_args(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load_from(path)?,
            None => Self::load().unwrap_or_else(|e| {
                warn!("Failed to load config, using default: {}", e);
                Self::default()
            }),
        };
        config.settings.apply_args(args);
        Ok(config)
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Unlike [`Config::load`], a missing file is reported as
    /// `ConfigError::ReadError`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Path of the default configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("flipswitch").join(CONFIG_FILE_NAME))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.settings.prompt.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "prompt cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
