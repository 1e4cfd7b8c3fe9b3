use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::SiteConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl SiteConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/studio-site/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("studio-site").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `SiteConfig::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(SiteConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: SiteConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Timer intervals are non-zero
    /// - The reveal threshold is a ratio
    /// - The header hides no earlier than it turns "scrolled"
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "carousel.interval_ms must be greater than zero".to_string(),
            });
        }

        if self.scroll.frame_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "scroll.frame_ms must be greater than zero".to_string(),
            });
        }

        let threshold = self.scroll.reveal_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "scroll.reveal_threshold must be within 0.0..=1.0, got {}",
                    threshold
                ),
            });
        }

        if self.scroll.header_hide_px < self.scroll.header_scrolled_px {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "scroll.header_hide_px ({}) is below scroll.header_scrolled_px ({})",
                    self.scroll.header_hide_px, self.scroll.header_scrolled_px
                ),
            });
        }

        Ok(())
    }
}
