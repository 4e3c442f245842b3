//! Application configuration loaded from a TOML file

use crate::error::{ConfigError, ConfigResult};
use crate::format::{DeliveryFormat, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "encomendas";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "encomendas.log";

/// User-tunable settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name of a built-in theme
    pub theme: String,

    /// Event poll timeout of the main loop, in milliseconds
    pub tick_rate_ms: u64,

    /// strftime pattern for delivery dates
    pub date_format: String,

    /// strftime pattern for delivery times
    pub time_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default().name,
            tick_rate_ms: 250,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl AppConfig {
    /// Default location of the configuration file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Default location of the log file
    pub fn default_log_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR)
            .join(LOG_FILE)
    }

    /// Load configuration from `path`; a missing file yields the defaults
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that the theme exists and the formats render
    pub fn validate(&self) -> ConfigResult<()> {
        self.resolve_theme()?;
        self.delivery_format()?;
        Ok(())
    }

    pub fn resolve_theme(&self) -> ConfigResult<Theme> {
        Theme::by_name(&self.theme)
    }

    pub fn delivery_format(&self) -> ConfigResult<DeliveryFormat> {
        DeliveryFormat::new(&self.date_format, &self.time_format)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}
