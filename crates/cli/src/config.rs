use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use title_warden_core::config::{read_toml_file, TitleRulesConfig};
use tracing::{debug, info};

use crate::errors::CliError;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = ".title-warden.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Configuration for the Title Warden CLI
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Rules for title validation
    #[serde(default)]
    pub rules: TitleRulesConfig,

    /// Where node display names come from
    #[serde(default)]
    pub display_names: DisplayNamesConfig,
}

impl AppConfig {
    /// Load configuration from the specified file
    ///
    /// The `[rules]` table goes through the same schema version gate as a
    /// standalone rules file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        debug!("Loading configuration from {:?}", path);

        let config: AppConfig = read_toml_file(path)?;
        config.rules.check_schema_version()?;

        Ok(config)
    }

    /// Loads the configuration at `path`, or the defaults when no path was
    /// given and the default file does not exist.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, CliError> {
        let config_path = get_config_path(path);
        if path.is_none() && !config_path.exists() {
            debug!("No configuration file found, using defaults");
            return Ok(Self::default());
        }

        Self::load(&config_path)
    }

    /// Save configuration to the specified file
    pub fn save(&self, path: &Path) -> Result<(), CliError> {
        debug!("Saving configuration to {:?}", path);

        let content = toml::to_string_pretty(self).map_err(|e| {
            CliError::ConfigError(format!("Failed to serialize configuration: {}", e))
        })?;

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CliError::ConfigError(format!("Failed to create directory: {}", e))
            })?;
        }

        fs::write(path, content).map_err(|e| {
            CliError::ConfigError(format!("Failed to write configuration file: {}", e))
        })?;

        info!("Configuration saved to {:?}", path);
        Ok(())
    }
}

/// Sources of node display names. At most one should be set.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayNamesConfig {
    /// Path to a JSON file holding an array of display names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Shell command that prints a JSON array of display names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// Get the path to the configuration file
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        // Look for config in current directory
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}
