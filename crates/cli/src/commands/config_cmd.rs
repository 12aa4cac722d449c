use clap::Subcommand;
use title_warden_core::provider::DisplayNameProvider;
use title_warden_core::TitleWarden;
use tracing::debug;

use crate::config::{get_config_path, AppConfig};
use crate::errors::CliError;
use crate::providers::select_provider;

#[cfg(test)]
#[path = "config_cmd_tests.rs"]
mod tests;

/// Subcommands for the config command
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Create initial configuration file
    Init {
        /// Path to save the configuration file
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Check configuration syntax and rules
    Validate {
        /// Path to the configuration file
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Show the effective configuration
    Show {
        /// Path to the configuration file
        #[arg(short, long)]
        path: Option<String>,
    },
}

/// Execute the config command
pub async fn execute(cmd: ConfigCommands) -> Result<(), CliError> {
    match cmd {
        ConfigCommands::Init { path, force } => init_config(path.as_deref(), force),
        ConfigCommands::Validate { path } => validate_config(path.as_deref()).await,
        ConfigCommands::Show { path } => show_config(path.as_deref()),
    }
}

/// Initialize a new configuration file
fn init_config(path: Option<&str>, force: bool) -> Result<(), CliError> {
    let config_path = get_config_path(path);
    debug!("Initializing configuration at {:?}", config_path);

    if config_path.exists() && !force {
        return Err(CliError::ConfigError(format!(
            "Configuration file already exists at {:?}",
            config_path
        )));
    }

    let config = AppConfig::default();
    config.save(&config_path)?;

    println!("Configuration initialized at {:?}", config_path);
    Ok(())
}

/// Validate a configuration file
///
/// Also fetches the display names once when a source is configured, so that a
/// broken source is reported here instead of silently degrading checks.
async fn validate_config(path: Option<&str>) -> Result<(), CliError> {
    let config_path = get_config_path(path);
    debug!("Validating configuration at {:?}", config_path);

    let config = AppConfig::load(&config_path)?;
    TitleWarden::from_config(&config.rules)?;

    let provider = select_provider(None, None, &config.display_names)?;
    let names = provider.display_names().await?;
    debug!(count = names.len(), "Display name source is usable");

    println!("Configuration is valid");
    Ok(())
}

/// Print the configuration that a check would use
fn show_config(path: Option<&str>) -> Result<(), CliError> {
    let config = AppConfig::load_or_default(path)?;

    let config_str = toml::to_string_pretty(&config).map_err(|e| {
        CliError::ConfigError(format!("Failed to serialize configuration: {}", e))
    })?;
    println!("{}", config_str);

    Ok(())
}
