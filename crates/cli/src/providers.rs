//! Display name providers backed by the local machine.
//!
//! Both providers expect a JSON array of strings, e.g.
//! `["Action Network", "Mattermost"]`.

use std::path::PathBuf;

use async_trait::async_trait;
use title_warden_core::errors::ProviderError;
use title_warden_core::provider::{DisplayNameProvider, StaticDisplayNames};
use tokio::process::Command;
use tracing::{debug, instrument};

use crate::config::DisplayNamesConfig;
use crate::errors::CliError;

#[cfg(test)]
#[path = "providers_tests.rs"]
mod tests;

/// Reads display names from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileDisplayNames {
    path: PathBuf,
}

impl JsonFileDisplayNames {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DisplayNameProvider for JsonFileDisplayNames {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn display_names(&self) -> Result<Vec<String>, ProviderError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let names: Vec<String> = serde_json::from_str(&content)?;
        debug!(count = names.len(), "Read display names from file");
        Ok(names)
    }
}

/// Runs a shell command and reads display names from its standard output.
///
/// The command is run once per call; wrap it in
/// [`CachedDisplayNames`](title_warden_core::provider::CachedDisplayNames)
/// when validating several titles.
#[derive(Debug, Clone)]
pub struct CommandDisplayNames {
    command: String,
}

impl CommandDisplayNames {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn shell_command(&self) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&self.command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(&self.command);
            cmd
        }
    }
}

#[async_trait]
impl DisplayNameProvider for CommandDisplayNames {
    #[instrument(skip(self), fields(command = %self.command))]
    async fn display_names(&self) -> Result<Vec<String>, ProviderError> {
        let output = self.shell_command().output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ProviderError::CommandFailed(format!(
                "'{}' exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        let names: Vec<String> = serde_json::from_slice(&output.stdout)?;
        debug!(count = names.len(), "Read display names from command output");
        Ok(names)
    }
}

/// Picks the display name provider from the command line or the configuration.
///
/// Command line sources take precedence over the configuration. Without any
/// source no display names are known.
pub fn select_provider(
    names_file: Option<PathBuf>,
    names_command: Option<String>,
    config: &DisplayNamesConfig,
) -> Result<Box<dyn DisplayNameProvider>, CliError> {
    let (file, command) = if names_file.is_some() || names_command.is_some() {
        (names_file, names_command)
    } else {
        (config.file.clone(), config.command.clone())
    };

    match (file, command) {
        (Some(_), Some(_)) => Err(CliError::InvalidArguments(
            "Display names can come from a file or a command, not both".to_string(),
        )),
        (Some(path), None) => Ok(Box::new(JsonFileDisplayNames::new(path))),
        (None, Some(command)) => Ok(Box::new(CommandDisplayNames::new(command))),
        (None, None) => {
            debug!("No display name source configured");
            Ok(Box::new(StaticDisplayNames::default()))
        }
    }
}
