use thiserror::Error;
use title_warden_core::errors::{ConfigLoadError, ProviderError, TitleWardenError};

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid arguments
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The display name provider could not be set up
    #[error("Display name provider error: {0}")]
    ProviderError(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Other errors
    #[error("Error: {0}")]
    Other(String),
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(format!("{:#}", err))
    }
}

impl From<ConfigLoadError> for CliError {
    fn from(err: ConfigLoadError) -> Self {
        CliError::ConfigError(err.to_string())
    }
}

impl From<TitleWardenError> for CliError {
    fn from(err: TitleWardenError) -> Self {
        CliError::ConfigError(err.to_string())
    }
}

impl From<ProviderError> for CliError {
    fn from(err: ProviderError) -> Self {
        CliError::ProviderError(err.to_string())
    }
}

impl std::process::Termination for CliError {
    fn report(self) -> std::process::ExitCode {
        match self {
            CliError::ConfigError(_) => std::process::ExitCode::from(2),
            CliError::InvalidArguments(_) => std::process::ExitCode::from(5),
            CliError::ProviderError(_) => std::process::ExitCode::from(6),
            CliError::ValidationFailed(_) => std::process::ExitCode::from(1),
            CliError::Other(_) => std::process::ExitCode::FAILURE,
        }
    }
}
