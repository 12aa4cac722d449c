use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Faults raised while setting up the validation engine.
///
/// A malformed title is never an error; it is reported as a list of
/// [`Issue`](crate::issues::Issue) values instead.
#[derive(Error, Debug)]
pub enum TitleWardenError {
    #[error("Invalid rule '{rule}': {reason}")]
    InvalidRule { rule: String, reason: String },

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Errors that can occur while loading a rule configuration file.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unsupported configuration schema version: {0}")]
    UnsupportedSchemaVersion(u32),
}

/// Errors reported by a [`DisplayNameProvider`](crate::provider::DisplayNameProvider).
///
/// These never escape validation: the engine logs them and carries on without
/// any known display names.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Display name command failed: {0}")]
    CommandFailed(String),

    #[error("Failed to read display names: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse display names: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Display names unavailable: {0}")]
    Unavailable(String),
}
