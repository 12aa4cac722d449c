//! Configuration settings for the Title Warden rule catalog.
//!
//! This module centralizes the constants and the serializable rule settings
//! used throughout the crate, making it easier to modify behavior in one place.
//! The runtime form of these settings is [`TitleRules`](crate::rules::TitleRules).
use lazy_static::lazy_static;
use regex::Regex;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::ConfigLoadError;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// The only supported version of the rule configuration schema
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Default maximum edit distance for a "did you mean" scope suggestion
pub const DEFAULT_SUGGESTION_THRESHOLD: usize = 2;

/// Suffix that turns a node display name into a valid scope
pub const NODE_SUFFIX: &str = " Node";

/// Marker that excludes a pull request from the changelog
pub const NO_CHANGELOG: &str = "(no-changelog)";

/// Project prefix of ticket numbers that must not appear in a title
pub const TICKET_PREFIX: &str = "n8n";

/// Valid short scopes, in display order
pub const VALID_SHORT_SCOPES: [&str; 4] = ["API", "core", "editor", "benchmark"];

/// Valid PR types, in display order
pub const VALID_PR_TYPES: [&str; 9] = [
    "feat", "fix", "perf", "test", "docs", "refactor", "build", "ci", "chore",
];

/// Words ending in `ed` that are present tense
pub const PRESENT_TENSE_EXCEPTIONS: [&str; 14] = [
    "bleed", "breed", "embed", "exceed", "feed", "heed", "need", "proceed", "seed", "shed",
    "shred", "speed", "succeed", "weed",
];

/// Irregular past tense forms that do not end in `ed`
pub const IRREGULAR_PAST_TENSE: [&str; 40] = [
    "began", "bought", "broke", "brought", "built", "caught", "chose", "did", "drew", "drove",
    "fell", "felt", "fought", "forgot", "found", "gave", "got", "grew", "held", "hid", "kept",
    "knew", "lost", "made", "meant", "paid", "ran", "said", "sent", "sold", "spent", "spoke",
    "stood", "taught", "thought", "threw", "took", "understood", "went", "wrote",
];

lazy_static! {
    /// Pre-compiled regex splitting a title into type, scope, breaking marker and subject
    pub static ref CONVENTIONAL_SCHEMA_REGEX: Regex = Regex::new(
        r"(?P<type>[0-9A-Za-z_]+)(\((?P<scope>.*)\))?(?P<breaking>!)?: (?P<subject>.*)"
    ).expect("Failed to compile conventional schema regex");
}

/// Builds the case-insensitive ticket number pattern for a project prefix.
pub fn ticket_regex_pattern(prefix: &str) -> String {
    format!(r"(?i){}-\d{{3,5}}", regex::escape(prefix))
}

/// Rule catalog settings for title validation.
///
/// Every field has a default, so an empty TOML document deserializes to the
/// built-in rule set.
///
/// ```
/// use title_warden_core::config::TitleRulesConfig;
///
/// let config: TitleRulesConfig = toml::from_str("scopes = [\"core\", \"docs\"]").unwrap();
/// assert_eq!(config.scopes, vec!["core", "docs"]);
/// assert!(config.types.contains(&"feat".to_string()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TitleRulesConfig {
    #[serde(default = "TitleRulesConfig::default_schema_version", rename = "schemaVersion")]
    pub schema_version: u32,

    /// Allowed type tokens, in display order
    #[serde(default = "TitleRulesConfig::default_types")]
    pub types: Vec<String>,

    /// Allowed short scope tokens, in display order
    #[serde(default = "TitleRulesConfig::default_scopes")]
    pub scopes: Vec<String>,

    /// Suffix appended to a display name to form a scope
    #[serde(default = "TitleRulesConfig::default_node_suffix")]
    pub node_suffix: String,

    /// Project prefix of forbidden ticket numbers
    #[serde(default = "TitleRulesConfig::default_ticket_prefix")]
    pub ticket_prefix: String,

    /// Maximum edit distance for which a scope suggestion is offered
    #[serde(default = "TitleRulesConfig::default_suggestion_threshold")]
    pub suggestion_threshold: usize,

    /// Words ending in `ed` that must not be flagged as past tense
    #[serde(default = "TitleRulesConfig::default_present_tense_exceptions")]
    pub present_tense_exceptions: Vec<String>,

    /// Past tense words that must be flagged even though they do not end in `ed`
    #[serde(default = "TitleRulesConfig::default_irregular_past_tense")]
    pub irregular_past_tense: Vec<String>,
}

impl TitleRulesConfig {
    fn default_schema_version() -> u32 {
        CURRENT_SCHEMA_VERSION
    }

    fn default_types() -> Vec<String> {
        VALID_PR_TYPES.iter().map(|s| s.to_string()).collect()
    }

    fn default_scopes() -> Vec<String> {
        VALID_SHORT_SCOPES.iter().map(|s| s.to_string()).collect()
    }

    fn default_node_suffix() -> String {
        NODE_SUFFIX.to_string()
    }

    fn default_ticket_prefix() -> String {
        TICKET_PREFIX.to_string()
    }

    fn default_suggestion_threshold() -> usize {
        DEFAULT_SUGGESTION_THRESHOLD
    }

    fn default_present_tense_exceptions() -> Vec<String> {
        PRESENT_TENSE_EXCEPTIONS
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn default_irregular_past_tense() -> Vec<String> {
        IRREGULAR_PAST_TENSE.iter().map(|s| s.to_string()).collect()
    }
}

impl Default for TitleRulesConfig {
    fn default() -> Self {
        Self {
            schema_version: Self::default_schema_version(),
            types: Self::default_types(),
            scopes: Self::default_scopes(),
            node_suffix: Self::default_node_suffix(),
            ticket_prefix: Self::default_ticket_prefix(),
            suggestion_threshold: Self::default_suggestion_threshold(),
            present_tense_exceptions: Self::default_present_tense_exceptions(),
            irregular_past_tense: Self::default_irregular_past_tense(),
        }
    }
}

impl TitleRulesConfig {
    /// Rejects any schema version other than [`CURRENT_SCHEMA_VERSION`].
    pub fn check_schema_version(&self) -> Result<(), ConfigLoadError> {
        if self.schema_version != CURRENT_SCHEMA_VERSION {
            return Err(ConfigLoadError::UnsupportedSchemaVersion(
                self.schema_version,
            ));
        }
        Ok(())
    }
}

/// Reads a TOML file into any deserializable configuration type.
///
/// A missing file is reported as [`ConfigLoadError::NotFound`] rather than
/// as a plain I/O error.
pub fn read_toml_file<T, P>(path: P) -> Result<T, ConfigLoadError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path_ref = path.as_ref();
    let content = match fs::read_to_string(path_ref) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigLoadError::NotFound(path_ref.display().to_string()));
        }
        Err(e) => return Err(ConfigLoadError::Io(e)),
    };
    Ok(toml::from_str(&content)?)
}

/// Loads a rule configuration from the given TOML file.
///
/// # Arguments
/// * `path` - Path to the configuration file
///
/// # Returns
/// * `Ok(TitleRulesConfig)` if loaded and the schema version is supported
/// * `Err(ConfigLoadError)` if the file is missing, unreadable, malformed or
///   has an unsupported schema version
pub fn load_title_rules_config<P: AsRef<Path>>(
    path: P,
) -> Result<TitleRulesConfig, ConfigLoadError> {
    let config: TitleRulesConfig = read_toml_file(path)?;
    config.check_schema_version()?;
    Ok(config)
}
