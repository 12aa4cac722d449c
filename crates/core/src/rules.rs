//! # Rule Catalog
//!
//! Runtime form of [`TitleRulesConfig`]: the allowed types and scopes, the
//! compiled ticket pattern, the tense word lists and the message text for
//! every [`IssueKind`].

use regex::Regex;
use std::collections::HashSet;

use crate::config::{ticket_regex_pattern, TitleRulesConfig, NO_CHANGELOG};
use crate::errors::TitleWardenError;
use crate::issues::{Issue, IssueKind};

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;

/// Validated, ready-to-use title rules.
///
/// # Examples
///
/// ```
/// use title_warden_core::rules::TitleRules;
///
/// let rules = TitleRules::default();
/// assert!(rules.is_valid_type("feat"));
/// assert!(rules.is_short_scope("core"));
/// assert!(!rules.is_short_scope("Core"));
/// ```
#[derive(Debug, Clone)]
pub struct TitleRules {
    types: Vec<String>,
    scopes: Vec<String>,
    node_suffix: String,
    ticket_regex: Regex,
    suggestion_threshold: usize,
    present_tense_exceptions: HashSet<String>,
    irregular_past_tense: HashSet<String>,
    display_types: String,
    display_scopes: String,
}

impl TitleRules {
    /// Builds the rules from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TitleWardenError::InvalidRule`] when the configuration has no
    /// types, an empty node suffix or an empty ticket prefix.
    pub fn from_config(config: &TitleRulesConfig) -> Result<Self, TitleWardenError> {
        if config.types.is_empty() {
            return Err(TitleWardenError::InvalidRule {
                rule: "types".to_string(),
                reason: "at least one type must be allowed".to_string(),
            });
        }

        if config.node_suffix.trim().is_empty() {
            return Err(TitleWardenError::InvalidRule {
                rule: "node_suffix".to_string(),
                reason: "must contain a non-whitespace character".to_string(),
            });
        }

        if config.ticket_prefix.is_empty() {
            return Err(TitleWardenError::InvalidRule {
                rule: "ticket_prefix".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let ticket_regex = Regex::new(&ticket_regex_pattern(&config.ticket_prefix))?;

        Ok(Self {
            display_types: display_list(&config.types),
            display_scopes: display_list(&config.scopes),
            types: config.types.clone(),
            scopes: config.scopes.clone(),
            node_suffix: config.node_suffix.clone(),
            ticket_regex,
            suggestion_threshold: config.suggestion_threshold,
            present_tense_exceptions: lowercase_set(&config.present_tense_exceptions),
            irregular_past_tense: lowercase_set(&config.irregular_past_tense),
        })
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    pub fn node_suffix(&self) -> &str {
        &self.node_suffix
    }

    pub fn suggestion_threshold(&self) -> usize {
        self.suggestion_threshold
    }

    pub fn is_valid_type(&self, commit_type: &str) -> bool {
        self.types.iter().any(|t| t == commit_type)
    }

    pub fn is_short_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }

    /// Whether the title contains a ticket number anywhere.
    pub fn contains_ticket_number(&self, title: &str) -> bool {
        self.ticket_regex.is_match(title)
    }

    /// Whether a lowercased word is known to be past tense.
    ///
    /// Irregular forms are matched from the configured list. Regular forms
    /// are detected by their `ed` ending unless listed as exceptions.
    pub fn is_past_tense(&self, word: &str) -> bool {
        if self.irregular_past_tense.contains(word) {
            return true;
        }

        word.chars().count() > 3
            && word.ends_with("ed")
            && !self.present_tense_exceptions.contains(word)
    }

    /// Returns the catalog message for an issue kind.
    pub fn message(&self, kind: IssueKind) -> String {
        match kind {
            IssueKind::ConventionalSchemaMismatch => [
                "PR title does not match PR title convention: type: subject or type(scope): subject".to_string(),
                format!(
                    "For `type`, use `type:` or `type(scope):`, where `type` is one of {}",
                    self.display_types
                ),
                format!(
                    "If present, `scope` must be one of {} or `<displayName>{}`",
                    self.display_scopes, self.node_suffix
                ),
                "For the subject, mind the whitespace, start with uppercase and omit final period".to_string(),
            ]
            .join(". "),
            IssueKind::TicketNumberPresent => "PR title must not contain a ticket number".to_string(),
            IssueKind::TypeNotFound => format!(
                "Failed to find `type` in PR title. Expected one of {}",
                self.display_types
            ),
            IssueKind::InvalidType => format!(
                "Unknown `type` in PR title. Expected one of {}",
                self.display_types
            ),
            IssueKind::InvalidScope => format!(
                "Unknown `scope` in PR title. Expected one of {} or `<displayName>{}`",
                self.display_scopes, self.node_suffix
            ),
            IssueKind::MissingWhitespaceAfterComma => {
                "Missing whitespace after comma to separate multiple scopes".to_string()
            }
            IssueKind::UppercaseInitialInSubject => {
                "First char of subject must be uppercase".to_string()
            }
            IssueKind::FinalPeriodInSubject => "Subject must not end with a period".to_string(),
            IssueKind::NoPresentTenseInSubject => "Subject must use present tense".to_string(),
            IssueKind::SkipChangelogNotInFinalPosition => {
                format!("`{}` must be located at the end of the subject", NO_CHANGELOG)
            }
        }
    }

    /// Creates an issue carrying the catalog message for its kind.
    pub fn issue(&self, kind: IssueKind) -> Issue {
        Issue::new(kind, self.message(kind))
    }
}

impl Default for TitleRules {
    fn default() -> Self {
        // The built-in configuration always satisfies `from_config`.
        Self::from_config(&TitleRulesConfig::default())
            .expect("Default title rules must be valid")
    }
}

fn display_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("`{}`", v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn lowercase_set(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}
