//! # Validation Issues
//!
//! This module provides the types used to report title violations.
//!
//! The primary type is [`Issue`], one human-readable message per violated
//! rule. Issues are reported in the order the checks found them and are never
//! deduplicated. [`ValidationReport`] bundles the issues for a title so that
//! callers can render or serialize them.

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(test)]
#[path = "issues_tests.rs"]
mod tests;

/// The rule that an [`Issue`] reports a violation of.
///
/// # Examples
///
/// ```
/// use title_warden_core::issues::IssueKind;
///
/// assert_eq!(IssueKind::InvalidScope.code(), "INVALID_SCOPE");
/// assert!(IssueKind::TicketNumberPresent.is_terminal());
/// assert!(!IssueKind::InvalidType.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    /// The title does not have the `type(scope): subject` shape
    ConventionalSchemaMismatch,

    /// The title contains a ticket number
    TicketNumberPresent,

    /// The type is empty
    TypeNotFound,

    /// The type is not one of the allowed types
    InvalidType,

    /// A scope is neither a short scope nor a known node scope
    InvalidScope,

    /// Multiple scopes are separated by a comma without a following space
    MissingWhitespaceAfterComma,

    /// The subject does not start with an uppercase character
    UppercaseInitialInSubject,

    /// The subject ends with a period
    FinalPeriodInSubject,

    /// The subject does not start with a present tense verb
    NoPresentTenseInSubject,

    /// The no-changelog marker is not at the end of the subject
    SkipChangelogNotInFinalPosition,
}

impl IssueKind {
    /// Returns the stable identifier of the rule.
    pub fn code(&self) -> &'static str {
        match self {
            IssueKind::ConventionalSchemaMismatch => "CONVENTIONAL_SCHEMA_MISMATCH",
            IssueKind::TicketNumberPresent => "TICKET_NUMBER_PRESENT",
            IssueKind::TypeNotFound => "TYPE_NOT_FOUND",
            IssueKind::InvalidType => "INVALID_TYPE",
            IssueKind::InvalidScope => "INVALID_SCOPE",
            IssueKind::MissingWhitespaceAfterComma => "MISSING_WHITESPACE_AFTER_COMMA",
            IssueKind::UppercaseInitialInSubject => "UPPERCASE_INITIAL_IN_SUBJECT",
            IssueKind::FinalPeriodInSubject => "FINAL_PERIOD_IN_SUBJECT",
            IssueKind::NoPresentTenseInSubject => "NO_PRESENT_TENSE_IN_SUBJECT",
            IssueKind::SkipChangelogNotInFinalPosition => "SKIP_CHANGELOG_NOT_IN_FINAL_POSITION",
        }
    }

    /// Whether an issue of this kind ends validation on its own.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            IssueKind::ConventionalSchemaMismatch | IssueKind::TicketNumberPresent
        )
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single rule violation found in a title.
///
/// The `Display` implementation yields only the message, which is what
/// is shown to the author of the pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// The violated rule
    pub kind: IssueKind,

    /// Human-readable description of the violation
    pub message: String,
}

impl Issue {
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The outcome of validating one title.
///
/// # Examples
///
/// ```
/// use title_warden_core::issues::{Issue, IssueKind, ValidationReport};
///
/// let report = ValidationReport::new(
///     "feat(core): Add thing.",
///     vec![Issue::new(IssueKind::FinalPeriodInSubject, "Subject must not end with a period")],
/// );
///
/// assert!(!report.is_valid());
/// assert_eq!(report.to_bullet_list(), "- Subject must not end with a period");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// The title that was validated
    pub title: String,

    /// Every issue found, in check order
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn new(title: impl Into<String>, issues: Vec<Issue>) -> Self {
        Self {
            title: title.into(),
            issues,
        }
    }

    /// Whether the title passed every check.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Renders the issues as newline separated `- ` prefixed lines.
    pub fn to_bullet_list(&self) -> String {
        format_issues(&self.issues)
    }
}

/// Renders issues as newline separated `- ` prefixed lines.
pub fn format_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| format!("- {}", issue))
        .collect::<Vec<_>>()
        .join("\n")
}
