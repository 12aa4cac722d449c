//! # Type Validation
//!
//! Validates the type token of a parsed title against the allowed types.

use crate::issues::{Issue, IssueKind};
use crate::rules::TitleRules;

#[cfg(test)]
#[path = "commit_type_tests.rs"]
mod tests;

/// Checks the type of a title.
///
/// Returns at most one issue: [`IssueKind::TypeNotFound`] for an empty type
/// or [`IssueKind::InvalidType`] for a type that is not allowed. Matching is
/// case-sensitive.
///
/// # Examples
///
/// ```
/// use title_warden_core::checks::commit_type::check_type;
/// use title_warden_core::issues::IssueKind;
/// use title_warden_core::rules::TitleRules;
///
/// let rules = TitleRules::default();
/// assert!(check_type("fix", &rules).is_none());
/// assert_eq!(check_type("wrong", &rules).map(|i| i.kind), Some(IssueKind::InvalidType));
/// ```
pub fn check_type(commit_type: &str, rules: &TitleRules) -> Option<Issue> {
    if commit_type.is_empty() {
        return Some(rules.issue(IssueKind::TypeNotFound));
    }

    if !rules.is_valid_type(commit_type) {
        return Some(rules.issue(IssueKind::InvalidType));
    }

    None
}
