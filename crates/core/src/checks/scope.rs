//! # Scope Validation
//!
//! A title may name several scopes, separated by `", "`. Each scope must be
//! either one of the short scopes or a node display name followed by the
//! node suffix, e.g. `Mattermost Node`.
//!
//! When a node scope is misspelled the closest known node scope is offered
//! as a suggestion. The suggestion never makes a scope valid.

use std::collections::HashSet;

use tracing::debug;

use crate::issues::{Issue, IssueKind};
use crate::rules::TitleRules;
use crate::suggest::closest_match;

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;

/// Checks the raw scope of a title.
///
/// # Arguments
///
/// * `scope` - The raw text between the parentheses, `None` if the title has no scope
/// * `rules` - The rule catalog
/// * `display_names` - The known node display names, without the node suffix
///
/// # Returns
///
/// No issues for an absent scope. A single
/// [`IssueKind::MissingWhitespaceAfterComma`] issue when any comma is not
/// followed by a space. Otherwise one [`IssueKind::InvalidScope`] issue per
/// invalid scope, in the order the scopes appear.
///
/// # Examples
///
/// ```
/// use title_warden_core::checks::scope::check_scope;
/// use title_warden_core::rules::TitleRules;
///
/// let rules = TitleRules::default();
/// let names = vec!["Mattermost".to_string()];
///
/// assert!(check_scope(Some("core, Mattermost Node"), &rules, &names).is_empty());
///
/// let issues = check_scope(Some("Mattermos Node"), &rules, &names);
/// assert_eq!(issues.len(), 1);
/// assert!(issues[0].message.ends_with(". Did you mean `Mattermost Node`?"));
/// ```
pub fn check_scope(scope: Option<&str>, rules: &TitleRules, display_names: &[String]) -> Vec<Issue> {
    let Some(scope) = scope else {
        return Vec::new();
    };

    if has_comma_without_space(scope) {
        return vec![rules.issue(IssueKind::MissingWhitespaceAfterComma)];
    }

    let known_names: HashSet<&str> = display_names.iter().map(String::as_str).collect();

    scope
        .split(',')
        .map(str::trim)
        .filter(|token| !is_valid_scope(token, rules, &known_names))
        .map(|token| invalid_scope_issue(token, rules, display_names))
        .collect()
}

fn has_comma_without_space(scope: &str) -> bool {
    scope
        .char_indices()
        .filter(|(_, c)| *c == ',')
        .any(|(index, _)| !scope[index + 1..].starts_with(' '))
}

fn is_valid_scope(token: &str, rules: &TitleRules, known_names: &HashSet<&str>) -> bool {
    if rules.is_short_scope(token) {
        return true;
    }

    token
        .strip_suffix(rules.node_suffix())
        .is_some_and(|name| known_names.contains(name))
}

fn invalid_scope_issue(token: &str, rules: &TitleRules, display_names: &[String]) -> Issue {
    let mut issue = rules.issue(IssueKind::InvalidScope);

    // Only tokens written as node scopes are compared against node names.
    if !token.ends_with(rules.node_suffix()) {
        return issue;
    }

    let candidates = display_names
        .iter()
        .map(|name| format!("{}{}", name, rules.node_suffix()));

    if let Some(suggestion) = closest_match(token, candidates, rules.suggestion_threshold()) {
        debug!(scope = token, suggestion = suggestion.as_str(), "Suggesting node scope");
        issue.message = format!("{}. Did you mean `{}`?", issue.message, suggestion);
    }

    issue
}
