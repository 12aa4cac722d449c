//! # Subject Validation
//!
//! The subject is the free text after `": "`. It must start with an
//! uppercase character, must not end with a period, must start with a
//! present tense verb and may only carry the `(no-changelog)` marker at its
//! very end.
//!
//! The tense check is a heuristic: it flags regular `-ed` forms and a list of
//! irregular past tense forms. Words that end in `ed` but are present tense
//! are listed as exceptions in the rules.

use crate::config::NO_CHANGELOG;
use crate::issues::{Issue, IssueKind};
use crate::rules::TitleRules;

#[cfg(test)]
#[path = "subject_tests.rs"]
mod tests;

/// Checks the subject of a title.
///
/// The four sub-checks are independent, so a subject may produce up to four
/// issues. They are reported in this order: initial casing, final period,
/// tense, no-changelog placement.
///
/// # Examples
///
/// ```
/// use title_warden_core::checks::subject::check_subject;
/// use title_warden_core::issues::IssueKind;
/// use title_warden_core::rules::TitleRules;
///
/// let rules = TitleRules::default();
///
/// assert!(check_subject("Fix typo (no-changelog)", &rules).is_empty());
///
/// let kinds: Vec<_> = check_subject("added thing.", &rules)
///     .into_iter()
///     .map(|issue| issue.kind)
///     .collect();
/// assert_eq!(
///     kinds,
///     vec![
///         IssueKind::UppercaseInitialInSubject,
///         IssueKind::FinalPeriodInSubject,
///         IssueKind::NoPresentTenseInSubject,
///     ]
/// );
/// ```
pub fn check_subject(subject: &str, rules: &TitleRules) -> Vec<Issue> {
    let mut issues = Vec::new();
    let text = subject.replace(NO_CHANGELOG, "");
    let text = text.trim_start();

    if !starts_with_uppercase(text) {
        issues.push(rules.issue(IssueKind::UppercaseInitialInSubject));
    }

    if subject.ends_with('.') {
        issues.push(rules.issue(IssueKind::FinalPeriodInSubject));
    }

    if first_word(text).is_some_and(|word| rules.is_past_tense(&word)) {
        issues.push(rules.issue(IssueKind::NoPresentTenseInSubject));
    }

    if !is_no_changelog_placement_valid(subject) {
        issues.push(rules.issue(IssueKind::SkipChangelogNotInFinalPosition));
    }

    issues
}

fn starts_with_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

/// Lowercased first word, without surrounding punctuation.
fn first_word(text: &str) -> Option<String> {
    let word = text
        .split_whitespace()
        .next()?
        .trim_matches(|c: char| !c.is_alphanumeric());

    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}

fn is_no_changelog_placement_valid(subject: &str) -> bool {
    match subject.matches(NO_CHANGELOG).count() {
        0 => true,
        1 => subject.ends_with(NO_CHANGELOG),
        _ => false,
    }
}
