use super::*;
use crate::config::TitleRulesConfig;

fn display_names() -> Vec<String> {
    vec![
        "Action Network".to_string(),
        "Gmail".to_string(),
        "Gmail Trigger".to_string(),
        "Mattermost".to_string(),
        "Oura".to_string(),
    ]
}

fn invalid_scope_message() -> String {
    TitleRules::default().message(IssueKind::InvalidScope)
}

#[test]
fn test_absent_scope_is_valid() {
    let rules = TitleRules::default();

    assert!(check_scope(None, &rules, &display_names()).is_empty());
}

#[test]
fn test_valid_short_scopes() {
    let rules = TitleRules::default();

    for scope in ["API", "core", "editor", "benchmark", "core, editor"] {
        assert!(
            check_scope(Some(scope), &rules, &display_names()).is_empty(),
            "Scope '{}' should be valid",
            scope
        );
    }
}

#[test]
fn test_valid_node_scopes() {
    let rules = TitleRules::default();

    for scope in ["Mattermost Node", "Gmail Trigger Node", "core, Oura Node"] {
        assert!(
            check_scope(Some(scope), &rules, &display_names()).is_empty(),
            "Scope '{}' should be valid",
            scope
        );
    }
}

#[test]
fn test_valid_and_invalid_scope() {
    let rules = TitleRules::default();
    let issues = check_scope(Some("core, wrong"), &rules, &display_names());

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::InvalidScope);
    assert_eq!(issues[0].message, invalid_scope_message());
}

#[test]
fn test_each_invalid_scope_is_reported() {
    let rules = TitleRules::default();
    let issues = check_scope(Some("wrong1, wrong2"), &rules, &display_names());

    assert_eq!(issues.len(), 2);
    assert!(issues
        .iter()
        .all(|issue| issue.message == invalid_scope_message()));
}

#[test]
fn test_missing_whitespace_after_comma() {
    let rules = TitleRules::default();

    for scope in ["core,editor", "core, editor,API", "wrong1,wrong2", "core,", "core,\teditor"] {
        let issues = check_scope(Some(scope), &rules, &display_names());
        assert_eq!(issues.len(), 1, "Scope '{}' should yield one issue", scope);
        assert_eq!(issues[0].kind, IssueKind::MissingWhitespaceAfterComma);
        assert_eq!(
            issues[0].message,
            "Missing whitespace after comma to separate multiple scopes"
        );
    }
}

#[test]
fn test_extra_whitespace_after_comma_is_accepted() {
    let rules = TitleRules::default();

    for scope in ["core,  editor", "core,   Oura Node"] {
        let issues = check_scope(Some(scope), &rules, &display_names());
        assert!(issues.is_empty(), "Scope '{}' should be valid, got {:?}", scope, issues);
    }
}

#[test]
fn test_miscased_node_suffix_has_no_suggestion() {
    let rules = TitleRules::default();
    let issues = check_scope(Some("Mattermost node"), &rules, &display_names());

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, invalid_scope_message());
}

#[test]
fn test_node_names_are_case_sensitive() {
    let rules = TitleRules::default();
    let issues = check_scope(Some("mattermost Node"), &rules, &display_names());

    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].message,
        format!("{}. Did you mean `Mattermost Node`?", invalid_scope_message())
    );
}

#[test]
fn test_misspelled_node_scope_gets_suggestion() {
    let rules = TitleRules::default();

    let issues = check_scope(Some("Mattermos Node"), &rules, &display_names());
    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].message,
        format!("{}. Did you mean `Mattermost Node`?", invalid_scope_message())
    );

    let issues = check_scope(Some("Gmai Trigger Node"), &rules, &display_names());
    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].message,
        format!(
            "{}. Did you mean `Gmail Trigger Node`?",
            invalid_scope_message()
        )
    );
}

#[test]
fn test_distant_node_scope_has_no_suggestion() {
    let rules = TitleRules::default();
    let issues = check_scope(Some("Slack Node"), &rules, &display_names());

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, invalid_scope_message());
}

#[test]
fn test_node_scopes_without_display_names() {
    let rules = TitleRules::default();
    let issues = check_scope(Some("Mattermost Node, core"), &rules, &[]);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, invalid_scope_message());
}

#[test]
fn test_empty_scope_is_invalid() {
    let rules = TitleRules::default();
    let issues = check_scope(Some(""), &rules, &display_names());

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::InvalidScope);
}

#[test]
fn test_suggestion_threshold_is_configurable() {
    let config = TitleRulesConfig {
        suggestion_threshold: 0,
        ..TitleRulesConfig::default()
    };
    let rules = TitleRules::from_config(&config).unwrap();

    let issues = check_scope(Some("Mattermos Node"), &rules, &display_names());
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, rules.message(IssueKind::InvalidScope));
}
