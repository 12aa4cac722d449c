use super::*;

fn parsed(title: &str) -> ParsedTitle {
    match parse_title(title, &TitleRules::default()) {
        SchemaMatch::Parsed(parsed) => parsed,
        other => panic!("Title '{}' should parse, got {:?}", title, other),
    }
}

#[test]
fn test_schema_mismatch() {
    let rules = TitleRules::default();
    let invalid_titles = vec![
        "feat(core):",
        "feat(core)",
        "feat(core):implement feature",
        "implement feature",
        "",
    ];

    for title in invalid_titles {
        assert_eq!(
            parse_title(title, &rules),
            SchemaMatch::Mismatch,
            "Title '{}' should not match the schema",
            title
        );
    }
}

#[test]
fn test_ticket_number_takes_priority() {
    let rules = TitleRules::default();
    let titles = vec![
        "feat(Mattermost Node): Add new resource n8n-1234",
        "n8n-1234 feat(Mattermost Node): Add new resource",
        "feat(Mattermost Node) n8n-1234: Add new resource",
        "N8N-12345 no schema at all",
    ];

    for title in titles {
        assert_eq!(
            parse_title(title, &rules),
            SchemaMatch::TicketNumber,
            "Title '{}' should be rejected for its ticket number",
            title
        );
    }
}

#[test]
fn test_parse_without_scope() {
    let parsed = parsed("feat: Implement feature");

    assert_eq!(parsed.commit_type, "feat");
    assert_eq!(parsed.scope, None);
    assert!(!parsed.breaking);
    assert_eq!(parsed.subject, "Implement feature");
}

#[test]
fn test_parse_keeps_raw_scope() {
    let parsed = parsed("fix(core,  editor ): Handle errors");

    assert_eq!(parsed.scope.as_deref(), Some("core,  editor "));
    assert_eq!(parsed.subject, "Handle errors");
}

#[test]
fn test_parse_breaking_marker() {
    let with_scope = parsed("feat(Oura Node)!: Change default value");
    assert!(with_scope.breaking);
    assert_eq!(with_scope.scope.as_deref(), Some("Oura Node"));

    let without_scope = parsed("feat!: Change default value");
    assert!(without_scope.breaking);
    assert_eq!(without_scope.scope, None);
}

#[test]
fn test_parse_keeps_subject_whitespace() {
    let parsed = parsed("docs(Oura Node): Fix typo(no-changelog) ");

    assert_eq!(parsed.subject, "Fix typo(no-changelog) ");
}

#[test]
fn test_parse_empty_scope_and_subject() {
    let parsed = parsed("feat(): ");

    assert_eq!(parsed.scope.as_deref(), Some(""));
    assert_eq!(parsed.subject, "");
}

#[test]
fn test_parse_finds_schema_after_leading_text() {
    let parsed = parsed("WIP feat(core): Implement feature");

    assert_eq!(parsed.commit_type, "feat");
    assert_eq!(parsed.scope.as_deref(), Some("core"));
}
