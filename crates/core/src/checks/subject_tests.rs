use super::*;

fn kinds(subject: &str) -> Vec<IssueKind> {
    check_subject(subject, &TitleRules::default())
        .into_iter()
        .map(|issue| issue.kind)
        .collect()
}

#[test]
fn test_valid_subjects() {
    let valid_subjects = vec![
        "Implement feature",
        "Add new resource",
        "Fix typo (no-changelog)",
        "Need more retries",
        "Embed credentials in request",
        "Upgrade to v2.0",
        "Ärger vermeiden",
    ];

    for subject in valid_subjects {
        assert!(
            kinds(subject).is_empty(),
            "Subject '{}' should be valid, got {:?}",
            subject,
            kinds(subject)
        );
    }
}

#[test]
fn test_lowercase_initial() {
    assert_eq!(
        kinds("implement feature"),
        vec![IssueKind::UppercaseInitialInSubject]
    );

    let issues = check_subject("implement feature", &TitleRules::default());
    assert_eq!(issues[0].message, "First char of subject must be uppercase");
}

#[test]
fn test_non_letter_initial() {
    assert_eq!(kinds("2FA support"), vec![IssueKind::UppercaseInitialInSubject]);
    assert_eq!(kinds(" Implement feature"), Vec::<IssueKind>::new());
}

#[test]
fn test_empty_subject() {
    assert_eq!(kinds(""), vec![IssueKind::UppercaseInitialInSubject]);
}

#[test]
fn test_final_period() {
    assert_eq!(
        kinds("Implement feature."),
        vec![IssueKind::FinalPeriodInSubject]
    );
}

#[test]
fn test_past_tense() {
    for subject in ["Added new resource", "Created new resource", "Caught error"] {
        assert_eq!(
            kinds(subject),
            vec![IssueKind::NoPresentTenseInSubject],
            "Subject '{}' should be flagged as past tense",
            subject
        );
    }
}

#[test]
fn test_past_tense_with_punctuation() {
    assert_eq!(
        kinds("Fixed: retry logic"),
        vec![IssueKind::NoPresentTenseInSubject]
    );
}

#[test]
fn test_no_changelog_in_final_position() {
    assert!(kinds("Fix typo (no-changelog)").is_empty());
    assert!(kinds("Fix typo(no-changelog)").is_empty());
}

#[test]
fn test_no_changelog_not_in_final_position() {
    let subjects = vec![
        "Fix (no-changelog) typo",
        "Fix typo(no-changelog) ",
        "(no-changelog) Fix typo",
        "Fix typo (no-changelog) (no-changelog)",
    ];

    for subject in subjects {
        assert_eq!(
            kinds(subject),
            vec![IssueKind::SkipChangelogNotInFinalPosition],
            "Subject '{}' should only fail the marker placement",
            subject
        );
    }
}

#[test]
fn test_no_changelog_is_exact() {
    assert!(kinds("Fix typo (No-Changelog)").is_empty());
    assert!(kinds("Fix typo (no-changelog").is_empty());
}

#[test]
fn test_all_subject_issues_accumulate() {
    assert_eq!(
        kinds("added (no-changelog) thing."),
        vec![
            IssueKind::UppercaseInitialInSubject,
            IssueKind::FinalPeriodInSubject,
            IssueKind::NoPresentTenseInSubject,
            IssueKind::SkipChangelogNotInFinalPosition,
        ]
    );
}
