use super::*;

#[test]
fn test_exact_match_is_returned() {
    let names = vec!["Oura Node".to_string(), "Slack Node".to_string()];

    assert_eq!(
        closest_match("Slack Node", names, 0),
        Some("Slack Node".to_string())
    );
}

#[test]
fn test_single_edit_suggestions() {
    let names = ["Mattermost Node", "Gmail Trigger Node", "Oura Node"];

    assert_eq!(
        closest_match("Mattermos Node", names, 2),
        Some("Mattermost Node")
    );
    assert_eq!(
        closest_match("Gmai Trigger Node", names, 2),
        Some("Gmail Trigger Node")
    );
}

#[test]
fn test_case_differences_count_as_edits() {
    let names = ["Mattermost Node"];

    assert_eq!(closest_match("mattermost node", names, 1), None);
    assert_eq!(
        closest_match("mattermost node", names, 2),
        Some("Mattermost Node")
    );
}

#[test]
fn test_distance_above_threshold_yields_none() {
    let names = ["Mattermost Node"];

    assert_eq!(closest_match("Slack Node", names, 2), None);
}

#[test]
fn test_no_candidates_yields_none() {
    let names: Vec<String> = Vec::new();

    assert_eq!(closest_match("Oura Node", names, 10), None);
}

#[test]
fn test_ties_go_to_first_candidate() {
    let names = ["Bat Node", "Cat Node", "Hat Node"];

    assert_eq!(closest_match("Rat Node", names, 1), Some("Bat Node"));

    let reversed = ["Hat Node", "Cat Node", "Bat Node"];
    assert_eq!(closest_match("Rat Node", reversed, 1), Some("Hat Node"));
}

#[test]
fn test_closer_later_candidate_wins() {
    let names = ["Gmail Node", "Gmail Trigger Node"];

    assert_eq!(
        closest_match("Gmail Triger Node", names, 2),
        Some("Gmail Trigger Node")
    );
}
