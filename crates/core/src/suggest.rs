//! Near-miss matching for "did you mean" suggestions.

use tracing::trace;

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;

/// Finds the candidate closest to `input` by Levenshtein distance.
///
/// Returns `None` when there are no candidates or when the closest one is
/// more than `max_distance` edits away. On a tie the first candidate seen
/// wins. Case and whitespace differences count as edits.
///
/// # Examples
///
/// ```
/// use title_warden_core::suggest::closest_match;
///
/// let names = ["Mattermost Node", "Gmail Trigger Node"];
/// assert_eq!(closest_match("Mattermos Node", names, 2), Some("Mattermost Node"));
/// assert_eq!(closest_match("Slack Node", names, 2), None);
/// ```
pub fn closest_match<I, S>(input: &str, candidates: I, max_distance: usize) -> Option<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut best: Option<(usize, S)> = None;

    for candidate in candidates {
        let distance = strsim::levenshtein(input, candidate.as_ref());
        let closer = best
            .as_ref()
            .map_or(true, |(best_distance, _)| distance < *best_distance);
        if closer {
            best = Some((distance, candidate));
        }
    }

    let (distance, candidate) = best?;
    let closest: &str = candidate.as_ref();
    trace!(
        input = input,
        candidate = closest,
        distance = distance,
        "Closest candidate found"
    );

    (distance <= max_distance).then_some(candidate)
}
