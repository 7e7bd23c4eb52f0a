//! Candidate narrowing
//!
//! Intersects the current candidate answers with the feedback bucket implied
//! by the latest (guess, pattern) observation. Candidate sets only ever
//! shrink: narrowing with the same observations twice yields the same set.

use crate::core::Pattern;
use crate::wordle::FeedbackIndex;
use std::fmt;

/// Error type for observations the feedback index does not know
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrowError {
    /// The index has no entry for this (guess, pattern) observation
    ///
    /// Should not occur for a consistent index built over the same
    /// vocabulary, but a missing entry is reported, not trusted.
    UnknownObservation { guess: String, pattern: Pattern },
}

impl fmt::Display for NarrowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownObservation { guess, pattern } => write!(
                f,
                "Feedback index has no entry for guess {guess:?} with pattern {pattern}"
            ),
        }
    }
}

impl std::error::Error for NarrowError {}

/// Narrow a candidate answer set by the latest observation
///
/// The histories are parallel: `feedback[i]` is the pattern observed for
/// `guesses[i]`. Earlier observations are assumed already applied to
/// `candidates`, so only the last pair narrows further. An empty history, or
/// the empty-string "no guess yet" sentinel in first position, returns the
/// candidates unchanged (there is nothing to narrow by). Candidate order is
/// preserved.
///
/// # Errors
/// Returns `NarrowError::UnknownObservation` when the index has no bucket
/// for the last (guess, pattern) pair.
///
/// # Examples
/// ```
/// use wordgames::core::Pattern;
/// use wordgames::wordle::{FeedbackIndex, narrow_candidates};
///
/// let pattern = Pattern::from_code("00000").unwrap();
/// let index = FeedbackIndex::from_entries([(
///     "crane".to_string(),
///     vec![(pattern, vec!["moist".to_string(), "humid".to_string()])],
/// )]);
///
/// let candidates = vec!["moist".to_string(), "slate".to_string()];
/// let narrowed = narrow_candidates(
///     &["crane".to_string()],
///     &[pattern],
///     &candidates,
///     &index,
/// )
/// .unwrap();
/// assert_eq!(narrowed, ["moist"]);
/// ```
pub fn narrow_candidates(
    guesses: &[String],
    feedback: &[Pattern],
    candidates: &[String],
    index: &FeedbackIndex,
) -> Result<Vec<String>, NarrowError> {
    // Bootstrap: nothing observed yet
    if guesses.first().is_none_or(String::is_empty) {
        return Ok(candidates.to_vec());
    }

    let (Some(guess), Some(&pattern)) = (guesses.last(), feedback.last()) else {
        return Ok(candidates.to_vec());
    };

    let bucket =
        index
            .bucket(guess, pattern)
            .ok_or_else(|| NarrowError::UnknownObservation {
                guess: guess.clone(),
                pattern,
            })?;

    Ok(candidates
        .iter()
        .filter(|candidate| bucket.contains(candidate.as_str()))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(code: &str) -> Pattern {
        Pattern::from_code(code).unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn sample_index() -> FeedbackIndex {
        FeedbackIndex::from_entries([
            (
                "crane".to_string(),
                vec![
                    (pattern("00000"), strings(&["moist", "humid", "podgy"])),
                    (pattern("02000"), strings(&["bread", "wrist"])),
                ],
            ),
            (
                "moist".to_string(),
                vec![(pattern("22222"), strings(&["moist"]))],
            ),
        ])
    }

    #[test]
    fn empty_history_returns_candidates_unchanged() {
        let index = sample_index();
        let candidates = strings(&["moist", "slate"]);

        let narrowed = narrow_candidates(&[], &[], &candidates, &index).unwrap();
        assert_eq!(narrowed, candidates);
    }

    #[test]
    fn no_guess_sentinel_returns_candidates_unchanged() {
        let index = sample_index();
        let candidates = strings(&["moist", "slate"]);

        let narrowed = narrow_candidates(
            &[String::new()],
            &[pattern("00000")],
            &candidates,
            &index,
        )
        .unwrap();
        assert_eq!(narrowed, candidates);
    }

    #[test]
    fn narrows_to_the_observed_bucket() {
        let index = sample_index();
        let candidates = strings(&["moist", "slate", "humid", "bread"]);

        let narrowed = narrow_candidates(
            &strings(&["crane"]),
            &[pattern("00000")],
            &candidates,
            &index,
        )
        .unwrap();
        // Order preserved, slate and bread dropped
        assert_eq!(narrowed, strings(&["moist", "humid"]));
    }

    #[test]
    fn only_the_last_observation_narrows() {
        let index = sample_index();
        // The earlier crane observation is assumed already applied
        let candidates = strings(&["moist", "humid"]);

        let narrowed = narrow_candidates(
            &strings(&["crane", "moist"]),
            &[pattern("00000"), pattern("22222")],
            &candidates,
            &index,
        )
        .unwrap();
        assert_eq!(narrowed, strings(&["moist"]));
    }

    #[test]
    fn result_never_grows() {
        let index = sample_index();
        let candidates = strings(&["moist"]);

        let narrowed = narrow_candidates(
            &strings(&["crane"]),
            &[pattern("00000")],
            &candidates,
            &index,
        )
        .unwrap();
        assert!(narrowed.len() <= candidates.len());
    }

    #[test]
    fn narrowing_is_idempotent() {
        let index = sample_index();
        let candidates = strings(&["moist", "slate", "humid"]);
        let history = strings(&["crane"]);
        let observed = [pattern("00000")];

        let once = narrow_candidates(&history, &observed, &candidates, &index).unwrap();
        let twice = narrow_candidates(&history, &observed, &once, &index).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_observation_is_an_error() {
        let index = sample_index();
        let candidates = strings(&["moist"]);

        // Known guess, unrecorded pattern
        let result = narrow_candidates(
            &strings(&["crane"]),
            &[pattern("11111")],
            &candidates,
            &index,
        );
        assert!(matches!(
            result,
            Err(NarrowError::UnknownObservation { .. })
        ));

        // Unknown guess entirely
        let result = narrow_candidates(
            &strings(&["zonal"]),
            &[pattern("00000")],
            &candidates,
            &index,
        );
        assert!(matches!(
            result,
            Err(NarrowError::UnknownObservation { .. })
        ));
    }

    #[test]
    fn empty_intersection_is_a_valid_result() {
        let index = sample_index();
        let candidates = strings(&["slate", "grape"]);

        let narrowed = narrow_candidates(
            &strings(&["crane"]),
            &[pattern("00000")],
            &candidates,
            &index,
        )
        .unwrap();
        assert!(narrowed.is_empty());
    }
}
