//! Candidate narrowing command
//!
//! Applies the latest observation from a guess/feedback history to a
//! candidate answer list.

use crate::core::Pattern;
use crate::wordle::{FeedbackIndex, narrow_candidates};

/// Result of narrowing a candidate list
pub struct NarrowReport {
    /// Candidate count before narrowing
    pub before: usize,
    /// The surviving candidates, input order preserved
    pub candidates: Vec<String>,
    /// The observation that was applied, if any
    pub observation: Option<(String, Pattern)>,
}

/// Narrow `candidates` by the last (guess, pattern) observation
///
/// Pattern strings accept the digit, letter, and emoji forms understood by
/// [`Pattern::parse`].
///
/// # Errors
///
/// Returns an error when a pattern string does not parse, when the history
/// lengths disagree, or when the feedback index has no entry for the
/// observation.
pub fn run_narrow(
    index: &FeedbackIndex,
    guesses: &[String],
    patterns: &[String],
    candidates: Vec<String>,
) -> Result<NarrowReport, String> {
    if guesses.len() != patterns.len() {
        return Err(format!(
            "History mismatch: {} guesses but {} patterns",
            guesses.len(),
            patterns.len()
        ));
    }

    let feedback: Vec<Pattern> = patterns
        .iter()
        .map(|p| {
            Pattern::parse(p).ok_or_else(|| format!("Invalid pattern string: {p}"))
        })
        .collect::<Result<_, _>>()?;

    let guesses: Vec<String> = guesses.iter().map(|g| g.to_lowercase()).collect();
    let candidates: Vec<String> = candidates.into_iter().map(|c| c.to_lowercase()).collect();
    let before = candidates.len();

    let narrowed =
        narrow_candidates(&guesses, &feedback, &candidates, index).map_err(|e| e.to_string())?;

    let observation = match (guesses.last(), feedback.last()) {
        (Some(guess), Some(&pattern)) if !guess.is_empty() => {
            Some((guess.clone(), pattern))
        }
        _ => None,
    };

    Ok(NarrowReport {
        before,
        candidates: narrowed,
        observation,
    })
}
