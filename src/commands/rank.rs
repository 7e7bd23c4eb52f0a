//! Guess ranking command
//!
//! Ranks candidate guesses by expected information gain over the current
//! candidate answers.

use crate::wordle::{FeedbackIndex, RankedGuess, rank_guesses};

/// Result of ranking guesses
pub struct RankReport {
    pub answer_count: usize,
    pub guess_count: usize,
    /// Guesses with scores, descending; truncated to the requested top
    pub ranked: Vec<RankedGuess>,
}

/// Rank `guesses` against `answers`, keeping the top `top` if requested
///
/// An empty guess list means "rank every guess the index knows", in sorted
/// order for determinism.
#[must_use]
pub fn run_rank(
    index: &FeedbackIndex,
    guesses: &[String],
    answers: &[String],
    top: Option<usize>,
) -> RankReport {
    let guesses: Vec<String> = if guesses.is_empty() {
        let mut all: Vec<String> = index.guesses().map(ToString::to_string).collect();
        all.sort();
        all
    } else {
        guesses.iter().map(|g| g.to_lowercase()).collect()
    };

    let answers: Vec<String> = answers.iter().map(|a| a.to_lowercase()).collect();

    let guess_count = guesses.len();
    let mut ranked = rank_guesses(&guesses, &answers, index);

    if let Some(top) = top {
        ranked.truncate(top);
    }

    RankReport {
        answer_count: answers.len(),
        guess_count,
        ranked,
    }
}
