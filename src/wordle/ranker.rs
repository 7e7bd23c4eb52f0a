//! Entropy-based guess ranking
//!
//! Scores every candidate guess by the Shannon entropy of the feedback
//! pattern distribution it induces over the current candidate answers, and
//! ranks guesses by expected information gain. Per-guess scoring is
//! independent, so the batch is partitioned across rayon's worker pool; only
//! the final sort imposes order.

use crate::wordle::FeedbackIndex;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Fixed score assigned to every guess once at most two answers remain
///
/// Not a true entropy value: it signals "just guess one of the finalists".
pub const FINALIST_SCORE: f64 = 1.0;

/// A guess with its entropy score
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGuess {
    pub word: String,
    pub score: f64,
}

/// Rank candidate guesses by expected information gain, descending
///
/// Ties (including the degenerate case where every score is
/// [`FINALIST_SCORE`]) preserve the input order of `guesses`. Guesses the
/// index does not know, or that leave no consistent answers, score 0.0
/// rather than failing the batch.
///
/// # Examples
/// ```
/// use wordgames::core::Pattern;
/// use wordgames::wordle::{FeedbackIndex, rank_guesses};
///
/// let split = Pattern::from_code("00000").unwrap();
/// let rest = Pattern::from_code("02000").unwrap();
/// let index = FeedbackIndex::from_entries([(
///     "crane".to_string(),
///     vec![
///         (split, vec!["moist".to_string(), "humid".to_string()]),
///         (rest, vec!["bread".to_string()]),
///     ],
/// )]);
///
/// let answers: Vec<String> = ["moist", "humid", "bread"]
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// let ranked = rank_guesses(&["crane".to_string()], &answers, &index);
/// assert!(ranked[0].score > 0.9);
/// ```
#[must_use]
pub fn rank_guesses(
    guesses: &[String],
    answers: &[String],
    index: &FeedbackIndex,
) -> Vec<RankedGuess> {
    // With two or fewer finalists there is nothing left to distinguish
    if answers.len() <= 2 {
        return guesses
            .iter()
            .map(|guess| RankedGuess {
                word: guess.clone(),
                score: FINALIST_SCORE,
            })
            .collect();
    }

    let answer_set: FxHashSet<&str> = answers.iter().map(String::as_str).collect();

    let mut ranked: Vec<RankedGuess> = guesses
        .par_iter()
        .map(|guess| RankedGuess {
            word: guess.clone(),
            score: entropy_against(guess, &answer_set, index),
        })
        .collect();

    // Stable sort keeps input order on ties
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Shannon entropy of one guess's pattern distribution over `answers`
///
/// Patterns absent from the index, or whose bucket intersects `answers`
/// nowhere, contribute nothing. A guess the index does not know scores 0.0.
#[must_use]
pub fn guess_entropy(guess: &str, answers: &[String], index: &FeedbackIndex) -> f64 {
    let answer_set: FxHashSet<&str> = answers.iter().map(String::as_str).collect();
    entropy_against(guess, &answer_set, index)
}

fn entropy_against(guess: &str, answers: &FxHashSet<&str>, index: &FeedbackIndex) -> f64 {
    let Some(buckets) = index.patterns(guess) else {
        return 0.0;
    };

    let counts: Vec<usize> = buckets
        .values()
        .map(|bucket| answers.iter().filter(|a| bucket.contains(**a)).count())
        .filter(|&count| count > 0)
        .collect();

    shannon_entropy(&counts)
}

/// Shannon entropy (base 2) of a distribution given as occurrence counts
///
/// H = -Σ p·log₂(p), with counts normalized by their total.
///
/// # Properties
/// - 0.0 for an empty or single-bucket distribution (no uncertainty)
/// - Maximized by the uniform distribution
/// - Always within [0, log₂(n)] for n nonzero buckets
///
/// # Examples
/// ```
/// use wordgames::wordle::shannon_entropy;
///
/// let entropy = shannon_entropy(&[25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[usize]) -> f64 {
    let total = counts.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
