//! Session statistics
//!
//! Parses a batch of raw guess strings and aggregates them into a named
//! statistics record. A single bad guess never aborts the batch: it is
//! recorded as invalid and aggregation continues.

use crate::anagram::AnagramIndex;
use crate::anagram::validator::validate_words;
use crate::core::{LetterPool, Word};
use std::collections::BTreeSet;

/// Split a raw guess like `"eat, tea"` into its two words
///
/// A raw guess is valid only if it contains exactly one comma; all
/// whitespace is stripped from both halves. Any other shape is the invalid
/// sentinel (`None`), which callers record as an invalid guess.
///
/// # Examples
/// ```
/// use wordgames::anagram::parse_guess;
///
/// assert_eq!(parse_guess("eat, tea"), Some(("eat".into(), "tea".into())));
/// assert_eq!(parse_guess("eat , tea"), Some(("eat".into(), "tea".into())));
/// assert_eq!(parse_guess("eat,tea"), Some(("eat".into(), "tea".into())));
/// assert_eq!(parse_guess("eat tea"), None);
/// assert_eq!(parse_guess("eat,tea,sea"), None);
/// ```
#[must_use]
pub fn parse_guess(raw: &str) -> Option<(String, String)> {
    if raw.matches(',').count() != 1 {
        return None;
    }

    let (left, right) = raw.split_once(',')?;
    let strip = |half: &str| half.chars().filter(|c| !c.is_whitespace()).collect();
    Some((strip(left), strip(right)))
}

/// Aggregated results for one game session
///
/// Each field is named for what it holds; nothing is positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    /// Unique valid pairs, order-normalized, in first-seen order
    pub valid: Vec<(Word, Word)>,
    /// Failed guesses as entered; parse failures appear as the empty pair
    pub invalid: Vec<(String, String)>,
    /// Total score per the game's length table
    pub score: u32,
    /// Truncated percent of valid guesses over all guesses
    pub accuracy: u32,
    /// Truncated percent of guessed words over all eligible words
    pub skill: u32,
    /// Unique words appearing in valid pairs
    pub guessed: BTreeSet<Word>,
    /// Eligible words the player never guessed
    pub not_guessed: BTreeSet<Word>,
}

/// Points awarded for a valid pair of the given word length
const fn pair_score(length: usize) -> u32 {
    match length {
        3 => 1,
        4 => 2,
        5 | 6 => 3,
        7 => 5,
        _ => 0,
    }
}

/// Aggregate a batch of raw guesses into session statistics
///
/// Each raw guess is parsed ([`parse_guess`]), validated against the corpus
/// and pool, and order-normalized. A valid pair counts once; repeats of an
/// already-counted pair are recorded as invalid, as are parse and
/// validation failures.
///
/// # Examples
/// ```
/// use wordgames::anagram::{AnagramIndex, session_stats};
/// use wordgames::core::Word;
///
/// let corpus = ["rat", "art", "star", "tarts", "far"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let index = AnagramIndex::build(corpus);
/// let pool = "potsria".parse().unwrap();
///
/// let guesses: Vec<String> = ["star, tarts", "far, rat", "rat, art", "rat, art", "art, rat"]
///     .iter()
///     .map(ToString::to_string)
///     .collect();
///
/// let stats = session_stats(&guesses, &pool, &index);
/// assert_eq!(stats.valid.len(), 1);
/// assert_eq!(stats.score, 1);
/// assert_eq!(stats.accuracy, 20);
/// ```
#[must_use]
pub fn session_stats(
    raw_guesses: &[String],
    pool: &LetterPool,
    index: &AnagramIndex,
) -> SessionStats {
    let mut valid: Vec<(Word, Word)> = Vec::new();
    let mut invalid: Vec<(String, String)> = Vec::new();

    for raw in raw_guesses {
        let Some((first, second)) = parse_guess(raw) else {
            invalid.push((String::new(), String::new()));
            continue;
        };

        let pair = match (Word::scrub(&first), Word::scrub(&second)) {
            (Some(w1), Some(w2)) if validate_words(&w1, &w2, pool, index) => {
                // Order-normalize so (rat, art) and (art, rat) collapse
                if w1 <= w2 { (w1, w2) } else { (w2, w1) }
            }
            _ => {
                invalid.push((first, second));
                continue;
            }
        };

        if valid.contains(&pair) {
            invalid.push((first, second));
        } else {
            valid.push(pair);
        }
    }

    let score = valid.iter().map(|(w, _)| pair_score(w.letter_count())).sum();

    let accuracy = if raw_guesses.is_empty() {
        0
    } else {
        (valid.len() * 100 / raw_guesses.len()) as u32
    };

    let mut guessed: BTreeSet<Word> = BTreeSet::new();
    for (first, second) in &valid {
        guessed.insert(first.clone());
        guessed.insert(second.clone());
    }

    let eligible = index.eligible_words(pool);
    let skill = if eligible.is_empty() {
        0
    } else {
        (guessed.len() * 100 / eligible.len()) as u32
    };

    let not_guessed = eligible
        .into_iter()
        .filter(|word| !guessed.contains(word))
        .collect();

    SessionStats {
        valid,
        invalid,
        score,
        accuracy,
        skill,
        guessed,
        not_guessed,
    }
}
