//! Guessed-pair validation
//!
//! Validates a player's two-word guess against corpus membership, length,
//! distinctness, fingerprint equality, and the round's letter pool.
//! Validation failures are ordinary `false` results, never errors: malformed
//! input scrubs down to nothing and fails the length checks.

use crate::anagram::AnagramIndex;
use crate::core::{LetterPool, Word};

/// Minimum word length for a scoring pair
const MIN_PAIR_LENGTH: usize = 3;

/// Validate a guessed anagram pair against the corpus and letter pool
///
/// Both inputs are scrubbed (non-letters stripped, lowercased) before the
/// checks run. All of the following must hold:
/// 1. Both words are corpus members.
/// 2. Both are at least 3 letters and the same length as each other.
/// 3. The words are not identical.
/// 4. The words share a fingerprint (exact anagram test).
/// 5. Each word's letters are fully drawable from `pool`, with multiplicity,
///    each checked against the original pool independently.
///
/// # Examples
/// ```
/// use wordgames::anagram::{AnagramIndex, validate_pair};
/// use wordgames::core::Word;
///
/// let corpus = ["abed", "bead"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let index = AnagramIndex::build(corpus);
/// let pool = "abdexyz".parse().unwrap();
///
/// assert!(validate_pair("abed", "bead", &pool, &index));
/// assert!(!validate_pair("abed", "abed", &pool, &index)); // identical
/// ```
#[must_use]
pub fn validate_pair(first: &str, second: &str, pool: &LetterPool, index: &AnagramIndex) -> bool {
    match (Word::scrub(first), Word::scrub(second)) {
        (Some(w1), Some(w2)) => validate_words(&w1, &w2, pool, index),
        _ => false,
    }
}

/// Validation core over already-scrubbed words
pub(crate) fn validate_words(
    first: &Word,
    second: &Word,
    pool: &LetterPool,
    index: &AnagramIndex,
) -> bool {
    if !index.contains(first) || !index.contains(second) {
        return false;
    }

    // Reject short words unconditionally, not only when lengths already match
    if first.letter_count() < MIN_PAIR_LENGTH || second.letter_count() < MIN_PAIR_LENGTH {
        return false;
    }

    if first.letter_count() != second.letter_count() {
        return false;
    }

    if first == second {
        return false;
    }

    if first.fingerprint() != second.fingerprint() {
        return false;
    }

    pool.can_spell(first) && pool.can_spell(second)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(words: &[&str]) -> AnagramIndex {
        AnagramIndex::build(words.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    fn pool(s: &str) -> LetterPool {
        s.parse().unwrap()
    }

    #[test]
    fn valid_pair_passes_all_checks() {
        let index = build(&["abed", "bead"]);
        assert!(validate_pair("abed", "bead", &pool("abdexyz"), &index));
    }

    #[test]
    fn identical_words_fail() {
        let index = build(&["abed", "bead"]);
        assert!(!validate_pair("abed", "abed", &pool("abdexyz"), &index));
    }

    #[test]
    fn non_corpus_words_fail() {
        let index = build(&["abed", "bead"]);
        // Real anagrams, but not in this corpus
        assert!(!validate_pair("rat", "tar", &pool("ratarxy"), &index));
    }

    #[test]
    fn short_words_fail_even_in_corpus() {
        let index = build(&["at", "ta"]);
        assert!(!validate_pair("at", "ta", &pool("atxyzwv"), &index));
    }

    #[test]
    fn short_word_fails_even_when_lengths_differ() {
        // A short word must be rejected regardless of the other's length
        let index = build(&["at", "rat", "art", "tar"]);
        assert!(!validate_pair("at", "rat", &pool("ratxyzw"), &index));
    }

    #[test]
    fn unequal_lengths_fail() {
        let index = build(&["star", "tarts"]);
        assert!(!validate_pair("star", "tarts", &pool("starstx"), &index));
    }

    #[test]
    fn non_anagrams_fail() {
        let index = build(&["far", "rat"]);
        assert!(!validate_pair("far", "rat", &pool("fartxyz"), &index));
    }

    #[test]
    fn pool_must_supply_the_letters() {
        let index = build(&["abed", "bead"]);
        // No d in pool
        assert!(!validate_pair("abed", "bead", &pool("abexyzw"), &index));
    }

    #[test]
    fn each_word_checks_against_the_original_pool() {
        // One a,b,d,e each: both words draw the same letters, and both must
        // still validate because neither depletes the pool for the other
        let index = build(&["abed", "bead"]);
        assert!(validate_pair("abed", "bead", &pool("abdexyz"), &index));
    }

    #[test]
    fn inputs_are_scrubbed_before_checking() {
        let index = build(&["abed", "bead"]);
        let p = pool("abdexyz");
        assert!(validate_pair(" ABED ", "be-ad!", &p, &index));
    }

    #[test]
    fn malformed_input_is_invalid_not_fatal() {
        let index = build(&["abed", "bead"]);
        let p = pool("abdexyz");
        assert!(!validate_pair("", "bead", &p, &index));
        assert!(!validate_pair("123", "!?", &p, &index));
    }
}
