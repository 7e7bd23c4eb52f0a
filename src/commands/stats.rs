//! Session statistics command
//!
//! Parses the round's letter pool and aggregates a batch of raw guesses.

use crate::anagram::{AnagramIndex, SessionStats, session_stats};
use crate::core::LetterPool;

/// Aggregate raw guesses for a session played with `letters`
///
/// # Errors
///
/// Returns an error if `letters` does not parse into a 7-letter pool.
/// Bad guesses are not errors; they land in the invalid list.
pub fn run_stats(
    raw_guesses: &[String],
    letters: &str,
    index: &AnagramIndex,
) -> Result<SessionStats, String> {
    let pool: LetterPool = letters
        .parse()
        .map_err(|e| format!("Invalid letter pool: {e}"))?;

    Ok(session_stats(raw_guesses, &pool, index))
}
