//! Pool exploration command
//!
//! Shows which anagram words a pool supports and the richest family in it.

use crate::anagram::AnagramIndex;
use crate::core::{LetterPool, Word};

/// Result of exploring a letter pool
pub struct FamiliesReport {
    pub pool: LetterPool,
    /// Every anagram-eligible word the pool supports, sorted
    pub eligible: Vec<Word>,
    /// A member of the largest spellable family, if any family fits
    pub richest: Option<Word>,
}

/// Explore the anagram families reachable from `letters`
///
/// # Errors
///
/// Returns an error if `letters` does not parse into a 7-letter pool.
pub fn run_families(index: &AnagramIndex, letters: &str) -> Result<FamiliesReport, String> {
    let pool: LetterPool = letters
        .parse()
        .map_err(|e| format!("Invalid letter pool: {e}"))?;

    let eligible = index.eligible_words(&pool).into_iter().collect();
    let richest = index.largest_family_member(&pool).cloned();

    Ok(FamiliesReport {
        pool,
        eligible,
        richest,
    })
}
