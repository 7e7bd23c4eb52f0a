//! Letter pool sampling command
//!
//! Draws a playable pool and reports the anagram words it supports.

use crate::anagram::{AnagramIndex, Distribution, SampleError, sample_pool};
use crate::core::{LetterPool, Word};

/// Result of sampling a letter pool
pub struct SampleReport {
    pub pool: LetterPool,
    pub distribution: Distribution,
    /// Every anagram-eligible word the pool supports, sorted
    pub eligible: Vec<Word>,
}

/// Sample a pool supporting at least `min_eligible` anagram words
///
/// # Errors
///
/// Returns `SampleError::Unsatisfiable` when the retry budget runs out;
/// the error carries the best pool found for callers that want a fallback.
pub fn run_sample(
    index: &AnagramIndex,
    min_eligible: usize,
    distribution: Distribution,
    max_attempts: usize,
) -> Result<SampleReport, SampleError> {
    let pool = sample_pool(index, min_eligible, distribution, max_attempts)?;
    let eligible = index.eligible_words(&pool).into_iter().collect();

    Ok(SampleReport {
        pool,
        distribution,
        eligible,
    })
}
