//! Letter pool sampling
//!
//! Draws 7-letter pools under a chosen distribution until a pool supports
//! enough anagram-eligible words. Rejection sampling has no a-priori bound,
//! so every call carries an explicit retry budget; exhausting it reports the
//! best pool seen instead of looping forever.

use crate::anagram::AnagramIndex;
use crate::core::{LetterPool, POOL_SIZE};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// The standard 98-tile letter bag (blanks excluded)
pub const SCRABBLE_TILES: &[u8] =
    b"aaaaaaaaabbccddddeeeeeeeeeeeeffggghhiiiiiiiiijkllllmmnnnnnnooooooooppqrrrrrrssssttttttuuuuvvwwxyyz";

/// Default retry budget for pool sampling
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// How pool letters are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    /// 7 independent draws, uniform over a-z, with replacement
    Uniform,
    /// 7 draws without replacement from the fixed 98-tile bag
    ScrabbleTiles,
}

impl Distribution {
    /// Parse a distribution from its request name
    ///
    /// Supported names: "uniform", "scrabble". Case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "uniform" => Some(Self::Uniform),
            "scrabble" => Some(Self::ScrabbleTiles),
            _ => None,
        }
    }
}

/// Error type for sampling failures
#[derive(Debug, Clone)]
pub enum SampleError {
    /// The retry budget ran out before any pool reached the requested
    /// word count. Carries the best pool seen so callers can fall back.
    Unsatisfiable {
        attempts: usize,
        best: LetterPool,
        best_count: usize,
    },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsatisfiable {
                attempts,
                best,
                best_count,
            } => write!(
                f,
                "No pool reached the requested word count in {attempts} attempts \
                 (best: {best} with {best_count} words)"
            ),
        }
    }
}

impl std::error::Error for SampleError {}

/// Sample a letter pool supporting at least `min_eligible` anagram words
///
/// Draws pools under `distribution` and evaluates each against the index
/// until one supports at least `min_eligible` eligible words or the retry
/// budget runs out.
///
/// # Errors
/// Returns `SampleError::Unsatisfiable` after `max_attempts` rejected draws;
/// the error carries the best pool found.
pub fn sample_pool(
    index: &AnagramIndex,
    min_eligible: usize,
    distribution: Distribution,
    max_attempts: usize,
) -> Result<LetterPool, SampleError> {
    sample_pool_with(index, min_eligible, distribution, max_attempts, &mut rand::rng())
}

/// [`sample_pool`] with a caller-supplied random source
///
/// Seeded rngs make sampling reproducible in tests.
///
/// # Errors
/// Returns `SampleError::Unsatisfiable` after `max_attempts` rejected draws.
pub fn sample_pool_with<R: Rng>(
    index: &AnagramIndex,
    min_eligible: usize,
    distribution: Distribution,
    max_attempts: usize,
    rng: &mut R,
) -> Result<LetterPool, SampleError> {
    let attempts = max_attempts.max(1);
    let mut best: Option<(LetterPool, usize)> = None;

    for _ in 0..attempts {
        let pool = match distribution {
            Distribution::Uniform => draw_uniform(rng),
            Distribution::ScrabbleTiles => draw_scrabble(rng),
        };

        let count = index.eligible_words(&pool).len();
        if count >= min_eligible {
            return Ok(pool);
        }

        if best.as_ref().is_none_or(|(_, best_count)| count > *best_count) {
            best = Some((pool, count));
        }
    }

    let (best, best_count) = best.expect("at least one draw was made");
    Err(SampleError::Unsatisfiable {
        attempts,
        best,
        best_count,
    })
}

fn draw_uniform<R: Rng>(rng: &mut R) -> LetterPool {
    let mut letters = [0u8; POOL_SIZE];
    for slot in &mut letters {
        *slot = b'a' + rng.random_range(0..26u8);
    }
    LetterPool::new(letters).expect("drawn letters are lowercase")
}

fn draw_scrabble<R: Rng>(rng: &mut R) -> LetterPool {
    let mut bag = SCRABBLE_TILES.to_vec();
    let (drawn, _) = bag.partial_shuffle(rng, POOL_SIZE);
    let letters: [u8; POOL_SIZE] = (&*drawn).try_into().expect("drew exactly 7 tiles");
    LetterPool::new(letters).expect("tiles are lowercase")
}
