//! Anagram game engine
//!
//! Groups a corpus into anagram families by prime fingerprint, validates
//! guessed word pairs against a 7-letter pool, samples playable pools, and
//! aggregates per-session statistics.

mod index;
mod sampler;
mod stats;
mod validator;

pub use index::AnagramIndex;
pub use sampler::{
    DEFAULT_MAX_ATTEMPTS, Distribution, SCRABBLE_TILES, SampleError, sample_pool,
    sample_pool_with,
};
pub use stats::{SessionStats, parse_guess, session_stats};
pub use validator::validate_pair;
