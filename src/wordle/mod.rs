//! Wordle assistant engine
//!
//! Consumes a precomputed feedback index (guess → pattern → consistent
//! answers), narrows candidate answer sets by accumulated feedback, and
//! ranks candidate guesses by expected information gain.

mod feedback;
mod narrower;
mod ranker;

pub use feedback::{FeedbackIndex, FeedbackIndexError};
pub use narrower::{NarrowError, narrow_candidates};
pub use ranker::{FINALIST_SCORE, RankedGuess, guess_entropy, rank_guesses, shannon_entropy};
