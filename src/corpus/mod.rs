//! Word corpora for the anagram game
//!
//! Provides the embedded default corpus compiled into the binary plus
//! loading utilities for alternate corpora on disk.

mod embedded;
pub mod loader;

pub use embedded::{ANAGRAM_WORDS, ANAGRAM_WORDS_COUNT};
