//! Word Game Engines
//!
//! Backs two word-puzzle solvers: an anagram game built on prime-product
//! multiset fingerprints, and a Wordle assistant built on information theory
//! over a precomputed feedback index.
//!
//! # Quick Start
//!
//! ```rust
//! use wordgames::anagram::{AnagramIndex, validate_pair};
//! use wordgames::core::{LetterPool, Word};
//!
//! let corpus = ["abed", "bead"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let index = AnagramIndex::build(corpus);
//! let pool: LetterPool = "abdexyz".parse().unwrap();
//!
//! assert!(validate_pair("abed", "bead", &pool, &index));
//! ```

// Core domain types
pub mod core;

// Anagram game engine
pub mod anagram;

// Wordle assistant engine
pub mod wordle;

// Word corpora
pub mod corpus;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
