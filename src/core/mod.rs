//! Core domain types for the word game engines
//!
//! This module contains the fundamental domain types with no I/O concerns.
//! All types here are pure, testable, and have clear mathematical properties.

mod fingerprint;
mod pattern;
mod pool;
mod word;

pub use fingerprint::{Fingerprint, FingerprintError, fingerprint, fingerprint_lossy};
pub use pattern::Pattern;
pub use pool::{LetterPool, POOL_SIZE, PoolError};
pub use word::{Word, WordError};
