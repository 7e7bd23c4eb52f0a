//! Corpus word representation
//!
//! A Word is a validated lowercase alphabetic token. Corpus words are
//! typically 3-7 letters, but any non-empty length is representable;
//! grouping and pair validation enforce their own length rules.

use super::fingerprint::{Fingerprint, fingerprint_lossy};
use std::fmt;

/// A lowercase alphabetic word
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased; anything other than ASCII letters is rejected.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - It contains non-ASCII characters
    /// - It contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordgames::core::Word;
    ///
    /// let word = Word::new("Bead").unwrap();
    /// assert_eq!(word.text(), "bead");
    ///
    /// assert!(Word::new("be4d").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Create a Word from raw player input by stripping everything that is
    /// not a letter and lowercasing the rest
    ///
    /// Returns `None` when no letters survive the scrub.
    ///
    /// # Examples
    /// ```
    /// use wordgames::core::Word;
    ///
    /// assert_eq!(Word::scrub(" Be-ad! ").unwrap().text(), "bead");
    /// assert!(Word::scrub("123 !?").is_none());
    /// ```
    #[must_use]
    pub fn scrub(raw: &str) -> Option<Self> {
        let text: String = raw
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        if text.is_empty() { None } else { Some(Self { text }) }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.text.len()
    }

    /// Prime-product multiset fingerprint of the word's letters
    ///
    /// Two words share a fingerprint iff they are exact anagrams of each
    /// other (unique prime factorization).
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        fingerprint_lossy(&self.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
