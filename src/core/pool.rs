//! The 7-letter pool available for forming anagram pairs
//!
//! A LetterPool is an ordered multiset of exactly 7 lowercase letters
//! (repeats allowed). It answers two questions: the pool's fingerprint (for
//! the divisibility shortcut) and per-letter multiset containment (for the
//! remove-as-you-match validation path).

use super::fingerprint::{Fingerprint, fingerprint_lossy};
use super::word::Word;
use std::fmt;
use std::str::FromStr;

/// Number of letters in a pool
pub const POOL_SIZE: usize = 7;

/// A fixed multiset of 7 lowercase letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    letters: [u8; POOL_SIZE],
}

/// Error type for invalid pools
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    WrongSize(usize),
    InvalidCharacters,
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongSize(len) => {
                write!(f, "Pool must contain exactly {POOL_SIZE} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Pool must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for PoolError {}

impl LetterPool {
    /// Create a pool from 7 lowercase letter bytes
    ///
    /// # Errors
    /// Returns `PoolError::InvalidCharacters` if any byte is not a-z.
    pub fn new(letters: [u8; POOL_SIZE]) -> Result<Self, PoolError> {
        if !letters.iter().all(u8::is_ascii_lowercase) {
            return Err(PoolError::InvalidCharacters);
        }
        Ok(Self { letters })
    }

    /// Get the pool letters in draw order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; POOL_SIZE] {
        &self.letters
    }

    /// Prime-product fingerprint of the whole pool
    ///
    /// A corpus word's letters are fully drawable from this pool iff the
    /// word's fingerprint divides the pool's.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        fingerprint_lossy(std::str::from_utf8(&self.letters).unwrap_or_default())
    }

    /// Check whether every letter of `word`, with multiplicity, can be drawn
    /// from this pool
    ///
    /// Each call works against a fresh copy of the pool; spelling one word
    /// never depletes availability for another.
    ///
    /// # Examples
    /// ```
    /// use wordgames::core::{LetterPool, Word};
    ///
    /// let pool: LetterPool = "potsria".parse().unwrap();
    /// assert!(pool.can_spell(&Word::new("stop").unwrap()));
    /// assert!(!pool.can_spell(&Word::new("tarts").unwrap())); // needs two t's
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &Word) -> bool {
        let mut available = [0u8; 26];
        for &letter in &self.letters {
            available[usize::from(letter - b'a')] += 1;
        }

        for letter in word.text().bytes() {
            let slot = &mut available[usize::from(letter - b'a')];
            if *slot == 0 {
                return false;
            }
            *slot -= 1;
        }
        true
    }
}

impl FromStr for LetterPool {
    type Err = PoolError;

    /// Parse a pool from user input like `"potsria"` or `"p,o,t,s,r,i,a"`
    ///
    /// Separators (commas, whitespace) are stripped; exactly 7 letters must
    /// remain.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: Vec<u8> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    Ok(c.to_ascii_lowercase() as u8)
                } else {
                    Err(PoolError::InvalidCharacters)
                }
            })
            .collect::<Result<_, _>>()?;

        let letters: [u8; POOL_SIZE] = cleaned
            .as_slice()
            .try_into()
            .map_err(|_| PoolError::WrongSize(cleaned.len()))?;

        Self::new(letters)
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fingerprint;

    fn pool(s: &str) -> LetterPool {
        s.parse().unwrap()
    }

    #[test]
    fn parse_plain_and_separated_forms() {
        assert_eq!(pool("potsria"), pool("p,o,t,s,r,i,a"));
        assert_eq!(pool("potsria"), pool(" P O T S R I A "));
    }

    #[test]
    fn parse_rejects_wrong_sizes() {
        assert_eq!(
            "pots".parse::<LetterPool>(),
            Err(PoolError::WrongSize(4))
        );
        assert_eq!(
            "potsriaa".parse::<LetterPool>(),
            Err(PoolError::WrongSize(8))
        );
        assert_eq!("".parse::<LetterPool>(), Err(PoolError::WrongSize(0)));
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(
            "pot5ria".parse::<LetterPool>(),
            Err(PoolError::InvalidCharacters)
        );
    }

    #[test]
    fn repeats_are_allowed() {
        let p = pool("aabbccd");
        assert_eq!(p.letters(), b"aabbccd");
    }

    #[test]
    fn pool_fingerprint_matches_letter_product() {
        assert_eq!(pool("potsria").fingerprint(), fingerprint("potsria").unwrap());
    }

    #[test]
    fn can_spell_respects_multiplicity() {
        let p = pool("potsria");

        assert!(p.can_spell(&Word::new("stop").unwrap()));
        assert!(p.can_spell(&Word::new("rat").unwrap()));
        assert!(p.can_spell(&Word::new("potsria").unwrap()));

        // Needs two t's, pool has one
        assert!(!p.can_spell(&Word::new("tarts").unwrap()));
        // Letter not in pool at all
        assert!(!p.can_spell(&Word::new("mouse").unwrap()));
        // Longer than the pool
        assert!(!p.can_spell(&Word::new("airports").unwrap()));
    }

    #[test]
    fn can_spell_does_not_mutate_the_pool() {
        let p = pool("abdexyz");
        let abed = Word::new("abed").unwrap();
        let bead = Word::new("bead").unwrap();

        // Both words draw from the original pool independently
        assert!(p.can_spell(&abed));
        assert!(p.can_spell(&bead));
        assert!(p.can_spell(&abed));
    }

    #[test]
    fn can_spell_agrees_with_divisibility() {
        use num_traits::Zero;

        let p = pool("potsria");
        for text in ["stop", "tarts", "rat", "art", "mouse", "star", "opts"] {
            let word = Word::new(text).unwrap();
            let divides = (&p.fingerprint() % word.fingerprint()).is_zero();
            assert_eq!(p.can_spell(&word), divides, "disagreement on {text}");
        }
    }

    #[test]
    fn display_concatenates_letters() {
        assert_eq!(pool("potsria").to_string(), "potsria");
    }
}
