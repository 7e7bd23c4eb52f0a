//! Prime-product multiset fingerprints
//!
//! Each letter a-z maps to one of the first 26 primes; a word's fingerprint
//! is the product of its letters' primes, counted with multiplicity. Unique
//! prime factorization makes the fingerprint an exact multiset identity: two
//! words share a fingerprint iff they are anagrams, and `fp(pool) % fp(word)
//! == 0` iff the word's letters are drawable from the pool.
//!
//! Fingerprints are unbounded integers. Products grow multiplicatively with
//! word length and nothing in the corpus contract caps length, so `BigUint`
//! keeps the arithmetic exact instead of trusting a machine-width product.

use num_bigint::BigUint;
use std::fmt;

/// Multiset identity of a word's letters
pub type Fingerprint = BigUint;

/// Fixed bijection from the 26 letters to the first 26 primes
const LETTER_PRIMES: [u32; 26] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101,
];

/// Error type for fingerprinting non-normalized input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    /// A character outside a-z was encountered
    UnknownSymbol(char),
}

impl fmt::Display for FingerprintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol(c) => {
                write!(f, "Cannot fingerprint non-letter character {c:?}")
            }
        }
    }
}

impl std::error::Error for FingerprintError {}

/// The prime assigned to a lowercase letter, or `None` for any other byte
#[inline]
#[must_use]
pub(crate) fn letter_prime(letter: u8) -> Option<u32> {
    if letter.is_ascii_lowercase() {
        Some(LETTER_PRIMES[usize::from(letter - b'a')])
    } else {
        None
    }
}

/// Fingerprint a string of lowercase letters
///
/// # Errors
/// Returns `FingerprintError::UnknownSymbol` on the first character outside
/// a-z. Callers holding unvalidated input should normalize first (or use
/// [`fingerprint_lossy`]).
///
/// # Examples
/// ```
/// use wordgames::core::fingerprint;
///
/// assert_eq!(fingerprint("abed").unwrap(), fingerprint("bead").unwrap());
/// assert!(fingerprint("be4d").is_err());
/// ```
pub fn fingerprint(text: &str) -> Result<Fingerprint, FingerprintError> {
    let mut product = Fingerprint::from(1u32);
    for c in text.chars() {
        let prime = u8::try_from(c)
            .ok()
            .and_then(letter_prime)
            .ok_or(FingerprintError::UnknownSymbol(c))?;
        product *= prime;
    }
    Ok(product)
}

/// Fingerprint a string, silently ignoring anything that is not a letter
///
/// Uppercase letters are folded to lowercase. This is the path for corpus
/// words and letter pools that have already been validated or scrubbed.
///
/// # Examples
/// ```
/// use wordgames::core::{fingerprint, fingerprint_lossy};
///
/// assert_eq!(fingerprint_lossy("Be-ad!"), fingerprint("bead").unwrap());
/// ```
#[must_use]
pub fn fingerprint_lossy(text: &str) -> Fingerprint {
    let mut product = Fingerprint::from(1u32);
    for b in text.bytes() {
        if let Some(prime) = letter_prime(b.to_ascii_lowercase()) {
            product *= prime;
        }
    }
    product
}
