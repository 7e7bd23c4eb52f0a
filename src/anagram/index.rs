//! Anagram family index
//!
//! Groups a word corpus by letter-multiset identity. Built once per corpus,
//! immutable afterwards; the index owns its corpus snapshot and exposes only
//! read accessors.

use crate::core::{Fingerprint, LetterPool, Word};
use num_traits::Zero;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;

/// Minimum word length eligible for anagram grouping
const MIN_GROUP_LENGTH: usize = 3;

/// Fingerprint-keyed index over an owned word corpus
///
/// Each group holds all corpus words sharing one fingerprint, sorted
/// lexicographically. Groups of size 1 have no valid anagram partner and are
/// excluded from pool eligibility.
pub struct AnagramIndex {
    corpus: Vec<Word>,
    members: FxHashSet<Word>,
    groups: FxHashMap<Fingerprint, Vec<Word>>,
}

impl AnagramIndex {
    /// Build the index from a corpus snapshot
    ///
    /// Single pass over the corpus; words shorter than 3 letters are kept in
    /// the corpus but never grouped. Each group is sorted once after
    /// grouping completes.
    ///
    /// # Examples
    /// ```
    /// use wordgames::anagram::AnagramIndex;
    /// use wordgames::core::Word;
    ///
    /// let corpus = ["abed", "mouse", "bead"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let index = AnagramIndex::build(corpus);
    /// assert_eq!(index.corpus().len(), 3);
    /// ```
    #[must_use]
    pub fn build(corpus: Vec<Word>) -> Self {
        let mut groups: FxHashMap<Fingerprint, Vec<Word>> = FxHashMap::default();

        for word in &corpus {
            if word.letter_count() < MIN_GROUP_LENGTH {
                continue;
            }
            groups.entry(word.fingerprint()).or_default().push(word.clone());
        }

        // Sort once after grouping, not per insertion
        for group in groups.values_mut() {
            group.sort();
            group.dedup();
        }

        let members = corpus.iter().cloned().collect();

        Self {
            corpus,
            members,
            groups,
        }
    }

    /// Read-only view of the owned corpus
    #[must_use]
    pub fn corpus(&self) -> &[Word] {
        &self.corpus
    }

    /// Check whether a word is in the corpus
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.members.contains(word)
    }

    /// All members of the family with the given fingerprint
    ///
    /// Returns an empty slice for unknown fingerprints.
    #[must_use]
    pub fn family(&self, fingerprint: &Fingerprint) -> &[Word] {
        self.groups
            .get(fingerprint)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Number of distinct anagram families (including singletons)
    #[must_use]
    pub fn family_count(&self) -> usize {
        self.groups.len()
    }

    /// All words that could participate in at least one anagram pair drawn
    /// from `pool`
    ///
    /// A group qualifies iff it has more than one member and its fingerprint
    /// divides the pool fingerprint: divisibility holds exactly when every
    /// letter of the group's words, with multiplicity, is present in the
    /// pool. The result is the union of all qualifying groups, in sorted
    /// order; empty when nothing qualifies.
    ///
    /// # Examples
    /// ```
    /// use wordgames::anagram::AnagramIndex;
    /// use wordgames::core::Word;
    ///
    /// let corpus = ["abed", "mouse", "bead", "baled", "rat", "blade"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let index = AnagramIndex::build(corpus);
    ///
    /// let pool = "abdelxy".parse().unwrap();
    /// let words: Vec<String> = index
    ///     .eligible_words(&pool)
    ///     .iter()
    ///     .map(ToString::to_string)
    ///     .collect();
    /// assert_eq!(words, ["abed", "baled", "bead", "blade"].map(String::from));
    /// ```
    #[must_use]
    pub fn eligible_words(&self, pool: &LetterPool) -> BTreeSet<Word> {
        let pool_fingerprint = pool.fingerprint();
        let mut eligible = BTreeSet::new();

        for (key, words) in &self.groups {
            if words.len() > 1 && (&pool_fingerprint % key).is_zero() {
                eligible.extend(words.iter().cloned());
            }
        }

        eligible
    }

    /// One word from the largest anagram family spellable from `pool`
    ///
    /// Containment is checked by multiset subtraction against the group's
    /// representative (its lexicographically first member). Tie-break is
    /// deterministic: larger family first, then lower fingerprint. Returns
    /// `None` when no family of at least two words qualifies.
    #[must_use]
    pub fn largest_family_member(&self, pool: &LetterPool) -> Option<&Word> {
        let mut best: Option<(&Fingerprint, &Vec<Word>)> = None;

        for (key, words) in &self.groups {
            if words.len() < 2 || !pool.can_spell(&words[0]) {
                continue;
            }

            let better = match best {
                None => true,
                Some((best_key, best_words)) => {
                    words.len() > best_words.len()
                        || (words.len() == best_words.len() && key < best_key)
                }
            };
            if better {
                best = Some((key, words));
            }
        }

        best.map(|(_, words)| &words[0])
    }
}
