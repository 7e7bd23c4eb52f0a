//! The precomputed feedback index
//!
//! Maps each guess to, for each feedback pattern, the set of answers
//! consistent with that observation. The index is built offline; this module
//! only loads and serves it. Loaded exactly once per process, immutable
//! afterwards; concurrent readers need no locking.

use crate::core::Pattern;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Answer sets keyed by pattern, for one guess
type PatternBuckets = FxHashMap<Pattern, FxHashSet<String>>;

/// Guess → pattern → consistent-answer-set table
///
/// The persisted form is JSON: `{guess: {pattern: [answer, ...]}}` with
/// patterns as 5-digit strings over `{0,1,2}`.
pub struct FeedbackIndex {
    table: FxHashMap<String, PatternBuckets>,
}

/// Error type for a missing or unreadable feedback index
#[derive(Debug)]
pub enum FeedbackIndexError {
    /// The artifact could not be opened
    Unavailable { path: PathBuf, source: io::Error },
    /// The artifact was read but did not have the expected shape
    Corrupt { path: PathBuf, detail: String },
}

impl fmt::Display for FeedbackIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { path, source } => {
                write!(f, "Feedback index {} unavailable: {source}", path.display())
            }
            Self::Corrupt { path, detail } => {
                write!(f, "Feedback index {} corrupt: {detail}", path.display())
            }
        }
    }
}

impl std::error::Error for FeedbackIndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable { source, .. } => Some(source),
            Self::Corrupt { .. } => None,
        }
    }
}

impl FeedbackIndex {
    /// Load the index from its JSON artifact
    ///
    /// Intended to run once at startup; every Wordle operation borrows the
    /// loaded index immutably.
    ///
    /// # Errors
    /// Returns `Unavailable` when the file cannot be opened and `Corrupt`
    /// when it cannot be deserialized into the expected nested-map shape
    /// (including unparseable pattern keys). A missing index must surface
    /// here, never as silently empty results downstream.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FeedbackIndexError> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| FeedbackIndexError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let raw: HashMap<String, HashMap<String, Vec<String>>> =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                FeedbackIndexError::Corrupt {
                    path: path.to_path_buf(),
                    detail: e.to_string(),
                }
            })?;

        Self::from_raw(raw).map_err(|detail| FeedbackIndexError::Corrupt {
            path: path.to_path_buf(),
            detail,
        })
    }

    fn from_raw(raw: HashMap<String, HashMap<String, Vec<String>>>) -> Result<Self, String> {
        let mut table: FxHashMap<String, PatternBuckets> = FxHashMap::default();

        for (guess, buckets) in raw {
            let guess = guess.to_lowercase();
            let mut parsed: PatternBuckets = PatternBuckets::default();

            for (code, answers) in buckets {
                let pattern = Pattern::from_code(&code)
                    .ok_or_else(|| format!("bad pattern key {code:?} under guess {guess:?}"))?;
                let answers: FxHashSet<String> =
                    answers.into_iter().map(|a| a.to_lowercase()).collect();
                parsed.insert(pattern, answers);
            }

            table.insert(guess, parsed);
        }

        Ok(Self { table })
    }

    /// Build an index directly from entries
    ///
    /// Useful for tests and embedders that already hold the table in memory.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<(Pattern, Vec<String>)>)>,
    {
        let mut table: FxHashMap<String, PatternBuckets> = FxHashMap::default();

        for (guess, buckets) in entries {
            let parsed = buckets
                .into_iter()
                .map(|(pattern, answers)| (pattern, answers.into_iter().collect()))
                .collect();
            table.insert(guess.to_lowercase(), parsed);
        }

        Self { table }
    }

    /// Check whether the index knows a guess
    #[must_use]
    pub fn contains_guess(&self, guess: &str) -> bool {
        self.table.contains_key(guess)
    }

    /// All pattern buckets recorded for a guess
    #[must_use]
    pub fn patterns(&self, guess: &str) -> Option<&PatternBuckets> {
        self.table.get(guess)
    }

    /// The answers consistent with observing `pattern` after `guess`
    #[must_use]
    pub fn bucket(&self, guess: &str, pattern: Pattern) -> Option<&FxHashSet<String>> {
        self.table.get(guess)?.get(&pattern)
    }

    /// Iterate over every guess the index knows
    pub fn guesses(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    /// Number of guesses in the index
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.table.len()
    }

    /// True when the index holds no guesses at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn pattern(code: &str) -> Pattern {
        Pattern::from_code(code).unwrap()
    }

    fn write_artifact(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn load_round_trips_the_artifact() {
        let file = write_artifact(
            r#"{"crane": {"00000": ["moist", "humid"], "22222": ["crane"]}}"#,
        );

        let index = FeedbackIndex::load(file.path()).unwrap();
        assert_eq!(index.guess_count(), 1);
        assert!(index.contains_guess("crane"));

        let bucket = index.bucket("crane", pattern("00000")).unwrap();
        assert_eq!(bucket.len(), 2);
        assert!(bucket.contains("moist"));

        let solved = index.bucket("crane", pattern("22222")).unwrap();
        assert!(solved.contains("crane"));
    }

    #[test]
    fn load_lowercases_words() {
        let file = write_artifact(r#"{"CRANE": {"00000": ["MOIST"]}}"#);
        let index = FeedbackIndex::load(file.path()).unwrap();
        assert!(index.contains_guess("crane"));
        assert!(
            index
                .bucket("crane", pattern("00000"))
                .unwrap()
                .contains("moist")
        );
    }

    #[test]
    fn missing_artifact_is_unavailable() {
        let result = FeedbackIndex::load("/definitely/not/here.json");
        assert!(matches!(
            result,
            Err(FeedbackIndexError::Unavailable { .. })
        ));
    }

    #[test]
    fn malformed_json_is_corrupt() {
        let file = write_artifact("{not json");
        assert!(matches!(
            FeedbackIndex::load(file.path()),
            Err(FeedbackIndexError::Corrupt { .. })
        ));
    }

    #[test]
    fn bad_pattern_key_is_corrupt() {
        let file = write_artifact(r#"{"crane": {"0012": ["moist"]}}"#);
        assert!(matches!(
            FeedbackIndex::load(file.path()),
            Err(FeedbackIndexError::Corrupt { .. })
        ));

        let file = write_artifact(r#"{"crane": {"00123": ["moist"]}}"#);
        assert!(matches!(
            FeedbackIndex::load(file.path()),
            Err(FeedbackIndexError::Corrupt { .. })
        ));
    }

    #[test]
    fn unknown_lookups_are_none() {
        let index = FeedbackIndex::from_entries([(
            "crane".to_string(),
            vec![(pattern("00000"), vec!["moist".to_string()])],
        )]);

        assert!(index.bucket("slate", pattern("00000")).is_none());
        assert!(index.bucket("crane", pattern("11111")).is_none());
        assert!(index.patterns("slate").is_none());
    }

    #[test]
    fn empty_index_reports_empty() {
        let entries: Vec<(String, Vec<(Pattern, Vec<String>)>)> = Vec::new();
        let index = FeedbackIndex::from_entries(entries);
        assert!(index.is_empty());
        assert_eq!(index.guess_count(), 0);
    }
}
