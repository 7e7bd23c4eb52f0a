//! Corpus loading utilities
//!
//! Provides functions to load word lists from files or use the embedded
//! constant. Malformed lines are skipped, not fatal.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Returns a vector of valid `Word` instances, skipping blank and
/// malformed lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordgames::corpus::loader::load_from_file;
///
/// let words = load_from_file("data/anagram_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use wordgames::corpus::loader::words_from_slice;
/// use wordgames::corpus::ANAGRAM_WORDS;
///
/// let words = words_from_slice(ANAGRAM_WORDS);
/// assert_eq!(words.len(), ANAGRAM_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["abed", "bead", "rat"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "abed");
        assert_eq!(words[1].text(), "bead");
        assert_eq!(words[2].text(), "rat");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["abed", "not a word", "", "rat"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "abed");
        assert_eq!(words[1].text(), "rat");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_embedded_corpus() {
        use crate::corpus::ANAGRAM_WORDS;

        let words = words_from_slice(ANAGRAM_WORDS);
        assert_eq!(words.len(), ANAGRAM_WORDS.len());
    }

    #[test]
    fn load_from_file_skips_blank_and_bad_lines() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "abed").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  bead  ").unwrap();
        writeln!(file, "b3ad").unwrap();
        file.flush().unwrap();

        let words = load_from_file(file.path()).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["abed", "bead"]);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }
}
