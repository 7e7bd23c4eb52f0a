//! Guess analysis command
//!
//! Analyzes the entropy and information content of a single guess.

use crate::wordle::{FeedbackIndex, guess_entropy};

/// Result of analyzing a guess
pub struct AnalysisReport {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub total_candidates: usize,
}

/// Analyze the entropy of a guess against a set of candidate answers
///
/// # Errors
///
/// Returns an error if the feedback index does not know the guess.
pub fn run_analyze(
    index: &FeedbackIndex,
    word: &str,
    answers: &[String],
) -> Result<AnalysisReport, String> {
    let word = word.to_lowercase();

    if !index.contains_guess(&word) {
        return Err(format!("Word '{word}' not in the feedback index"));
    }

    let answers: Vec<String> = answers.iter().map(|a| a.to_lowercase()).collect();
    let entropy = guess_entropy(&word, &answers, index);

    let total_candidates = answers.len();
    let expected_reduction = entropy.exp2();
    let expected_remaining = total_candidates as f64 / expected_reduction;

    Ok(AnalysisReport {
        word,
        entropy,
        expected_reduction,
        expected_remaining,
        total_candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn sample_index() -> FeedbackIndex {
        FeedbackIndex::from_entries([(
            "split".to_string(),
            vec![
                (Pattern::new(0), strings(&["aback", "abase"])),
                (Pattern::new(1), strings(&["abate", "abbey"])),
            ],
        )])
    }

    #[test]
    fn analyze_known_guess() {
        let index = sample_index();
        let answers = strings(&["aback", "abase", "abate", "abbey"]);

        let report = run_analyze(&index, "SPLIT", &answers).unwrap();
        assert_eq!(report.word, "split");
        assert_eq!(report.total_candidates, 4);
        assert!((report.entropy - 1.0).abs() < 0.001);
        assert!((report.expected_reduction - 2.0).abs() < 0.01);
        assert!((report.expected_remaining - 2.0).abs() < 0.01);
    }

    #[test]
    fn analyze_unknown_guess_is_an_error() {
        let index = sample_index();
        let answers = strings(&["aback"]);
        assert!(run_analyze(&index, "zonal", &answers).is_err());
    }

    #[test]
    fn entropy_is_bounded_by_candidates() {
        let index = sample_index();
        let answers = strings(&["aback", "abase", "abate", "abbey"]);

        let report = run_analyze(&index, "split", &answers).unwrap();
        assert!(report.entropy >= 0.0);
        assert!(report.entropy <= (answers.len() as f64).log2());
        assert!(report.expected_remaining >= 0.0);
        assert!(report.expected_remaining <= answers.len() as f64);
    }
}
