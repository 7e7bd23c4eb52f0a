//! Formatting utilities for terminal output

use crate::core::Pattern;

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    let mut result = String::with_capacity(20);
    let mut val = pattern.value();

    for _ in 0..Pattern::LENGTH {
        let digit = val % 3;
        result.push(match digit {
            0 => '⬜', // Absent
            1 => '🟨', // Present, misplaced
            2 => '🟩', // Correct
            _ => unreachable!(),
        });
        val /= 3;
    }

    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 6.0; // Roughly log2(64)
    create_progress_bar(entropy, max_entropy, width)
}

/// Join words into a wrapped, comma-separated block for terminal display
#[must_use]
pub fn word_columns<S: AsRef<str>>(words: &[S], per_line: usize) -> String {
    words
        .chunks(per_line.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(", ")
        })
        .collect::<Vec<String>>()
        .join("\n   ")
}
