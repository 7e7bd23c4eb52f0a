//! Display functions for command results

use super::formatters::{entropy_bar, pattern_to_emoji, word_columns};
use crate::anagram::SessionStats;
use crate::commands::{AnalysisReport, FamiliesReport, NarrowReport, RankReport, SampleReport};
use crate::core::Word;
use colored::Colorize;

/// Print a sampled letter pool and the words it supports
pub fn print_sample_report(report: &SampleReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LETTER POOL:".bright_cyan().bold(),
        report.pool.to_string().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n🎲 Drawn via {:?}, supports {} anagram words:",
        report.distribution,
        report.eligible.len()
    );
    println!("   {}", word_columns(&word_texts(&report.eligible), 8));
}

/// Print the anagram families reachable from a pool
pub fn print_families_report(report: &FamiliesReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "POOL EXPLORER:".bright_cyan().bold(),
        report.pool.to_string().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if report.eligible.is_empty() {
        println!("\n{}", "No anagram pairs can be formed from this pool".red());
        return;
    }

    println!("\n📚 {} playable words:", report.eligible.len());
    println!("   {}", word_columns(&word_texts(&report.eligible), 8));

    if let Some(richest) = &report.richest {
        println!(
            "\n⭐ Richest family contains: {}",
            richest.text().to_uppercase().bright_yellow().bold()
        );
    }
}

/// Print the full statistics block for a session
pub fn print_session_stats(stats: &SessionStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SESSION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Scoring:".bright_cyan().bold());
    println!(
        "   Score:       {}",
        stats.score.to_string().bright_yellow().bold()
    );
    println!("   Accuracy:    {}%", stats.accuracy);
    println!("   Skill:       {}%", stats.skill);

    println!("\n✅ {} valid pairs:", stats.valid.len());
    for (first, second) in &stats.valid {
        println!("   {} / {}", first.text().green(), second.text().green());
    }

    println!("\n❌ {} invalid guesses:", stats.invalid.len());
    for (first, second) in &stats.invalid {
        if first.is_empty() && second.is_empty() {
            println!("   {}", "(unparseable)".bright_black());
        } else {
            println!("   {} / {}", first.red(), second.red());
        }
    }

    let guessed: Vec<&Word> = stats.guessed.iter().collect();
    println!("\n🎯 Guessed {} words:", guessed.len());
    if !guessed.is_empty() {
        println!("   {}", word_columns(&word_texts_ref(&guessed), 8));
    }

    let missed: Vec<&Word> = stats.not_guessed.iter().collect();
    println!("\n💤 Missed {} words:", missed.len());
    if !missed.is_empty() {
        println!("   {}", word_columns(&word_texts_ref(&missed), 8));
    }
}

/// Print the result of narrowing a candidate list
pub fn print_narrow_report(report: &NarrowReport) {
    println!("\n{}", "─".repeat(60).cyan());
    match &report.observation {
        Some((guess, pattern)) => println!(
            "Observed: {} {}",
            guess.to_uppercase().bright_yellow().bold(),
            pattern_to_emoji(*pattern)
        ),
        None => println!("{}", "No observation yet".bright_black()),
    }
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\nCandidates: {} → {}",
        report.before,
        report.candidates.len().to_string().bright_yellow().bold()
    );

    if report.candidates.is_empty() {
        println!("{}", "No candidates remain, check the observations".red());
    } else {
        println!("   {}", word_columns(&report.candidates, 8));
    }
}

/// Print a guess ranking
pub fn print_rank_report(report: &RankReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GUESS RANKING".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} guesses scored against {} candidate answers:",
        report.guess_count, report.answer_count
    );

    for (i, ranked) in report.ranked.iter().enumerate() {
        let bar = entropy_bar(ranked.score, 30);
        println!(
            "   {:>3}. {} [{}] {}",
            i + 1,
            ranked.word.to_uppercase().bold(),
            bar.green(),
            format!("{:.3} bits", ranked.score).bright_yellow()
        );
    }
}

/// Print the result of analyzing a single guess
pub fn print_analysis_report(report: &AnalysisReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        report.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(report.entropy, 30);

    println!("\n📊 Against {} possible answers:", report.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", report.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        report.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        report.expected_remaining
    );
}

fn word_texts(words: &[Word]) -> Vec<&str> {
    words.iter().map(Word::text).collect()
}

fn word_texts_ref<'a>(words: &'a [&Word]) -> Vec<&'a str> {
    words.iter().map(|w| w.text()).collect()
}
