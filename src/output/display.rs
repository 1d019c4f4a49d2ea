//! Display functions for command results
//!
//! Reports go to stderr so that generated code written to stdout stays clean.

use super::formatters::{create_progress_bar, format_bytes, percentage};
use crate::commands::{GenerateResult, StatsResult, VerifyReport};
use colored::Colorize;

/// Print the summary of a generation run
pub fn print_generate_result(result: &GenerateResult) {
    let destination = if result.output == crate::commands::generate::STDOUT {
        "stdout".to_string()
    } else {
        result.output.clone()
    };

    eprintln!(
        "{} {} reserved words → {} ({})",
        "Generated".green().bold(),
        result.words,
        destination.bright_yellow(),
        format_bytes(result.bytes)
    );

    if result.stats.guess_matches > 0 {
        eprintln!(
            "   {} {} leaves skip their tail comparison",
            "note:".yellow(),
            result.stats.guess_matches
        );
    }
}

/// Print the result of a verification run
pub fn print_verify_report(report: &VerifyReport) {
    eprintln!("\n{}", "═".repeat(60).cyan());
    eprintln!(" {} ", "VERIFICATION".bright_cyan().bold());
    eprintln!("{}", "═".repeat(60).cyan());

    eprintln!("\n   Words checked:    {}", report.words_checked);
    eprintln!(
        "   Guessed words:    {} ({:.1}%)",
        report.words_guessed,
        percentage(report.words_guessed, report.words_checked)
    );
    eprintln!("   Probes checked:   {}", report.probes_checked);
    eprintln!(
        "   False guesses:    {} ({:.2}% of probes)",
        format!("{}", report.false_guesses).yellow(),
        percentage(report.false_guesses, report.probes_checked)
    );
    eprintln!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    eprintln!();
    if report.passed() {
        eprintln!("{}", "✅ Decision tree verified".green().bold());
    } else {
        eprintln!(
            "{}",
            format!("❌ {} failures", report.failures.len()).red().bold()
        );
        for failure in report.failures.iter().take(20) {
            eprintln!("   {failure}");
        }
    }
}

/// Print the shape of a decision tree
pub fn print_stats_result(result: &StatsResult) {
    eprintln!("\n{}", "═".repeat(60).cyan());
    eprintln!(" {} ", "DECISION TREE".bright_cyan().bold());
    eprintln!("{}", "═".repeat(60).cyan());

    eprintln!("\n📊 {}", "Shape:".bright_cyan().bold());
    eprintln!("   Words:            {}", result.total_words);
    eprintln!("   Nodes:            {}", result.tree.nodes);
    eprintln!("   Max depth:        {}", result.tree.max_depth);
    eprintln!("   Switches:         {}", result.tree.switches);
    eprintln!("   If-chains:        {}", result.tree.if_chains);
    eprintln!("   Tail comparisons: {}", result.tree.verifies);
    eprintln!(
        "   Guess leaves:     {}",
        format!("{}", result.tree.guess_matches).yellow()
    );

    eprintln!("\n📈 {}", "Lengths:".bright_cyan().bold());
    let largest = result
        .length_histogram
        .iter()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(0);
    for &(length, count) in &result.length_histogram {
        let bar = create_progress_bar(count as f64, largest as f64, 30);
        eprintln!("   {length:2}: {} {count:3}", bar.green());
    }

    if !result.guessed.is_empty() {
        eprintln!("\n⚠️  {}", "Guessed words:".yellow().bold());
        for (word, unverified) in &result.guessed {
            eprintln!("   {word} ({unverified} columns unverified)");
        }
    }
}
