//! Display functions for command results

use super::formatters::{create_progress_bar, format_duration, score_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, ComparisonRow, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({} candidates, {} strategy)",
        result.secret.bright_yellow().bold(),
        result.initial_pool,
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nQuery {}: {} {} {}/{}",
            turn,
            step.word.bright_white().bold(),
            score_bar(step.score, step.word_len).green(),
            step.score.value(),
            step.word_len
        );

        if verbose {
            match step.candidates_after {
                Some(after) => println!(
                    "  Candidates: {} → {}",
                    step.candidates_before, after
                ),
                None => println!("  Candidates: {} → found", step.candidates_before),
            }
            println!(
                "  Split:      {} groups, worst case {}",
                step.score_groups, step.worst_case
            );
        }
    }

    println!();
    match (&result.answer, result.success) {
        (Some(answer), true) => println!(
            "{}",
            format!(
                "✅ Found {answer} in {} {}",
                result.queries,
                plural(result.queries, "query", "queries")
            )
            .green()
            .bold()
        ),
        _ => println!(
            "{}",
            format!(
                "❌ Candidates exhausted after {} {}: {} is not in the word list",
                result.queries,
                plural(result.queries, "query", "queries"),
                result.secret
            )
            .red()
            .bold()
        ),
    }
}

/// Print how a guess splits the candidate list
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SPLIT ANALYSIS:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} candidates:", result.total_candidates);
    if !result.in_pool {
        println!("   {}", "(guess is not itself a candidate)".bright_black());
    }
    println!(
        "   Worst case:  {}",
        format!("{} remain", result.worst_case).bright_yellow()
    );
    println!(
        "   Expected:    {:.2} candidates remain",
        result.expected_remaining
    );

    println!("\n📈 {}", "Groups by match count:".bright_cyan().bold());
    for &(score, size) in &result.groups {
        let bar = create_progress_bar(size as f64, result.total_candidates as f64, 30);
        println!(
            "   {} {:>2}: {} {size}",
            score_bar(score, result.word_len),
            score.value(),
            bar.green()
        );
    }
}

/// Print the strategy comparison table
pub fn print_comparison(rows: &[ComparisonRow]) {
    println!("\n{}", "═".repeat(72).cyan());
    println!(" {} ", "STRATEGY COMPARISON".bright_cyan().bold());
    println!("{}", "═".repeat(72).cyan());

    let mut current = "";
    for row in rows {
        if row.fixture != current {
            current = row.fixture;
            println!(
                "\n{} (secret {}, {} candidates)",
                row.fixture.bright_white().bold(),
                row.secret.bright_yellow(),
                row.candidates
            );
        }

        let outcome = match &row.answer {
            Some(answer) if row.correct() => format!("✓ {answer}").green(),
            Some(answer) => format!("✗ {answer}").red(),
            None => "✗ exhausted".red(),
        };

        println!(
            "   {:<10} {:>2} {:<8} {}  {}",
            row.strategy,
            row.queries,
            plural(row.queries, "query", "queries"),
            outcome,
            format_duration(row.duration).bright_black()
        );
    }

    let failures = rows.iter().filter(|row| !row.correct()).count();
    println!();
    if failures == 0 {
        println!("{}", "All strategies identified every secret".green().bold());
    } else {
        println!(
            "{}",
            format!("{failures} runs missed the secret").red().bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.failed > 0 {
        println!("   Failed:           {}", format!("{}", result.failed).red());
    }
    println!(
        "   Average queries:  {}",
        format!("{:.2}", result.average_queries)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_queries).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_queries).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&queries, &count) in &result.distribution {
        let pct = (count as f64 / result.solved as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {queries:>3}: {bar} {count:4} ({pct:5.1}%)");
    }
}

const fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
