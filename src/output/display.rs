//! Display functions for command results

use super::formatters::{percent_of, remaining_bar};
use crate::commands::{ClassifyResult, ScoreResult, SearchReport};
use crate::core::Word;
use colored::Colorize;

/// Print the banner shown before a search starts
pub fn print_search_header(vocabulary_size: usize, solution_count: usize, threads: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "FIRST GUESS SEARCH".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\n   Guesses:    {vocabulary_size}");
    println!("   Solutions:  {solution_count}");
    println!("   Threads:    {threads}\n");
}

/// Print the outcome of a full search with the `top` best guesses
pub fn print_search_result(report: &SearchReport, vocabulary: &[Word], top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SEARCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    match report.outcome.best {
        Some(best) => println!(
            "\n🏆 Best guess: {} ({} expected remaining)",
            best.word.decode().to_uppercase().bright_yellow().bold(),
            format!("{:.3}", best.score).green()
        ),
        None => println!("\n{}", "No guesses to score".yellow()),
    }

    println!("\n⏱  {}", "Performance:".bright_cyan().bold());
    println!("   Guesses scored:   {}", report.vocabulary_size);
    println!("   Solutions:        {}", report.solution_count);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
    println!("   Guesses/second:   {:.1}", report.guesses_per_second);

    let ranked = report.top(vocabulary, top);
    if ranked.is_empty() {
        return;
    }

    println!("\n📈 {}", format!("Top {}:", ranked.len()).bright_cyan().bold());
    for (rank, (word, score)) in ranked.iter().enumerate() {
        let bar = remaining_bar(*score, report.solution_count, 30);
        println!(
            "   {:>3}. {} [{}] {:8.3} ({:5.2}%)",
            rank + 1,
            word.decode().to_uppercase(),
            bar.green(),
            score,
            percent_of(*score, report.solution_count)
        );
    }
}

/// Print the evaluation of a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS SCORE:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = remaining_bar(result.score.mean, result.total_solutions, 30);

    println!("\n📊 Against {} possible answers:", result.total_solutions);
    println!(
        "   Expected:    [{}] {}",
        bar.green(),
        format!("{:.3} remain", result.score.mean).bright_yellow()
    );
    println!("   Worst case:  {} remain", result.score.worst);
    println!("   Feedbacks:   {} distinct", result.score.distinct_feedbacks);
    if result.is_solution {
        println!("   {}", "Can itself be the answer".green());
    }
}

/// Print a feedback classification
pub fn print_classify_result(result: &ClassifyResult) {
    println!(
        "\n{} {}",
        result.guess.to_uppercase().bright_yellow().bold(),
        result.feedback.to_emoji()
    );

    if let Some(compatible) = &result.compatible {
        println!(
            "\n{} compatible solution(s):",
            compatible.len().to_string().bright_cyan().bold()
        );
        for chunk in compatible.chunks(10) {
            println!("   {}", chunk.join(" "));
        }
    }
}
