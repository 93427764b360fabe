//! Test all codes - exhaustive solver evaluation
//!
//! Runs the solver against every code in the space and generates statistics.

use super::solve::{SolveConfig, solve_code};
use crate::core::{Code, GameConfig, HiddenCode};
use crate::error::Result;
use crate::solver::{Solver, Strategy};
use crate::space::CodeSpace;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result from testing a single hidden code
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub code: Code,
    pub first_guess: Option<Code>,
    pub num_guesses: usize,
    pub success: bool,
}

/// Statistics from testing all codes
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_codes: Vec<(Code, usize)>,
    pub first_guess_used: BTreeMap<Code, usize>,
}

/// Run the solver on every code of the space (or the first `limit` codes)
///
/// Progress is drawn on stderr. Each worker thread reuses one solver.
///
/// # Errors
///
/// Returns an error if a game exhausts its candidate domain.
pub fn run_test_all<S>(
    strategy: &S,
    config: GameConfig,
    limit: Option<usize>,
    max_guesses: Option<usize>,
) -> Result<TestAllStatistics>
where
    S: Strategy + Clone + Send + Sync,
{
    let space = CodeSpace::new(config);
    let codes: Vec<Code> = space.iter().take(limit.unwrap_or(space.len())).collect();

    println!("🎯 Testing {} codes...", codes.len());

    let pb = ProgressBar::new(codes.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let total_start = Instant::now();
    let solve_config = SolveConfig {
        max_guesses,
        collect_metrics: false,
    };

    let results: Vec<CodeTestResult> = codes
        .par_iter()
        .map_init(
            || Solver::new(strategy.clone(), config),
            |solver, code| -> Result<CodeTestResult> {
                let mut oracle = HiddenCode::new(code.clone(), &config)?;
                let result = solve_code(solver, &mut oracle, solve_config)?;
                pb.inc(1);
                Ok(CodeTestResult {
                    code: code.clone(),
                    first_guess: result.guesses.first().map(|step| step.guess.clone()),
                    num_guesses: result.num_guesses(),
                    success: result.success,
                })
            },
        )
        .collect::<Result<_>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(results, total_start.elapsed()))
}

fn summarize(results: Vec<CodeTestResult>, total_time: Duration) -> TestAllStatistics {
    let mut guess_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut first_guess_used: BTreeMap<Code, usize> = BTreeMap::new();

    for result in &results {
        if result.success {
            *guess_distribution.entry(result.num_guesses).or_insert(0) += 1;
        }
        if let Some(first) = &result.first_guess {
            *first_guess_used.entry(first.clone()).or_insert(0) += 1;
        }
    }

    let solved: Vec<&CodeTestResult> = results.iter().filter(|r| r.success).collect();
    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let mut worst_codes: Vec<(Code, usize)> = solved
        .iter()
        .map(|r| (r.code.clone(), r.num_guesses))
        .collect();
    worst_codes.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_codes.truncate(10);

    TestAllStatistics {
        total_codes: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved.iter().map(|r| r.num_guesses).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.num_guesses).min().unwrap_or(0),
        worst_codes,
        first_guess_used,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    use crate::output::formatters::{code_to_pegs, distribution_bar};

    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    if stats.total_codes == 0 {
        return;
    }
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_codes as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_codes as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("  Worst case:          {}", stats.max_guesses);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per code:       {:.2}ms",
        stats.total_time.as_secs_f64() * 1000.0 / stats.total_codes as f64
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats
        .guess_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(1);
    for (guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        println!(
            "  {guesses:2} guesses: {} {count:5} ({percentage:5.1}%)",
            distribution_bar(count, max_count, 40)
        );
    }

    println!("\n🧮 Information Theory Metrics");
    let total_bits = (stats.total_codes as f64).log2();
    let bits_per_guess = if stats.average_guesses > 0.0 {
        total_bits / stats.average_guesses
    } else {
        0.0
    };
    println!("  Total information:   {total_bits:.2} bits");
    println!("  Bits per guess:      {bits_per_guess:.2} bits");

    if !stats.worst_codes.is_empty() {
        println!("\n😰 {}", "Hardest Codes".yellow().bold());
        for (code, guesses) in stats.worst_codes.iter().take(5) {
            println!("  {} {} ({} guesses)", code_to_pegs(code), code, guesses);
        }
    }

    println!("\n🎯 First Guess Usage");
    let mut first_guesses: Vec<(&Code, &usize)> = stats.first_guess_used.iter().collect();
    first_guesses.sort_by_key(|(_, count)| std::cmp::Reverse(**count));
    for (code, count) in first_guesses.iter().take(5) {
        let percentage = **count as f64 / stats.total_codes as f64 * 100.0;
        println!("  {code}: {count} times ({percentage:.1}%)");
    }
}
