//! Code solving command
//!
//! Plays one game of solver against oracle and returns the solution path.

use crate::core::{Code, Feedback, Oracle};
use crate::error::Result;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{GuessMetrics, Solver, Strategy};

/// Configuration for solving a code
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveConfig {
    /// Give up after this many guesses (default: size of the code space)
    pub max_guesses: Option<usize>,
    /// Compute entropy and partition metrics for every guess
    pub collect_metrics: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_guesses: None,
            collect_metrics: true,
        }
    }
}

/// Result of solving a code
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
}

impl SolveResult {
    /// Number of guesses played
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub metrics: Option<GuessMetrics>,
}

/// Solve the oracle's hidden code, starting a fresh game on `solver`
///
/// Runs the guess, score, prune loop until the feedback is perfect or the
/// guess limit is reached.
///
/// # Errors
///
/// Returns `DomainExhausted` if the oracle's answers contradict each other.
pub fn solve_code<S: Strategy, O: Oracle>(
    solver: &mut Solver<S>,
    oracle: &mut O,
    config: SolveConfig,
) -> Result<SolveResult> {
    solver.reset();

    // One extra turn covers an opening guess from outside the domain
    let max_guesses = config
        .max_guesses
        .unwrap_or_else(|| solver.space().len() + 1);
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..max_guesses {
        let candidates_before = solver.remaining_count();
        let guess = solver.next_guess()?;

        let metrics = (config.collect_metrics && candidates_before > 1)
            .then(|| calculate_metrics(&guess, solver.candidates()));

        let feedback = oracle.score(&guess);
        solver.apply_feedback(guess.clone(), feedback)?;

        guesses.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: solver.remaining_count(),
            metrics,
        });

        if solver.is_solved(feedback) {
            tracing::info!(guesses = guesses.len(), "code solved");
            return Ok(SolveResult {
                success: true,
                guesses,
            });
        }
    }

    tracing::info!(guesses = guesses.len(), "guess limit reached");
    Ok(SolveResult {
        success: false,
        guesses,
    })
}
