//! Shannon entropy calculation for Mastermind feedback
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Code, Feedback};
use crate::solver::partition::partition_counts;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct feedback classes
    pub partitions: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing feedback x.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::entropy::calculate_entropy;
///
/// let guess = Code::from_indices(&[0, 1]);
/// let candidates = vec![
///     Code::from_indices(&[0, 1]),
///     Code::from_indices(&[1, 0]),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!((entropy - 1.0).abs() < 1e-9); // two equally likely answers
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Code, candidates: &[Code]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&partition_counts(guess, candidates))
}

/// Calculate Shannon entropy from a feedback distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one feedback with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n feedback classes
#[must_use]
pub fn shannon_entropy<S>(feedback_counts: &std::collections::HashMap<Feedback, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = feedback_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    feedback_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, worst case and class count.
#[must_use]
pub fn calculate_metrics(guess: &Code, candidates: &[Code]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            partitions: 0,
        };
    }

    let counts = partition_counts(guess, candidates);
    let total = candidates.len() as f64;

    // Each class of size n is reached with probability n/total and leaves n codes
    let expected_remaining: f64 = counts
        .values()
        .map(|&n| n as f64 * n as f64 / total)
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition: counts.values().max().copied().unwrap_or(0),
        partitions: counts.len(),
    }
}
