//! Minimax worst-case calculation for Mastermind feedback
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible feedback.

use crate::core::Code;
use crate::solver::partition::partition_counts;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each feedback that could result from this guess:
/// - Count how many candidates would produce that feedback
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let guess = Code::from_indices(&[0, 0, 1, 1]);
/// let candidates = vec![
///     Code::from_indices(&[0, 1, 2, 3]),
///     Code::from_indices(&[4, 4, 5, 5]),
/// ];
///
/// let max_remaining = calculate_max_remaining(&guess, &candidates);
/// assert!(max_remaining <= 2); // Can't be more than total candidates
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    partition_counts(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(raw: &[&[u8]]) -> Vec<Code> {
        raw.iter().map(|c| Code::from_indices(c)).collect()
    }

    #[test]
    fn max_remaining_perfect_split() {
        // Perfect binary split - worst case is 1 (each feedback has 1 candidate)
        let guess = Code::from_indices(&[0, 1, 2, 3]);
        let candidates = codes(&[&[0, 1, 2, 3], &[4, 4, 4, 4]]);

        assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
    }

    #[test]
    fn max_remaining_all_same_feedback() {
        // None of the candidates share a symbol with the guess
        let guess = Code::from_indices(&[5, 5, 5, 5]);
        let candidates = codes(&[&[0, 0, 0, 0], &[1, 1, 1, 1], &[2, 2, 2, 2]]);

        assert_eq!(calculate_max_remaining(&guess, &candidates), 3);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let guess = Code::from_indices(&[0, 1, 2, 3]);
        assert_eq!(calculate_max_remaining(&guess, &[]), 0);
    }

    #[test]
    fn max_remaining_bounds() {
        let guess = Code::from_indices(&[0, 0, 1, 1]);
        let candidates = codes(&[&[0, 1, 2, 3], &[1, 1, 0, 0], &[2, 3, 4, 5], &[0, 0, 1, 2]]);

        let max = calculate_max_remaining(&guess, &candidates);
        assert!((1..=candidates.len()).contains(&max));
    }

    #[test]
    fn candidate_guess_always_splits() {
        // Guessing a candidate isolates it in the perfect class
        let candidates = codes(&[&[0, 0], &[0, 1], &[1, 0]]);
        for guess in &candidates {
            assert!(
                calculate_max_remaining(guess, &candidates) < candidates.len()
            );
        }
    }
}
