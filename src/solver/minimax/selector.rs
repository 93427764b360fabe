//! Minimax-based guess selection strategy
//!
//! Always selects the guess that minimizes the worst-case remaining candidates.
//! Ties go to a guess that could itself be the answer, then to the lowest code.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rustc_hash::FxHashSet;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the guess with the lowest maximum remaining candidates and that value,
/// or `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::minimax::select_best_guess;
///
/// let guesses = vec![
///     Code::from_indices(&[5, 5]),
///     Code::from_indices(&[0, 1]),
/// ];
/// let candidates = vec![
///     Code::from_indices(&[0, 1]),
///     Code::from_indices(&[1, 0]),
/// ];
///
/// let (best, max_remaining) = select_best_guess(guesses, &candidates).unwrap();
/// assert_eq!(best, Code::from_indices(&[0, 1]));
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn select_best_guess<I>(guess_pool: I, candidates: &[Code]) -> Option<(Code, usize)>
where
    I: IntoIterator<Item = Code>,
{
    let candidate_set: FxHashSet<&Code> = candidates.iter().collect();
    let mut best: Option<(Code, usize, bool)> = None;

    for guess in guess_pool {
        let max_remaining = calculate_max_remaining(&guess, candidates);
        let is_candidate = candidate_set.contains(&guess);

        let better = match &best {
            None => true,
            Some((_, best_max, best_is_candidate)) => {
                max_remaining < *best_max
                    || (max_remaining == *best_max && is_candidate && !best_is_candidate)
            }
        };

        if better {
            best = Some((guess, max_remaining, is_candidate));
        }
    }

    best.map(|(guess, max_remaining, _)| (guess, max_remaining))
}
