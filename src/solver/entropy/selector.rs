//! Pure entropy-based guess selection
//!
//! Selects guesses that maximize Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::Code;
use rustc_hash::FxHashSet;

/// Entropies closer than this are treated as equal
const TIE_EPSILON: f64 = 1e-9;

/// Select best guess by maximizing entropy
///
/// Returns the guess with highest entropy and its entropy value, or `None` if
/// the guess pool is empty. Among equal entropies a candidate is preferred,
/// then the earliest guess in the pool.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::entropy::select_best_guess;
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
/// let (best, entropy) = select_best_guess(guesses, &candidates).unwrap();
/// assert_eq!(best, Code::from_indices(&[0, 1]));
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<I>(guess_pool: I, candidates: &[Code]) -> Option<(Code, f64)>
where
    I: IntoIterator<Item = Code>,
{
    let candidate_set: FxHashSet<&Code> = candidates.iter().collect();
    let mut best: Option<(Code, f64, bool)> = None;

    for guess in guess_pool {
        let entropy = calculate_entropy(&guess, candidates);
        let is_candidate = candidate_set.contains(&guess);

        let better = match &best {
            None => true,
            Some((_, best_entropy, best_is_candidate)) => {
                entropy > best_entropy + TIE_EPSILON
                    || ((entropy - best_entropy).abs() <= TIE_EPSILON
                        && is_candidate
                        && !best_is_candidate)
            }
        };

        if better {
            best = Some((guess, entropy, is_candidate));
        }
    }

    best.map(|(guess, entropy, _)| (guess, entropy))
}
