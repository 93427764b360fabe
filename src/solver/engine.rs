//! Main Mastermind solver interface

use super::strategy::Strategy;
use crate::core::{Code, Feedback, GameConfig};
use crate::error::{MastermindError, Result};
use crate::space::CodeSpace;

/// Main Mastermind solver
///
/// Owns the candidate domain and the guess history of one game. The domain
/// starts as the full code space and only ever loses codes that contradict an
/// observed feedback, so the hidden code is never pruned.
pub struct Solver<S: Strategy> {
    strategy: S,
    space: CodeSpace,
    domain: Vec<Code>,
    history: Vec<(Code, Feedback)>,
}

impl<S: Strategy> Solver<S> {
    /// Create a solver for a new game
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `config`: Alphabet size, code length and duplicates rule
    #[must_use]
    pub fn new(strategy: S, config: GameConfig) -> Self {
        let space = CodeSpace::new(config);
        Self {
            strategy,
            domain: space.to_vec(),
            space,
            history: Vec::new(),
        }
    }

    /// Start a new game with a different configuration
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if the parameters cannot form a game; the
    /// current game is left untouched in that case.
    pub fn initialize(
        &mut self,
        alphabet_size: usize,
        code_length: usize,
        allow_duplicates: bool,
    ) -> Result<()> {
        let config = GameConfig::new(alphabet_size, code_length, allow_duplicates)?;
        self.space = CodeSpace::new(config);
        self.reset();
        Ok(())
    }

    /// Start a new game with the current configuration
    pub fn reset(&mut self) {
        self.history.clear();
        self.domain = self.space.to_vec();
        tracing::debug!(candidates = self.domain.len(), "solver reset");
    }

    /// Propose the next guess
    ///
    /// With a single candidate left it is returned directly. On the first turn
    /// the strategy's opening is used if it has one; otherwise the strategy
    /// chooses, falling back to the first candidate.
    ///
    /// # Errors
    /// Returns `DomainExhausted` if no candidate is consistent with the history
    pub fn next_guess(&self) -> Result<Code> {
        match self.domain.as_slice() {
            [] => {
                tracing::warn!(
                    observations = self.history.len(),
                    "candidate domain exhausted"
                );
                Err(MastermindError::DomainExhausted {
                    observations: self.history.len(),
                })
            }
            [only] => Ok(only.clone()),
            candidates => {
                if self.history.is_empty()
                    && let Some(opening) = self.strategy.opening(self.space.config())
                {
                    tracing::trace!(guess = %opening, "opening guess");
                    return Ok(opening);
                }

                let guess = self
                    .strategy
                    .select_guess(&self.space, candidates)
                    .unwrap_or_else(|| candidates[0].clone());
                tracing::trace!(guess = %guess, candidates = candidates.len(), "selected guess");
                Ok(guess)
            }
        }
    }

    /// Record the feedback for `guess` and prune inconsistent candidates
    ///
    /// Keeps exactly the candidates `c` with `score(guess, c) == feedback`.
    ///
    /// # Errors
    /// Returns `LengthMismatch`, `InvalidSymbol` or `InvalidCode` if `guess` is
    /// not a code of the current game; neither the history nor the domain
    /// changes in that case.
    pub fn apply_feedback(&mut self, guess: Code, feedback: Feedback) -> Result<()> {
        guess.validate(self.space.config())?;

        let before = self.domain.len();
        prune(&mut self.domain, &guess, feedback);

        tracing::debug!(
            guess = %guess,
            feedback = %feedback,
            before,
            after = self.domain.len(),
            "pruned candidate domain"
        );
        if self.domain.is_empty() {
            tracing::warn!(guess = %guess, feedback = %feedback, "feedback eliminated every candidate");
        }

        self.history.push((guess, feedback));
        Ok(())
    }

    /// Whether `feedback` ends the game
    #[must_use]
    pub const fn is_solved(&self, feedback: Feedback) -> bool {
        feedback.is_perfect(self.space.config().code_length())
    }

    /// Number of candidates still consistent with the history
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.domain.len()
    }

    /// Candidates still consistent with the history, in lexicographic order
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.domain
    }

    /// Observations so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Code, Feedback)] {
        &self.history
    }

    /// Rules of the current game
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        self.space.config()
    }

    /// Full code space of the current game
    #[must_use]
    pub const fn space(&self) -> &CodeSpace {
        &self.space
    }

    /// The guess selection strategy
    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Withdraw the last observation
    ///
    /// The domain is rebuilt from the full space by replaying the remaining
    /// history. Returns the withdrawn observation, or `None` if there was none.
    pub fn undo(&mut self) -> Option<(Code, Feedback)> {
        let last = self.history.pop()?;

        self.domain = self.space.to_vec();
        for (guess, feedback) in &self.history {
            prune(&mut self.domain, guess, *feedback);
        }

        tracing::debug!(
            guess = %last.0,
            candidates = self.domain.len(),
            "withdrew last observation"
        );
        Some(last)
    }
}

/// Keep only the candidates that answer `guess` with `feedback`
fn prune(domain: &mut Vec<Code>, guess: &Code, feedback: Feedback) {
    domain.retain(|candidate| Feedback::calculate(guess, candidate) == feedback);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HiddenCode, Oracle};
    use crate::solver::strategy::{FirstCandidateStrategy, MinimaxStrategy};

    fn solver(alphabet: usize, length: usize, duplicates: bool) -> Solver<FirstCandidateStrategy> {
        let config = GameConfig::new(alphabet, length, duplicates).unwrap();
        Solver::new(FirstCandidateStrategy, config)
    }

    #[test]
    fn starts_with_full_domain() {
        let s = solver(6, 4, true);
        assert_eq!(s.remaining_count(), 1296);
        assert!(s.history().is_empty());

        let s = solver(6, 4, false);
        assert_eq!(s.remaining_count(), 360);
    }

    #[test]
    fn first_guess_is_first_candidate() {
        let s = solver(4, 3, true);
        assert_eq!(s.next_guess().unwrap(), Code::from_indices(&[0, 0, 0]));
    }

    #[test]
    fn knuth_opening_on_first_turn() {
        let s = Solver::new(MinimaxStrategy::default(), GameConfig::default());
        assert_eq!(s.next_guess().unwrap(), Code::from_indices(&[0, 0, 1, 1]));
    }

    #[test]
    fn apply_feedback_prunes_inconsistent_candidates() {
        let mut s = solver(6, 4, true);
        let guess = Code::from_indices(&[0, 0, 1, 1]);
        let hidden = Code::from_indices(&[0, 1, 2, 3]);
        let feedback = Feedback::calculate(&guess, &hidden);

        s.apply_feedback(guess.clone(), feedback).unwrap();

        assert!(s.remaining_count() < 1296);
        assert!(s.candidates().contains(&hidden));
        assert!(
            s.candidates()
                .iter()
                .all(|c| Feedback::calculate(&guess, c) == feedback)
        );
        assert_eq!(s.history(), &[(guess, feedback)]);
    }

    #[test]
    fn reapplying_the_same_observation_changes_nothing() {
        let mut s = solver(6, 4, true);
        let guess = Code::from_indices(&[0, 1, 2, 3]);
        let feedback = Feedback::new(1, 1);

        s.apply_feedback(guess.clone(), feedback).unwrap();
        let once = s.candidates().to_vec();
        s.apply_feedback(guess, feedback).unwrap();

        assert_eq!(s.candidates(), once.as_slice());
    }

    #[test]
    fn rejects_guess_of_wrong_length() {
        let mut s = solver(6, 4, true);
        let result = s.apply_feedback(Code::from_indices(&[0, 1]), Feedback::new(0, 0));

        assert_eq!(
            result,
            Err(MastermindError::LengthMismatch {
                expected: 4,
                actual: 2
            })
        );
        assert!(s.history().is_empty());
        assert_eq!(s.remaining_count(), 1296);
    }

    #[test]
    fn rejects_guess_outside_the_alphabet() {
        let mut s = solver(6, 4, true);
        // G is the seventh symbol
        let result = s.apply_feedback("GAAA".parse().unwrap(), Feedback::new(0, 0));

        assert_eq!(
            result,
            Err(MastermindError::InvalidSymbol {
                symbol: 'G',
                alphabet_size: 6
            })
        );
        assert!(s.history().is_empty());
        assert_eq!(s.remaining_count(), 1296);
    }

    #[test]
    fn rejects_repeating_guess_without_duplicates() {
        let mut s = solver(6, 4, false);
        let result = s.apply_feedback(Code::from_indices(&[0, 0, 1, 2]), Feedback::new(1, 0));

        assert!(matches!(result, Err(MastermindError::InvalidCode(_))));
        assert!(s.history().is_empty());
        assert_eq!(s.remaining_count(), 360);
    }

    #[test]
    fn inconsistent_feedback_exhausts_domain() {
        let mut s = solver(4, 3, true);
        let guess = Code::from_indices(&[0, 1, 2]);

        s.apply_feedback(guess.clone(), Feedback::new(3, 0)).unwrap();
        assert_eq!(s.remaining_count(), 1);

        // The only candidate contradicts this
        s.apply_feedback(guess, Feedback::new(0, 0)).unwrap();
        assert_eq!(s.remaining_count(), 0);
        assert_eq!(
            s.next_guess(),
            Err(MastermindError::DomainExhausted { observations: 2 })
        );
    }

    #[test]
    fn is_solved_only_on_full_exact_match() {
        let s = solver(6, 4, true);
        assert!(s.is_solved(Feedback::new(4, 0)));
        assert!(!s.is_solved(Feedback::new(3, 0)));
        assert!(!s.is_solved(Feedback::new(0, 4)));
    }

    #[test]
    fn solves_abc_and_keeps_winning_guess_counted() {
        let config = GameConfig::new(4, 3, true).unwrap();
        let mut s = Solver::new(FirstCandidateStrategy, config);
        let mut oracle = HiddenCode::new(Code::from_indices(&[0, 1, 2]), &config).unwrap();

        let mut rounds = 0;
        loop {
            let guess = s.next_guess().unwrap();
            let feedback = oracle.score(&guess);
            s.apply_feedback(guess, feedback).unwrap();
            rounds += 1;
            if s.is_solved(feedback) {
                break;
            }
            assert!(rounds <= 64);
        }

        assert_eq!(s.remaining_count(), 1);
        assert_eq!(s.candidates()[0], Code::from_indices(&[0, 1, 2]));
        assert_eq!(s.history().len(), rounds);
    }

    #[test]
    fn undo_restores_previous_domain() {
        let mut s = solver(6, 4, true);
        let hidden = Code::from_indices(&[3, 1, 4, 1]);

        let first = Code::from_indices(&[0, 0, 1, 1]);
        s.apply_feedback(first.clone(), Feedback::calculate(&first, &hidden))
            .unwrap();
        let after_first = s.candidates().to_vec();

        let second = Code::from_indices(&[1, 2, 3, 4]);
        let second_feedback = Feedback::calculate(&second, &hidden);
        s.apply_feedback(second.clone(), second_feedback).unwrap();
        assert!(s.remaining_count() < after_first.len());

        assert_eq!(s.undo(), Some((second, second_feedback)));
        assert_eq!(s.candidates(), after_first.as_slice());
        assert_eq!(s.history().len(), 1);

        s.undo();
        assert_eq!(s.remaining_count(), 1296);
        assert_eq!(s.undo(), None);
    }

    #[test]
    fn reset_restarts_the_game() {
        let mut s = solver(4, 3, true);
        s.apply_feedback(Code::from_indices(&[0, 0, 0]), Feedback::new(0, 0))
            .unwrap();
        assert!(s.remaining_count() < 64);

        s.reset();
        assert_eq!(s.remaining_count(), 64);
        assert!(s.history().is_empty());
    }

    #[test]
    fn initialize_switches_configuration() {
        let mut s = solver(4, 3, true);
        s.apply_feedback(Code::from_indices(&[0, 0, 0]), Feedback::new(1, 0))
            .unwrap();

        s.initialize(6, 4, false).unwrap();
        assert_eq!(s.remaining_count(), 360);
        assert!(s.history().is_empty());
        assert_eq!(s.config().code_length(), 4);
    }

    #[test]
    fn initialize_rejects_invalid_configuration() {
        let mut s = solver(4, 3, true);

        let result = s.initialize(3, 4, false);
        assert!(matches!(
            result,
            Err(MastermindError::InvalidConfiguration(_))
        ));
        // The running game is untouched
        assert_eq!(s.remaining_count(), 64);
        assert_eq!(s.config().code_length(), 3);
    }
}
