//! Hidden-code holder
//!
//! The oracle keeps the secret away from the solver and answers each guess
//! with its feedback.

use super::{Code, Feedback, GameConfig};
use crate::error::Result;
use crate::space::CodeSpace;
use rand::Rng;

/// Something that scores guesses against a code the solver cannot see
pub trait Oracle {
    /// Score `guess` against the hidden code
    fn score(&mut self, guess: &Code) -> Feedback;
}

/// The codemaker's secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenCode {
    code: Code,
    guesses_scored: usize,
}

impl HiddenCode {
    /// Hold a chosen secret
    ///
    /// # Errors
    /// Returns an error if `code` is not a valid member of the code space for `config`
    pub fn new(code: Code, config: &GameConfig) -> Result<Self> {
        code.validate(config)?;
        Ok(Self {
            code,
            guesses_scored: 0,
        })
    }

    /// Draw a secret uniformly from the code space
    #[must_use]
    pub fn random<R: Rng + ?Sized>(space: &CodeSpace, rng: &mut R) -> Self {
        Self {
            code: space.sample(rng),
            guesses_scored: 0,
        }
    }

    /// Reveal the secret (end of game)
    #[must_use]
    pub const fn reveal(&self) -> &Code {
        &self.code
    }

    /// Number of guesses scored so far
    #[must_use]
    pub const fn guesses_scored(&self) -> usize {
        self.guesses_scored
    }
}

impl Oracle for HiddenCode {
    fn score(&mut self, guess: &Code) -> Feedback {
        self.guesses_scored += 1;
        Feedback::calculate(guess, &self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scores_with_feedback_rules() {
        let config = GameConfig::default();
        let mut oracle = HiddenCode::new(Code::from_indices(&[0, 0, 1, 2]), &config).unwrap();

        let feedback = oracle.score(&Code::from_indices(&[0, 1, 0, 3]));
        assert_eq!(feedback, Feedback::new(1, 2));
        assert_eq!(oracle.guesses_scored(), 1);

        let feedback = oracle.score(&Code::from_indices(&[0, 0, 1, 2]));
        assert!(feedback.is_perfect(4));
        assert_eq!(oracle.guesses_scored(), 2);
    }

    #[test]
    fn rejects_invalid_secret() {
        let config = GameConfig::new(6, 4, false).unwrap();
        assert!(HiddenCode::new(Code::from_indices(&[0, 0, 1, 2]), &config).is_err());
        assert!(HiddenCode::new(Code::from_indices(&[0, 1, 2]), &config).is_err());
    }

    #[test]
    fn random_secret_is_valid() {
        let config = GameConfig::new(6, 4, false).unwrap();
        let space = CodeSpace::new(config);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let secret = HiddenCode::random(&space, &mut rng);
            assert!(secret.reveal().is_valid_for(&config));
        }
    }
}
