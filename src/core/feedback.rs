//! Mastermind feedback calculation and representation
//!
//! Feedback is the pair of peg counts returned for a guess:
//! - exact: right symbol in the right position (black peg)
//! - partial: right symbol in the wrong position (white peg)
//!
//! Partial matches are counted with multiplicity: a symbol contributes at most
//! the smaller of its unmatched occurrences in the guess and in the target.

use super::Code;
use super::config::{MAX_ALPHABET, MAX_CODE_LENGTH};
use crate::error::{MastermindError, Result};
use std::fmt;
use std::str::FromStr;

/// Feedback for a Mastermind guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

impl Feedback {
    /// Create feedback from raw peg counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// Feedback of a winning guess for codes of `length` positions
    ///
    /// # Panics
    /// Panics if `length` exceeds [`MAX_CODE_LENGTH`]
    #[inline]
    #[must_use]
    pub const fn perfect(length: usize) -> Self {
        assert!(
            length <= MAX_CODE_LENGTH,
            "codes have at most 255 positions"
        );
        Self::new(length as u8, 0)
    }

    /// Right symbol, right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Right symbol, wrong position
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Whether every one of `length` positions matched
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, length: usize) -> bool {
        self.exact as usize == length
    }

    /// Calculate the feedback when `guess` is scored against `target`
    ///
    /// # Algorithm
    /// 1. Count positions where the symbols agree (exact)
    /// 2. Count remaining symbols of each value on both sides
    /// 3. Sum the per-symbol minimum of those counts (partial)
    ///
    /// # Panics
    /// Panics if `guess` and `target` differ in length. Use
    /// [`Feedback::try_calculate`] when the lengths are not already known to agree.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback};
    ///
    /// let guess: Code = "RGBY".parse().unwrap();
    /// let target: Code = "RRGB".parse().unwrap();
    ///
    /// // R matches in place; G and B are present elsewhere
    /// assert_eq!(Feedback::calculate(&guess, &target), Feedback::new(1, 2));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, target: &Code) -> Self {
        assert_eq!(
            guess.len(),
            target.len(),
            "guess and target must have the same length"
        );

        let mut exact = 0u8;
        let mut guess_remaining = [0u8; MAX_ALPHABET];
        let mut target_remaining = [0u8; MAX_ALPHABET];

        // First pass: exact matches, tally everything else
        for (g, t) in guess.symbols().iter().zip(target.symbols()) {
            if g == t {
                exact += 1;
            } else {
                guess_remaining[g.index()] += 1;
                target_remaining[t.index()] += 1;
            }
        }

        // Second pass: capped multiplicity over the unmatched positions
        let partial: u8 = guess_remaining
            .iter()
            .zip(&target_remaining)
            .map(|(&g, &t)| g.min(t))
            .sum();

        Self { exact, partial }
    }

    /// Calculate feedback, reporting a length mismatch instead of panicking
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the codes differ in length
    pub fn try_calculate(guess: &Code, target: &Code) -> Result<Self> {
        if guess.len() != target.len() {
            return Err(MastermindError::LengthMismatch {
                expected: target.len(),
                actual: guess.len(),
            });
        }
        Ok(Self::calculate(guess, target))
    }

    /// Check that this feedback can occur for codes of `length` positions
    ///
    /// `exact + partial` can never exceed the length, and `length - 1` exact
    /// matches leave no room for a single misplaced symbol.
    ///
    /// # Errors
    /// Returns `InvalidFeedback` describing the impossibility
    pub fn validate(self, length: usize) -> Result<()> {
        let total = usize::from(self.exact) + usize::from(self.partial);
        if total > length {
            return Err(MastermindError::InvalidFeedback(format!(
                "{self} has {total} pegs but codes have {length} positions"
            )));
        }
        if length > 0 && usize::from(self.exact) == length - 1 && self.partial == 1 {
            return Err(MastermindError::InvalidFeedback(format!(
                "{self} is impossible: a single misplaced symbol cannot swap with itself"
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.exact, self.partial)
    }
}

impl FromStr for Feedback {
    type Err = MastermindError;

    /// Parse feedback from counts or pegs
    ///
    /// Accepts:
    /// - two counts: `"2 1"`, `"2,1"`, `"2/1"`, `"(2, 1)"`
    /// - peg strings: `B`/`X` for exact, `W`/`O` for partial, `-`/`.`/`_` for none,
    ///   e.g. `"BBW-"`; an empty peg string such as `"-"` or `"----"` is `(0, 0)`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');

        let numbers: Vec<&str> = trimmed
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|part| !part.is_empty())
            .collect();
        let is_count = |n: &&str| n.chars().all(|c| c.is_ascii_digit());
        if numbers.len() == 2 && numbers.iter().all(is_count) {
            let exact = numbers[0].parse::<u8>();
            let partial = numbers[1].parse::<u8>();
            return match (exact, partial) {
                (Ok(exact), Ok(partial)) => Ok(Self::new(exact, partial)),
                _ => Err(MastermindError::InvalidFeedback(format!(
                    "counts out of range in '{s}'"
                ))),
            };
        }

        if trimmed.is_empty() {
            return Err(MastermindError::InvalidFeedback("empty feedback".to_string()));
        }

        let mut exact = 0u8;
        let mut partial = 0u8;
        for ch in trimmed.chars() {
            match ch.to_ascii_uppercase() {
                'B' | 'X' => exact = exact.saturating_add(1),
                'W' | 'O' => partial = partial.saturating_add(1),
                '-' | '.' | '_' => {}
                c if c.is_whitespace() => {}
                _ => {
                    return Err(MastermindError::InvalidFeedback(format!(
                        "unexpected '{ch}' in '{s}'"
                    )));
                }
            }
        }
        Ok(Self::new(exact, partial))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Code {
        text.parse().unwrap()
    }

    #[test]
    fn one_exact_two_partial() {
        // R G B Y against R R G B
        assert_eq!(
            Feedback::calculate(&code("RGBY"), &code("RRGB")),
            Feedback::new(1, 2)
        );
    }

    #[test]
    fn all_partial_with_duplicates() {
        // R R G G against G G R R
        assert_eq!(
            Feedback::calculate(&code("RRGG"), &code("GGRR")),
            Feedback::new(0, 4)
        );
    }

    #[test]
    fn identical_codes_are_perfect() {
        for text in ["ABCD", "AAAA", "FEDC", "A", "ZZZZZ"] {
            let c = code(text);
            let feedback = Feedback::calculate(&c, &c);
            assert_eq!(feedback, Feedback::perfect(c.len()));
            assert!(feedback.is_perfect(c.len()));
        }
    }

    #[test]
    fn longest_codes_score_without_overflow() {
        let a = Code::from_indices(&[0; MAX_CODE_LENGTH]);
        let feedback = Feedback::calculate(&a, &a);

        assert_eq!(feedback, Feedback::perfect(MAX_CODE_LENGTH));
        assert_eq!(usize::from(feedback.exact()), MAX_CODE_LENGTH);
    }

    #[test]
    #[should_panic(expected = "codes have at most 255 positions")]
    fn perfect_rejects_overlong_length() {
        let _ = Feedback::perfect(MAX_CODE_LENGTH + 1);
    }

    #[test]
    fn no_common_symbols() {
        assert_eq!(
            Feedback::calculate(&code("AABB"), &code("CCDD")),
            Feedback::new(0, 0)
        );
    }

    #[test]
    fn multiplicity_is_capped_by_target() {
        // Guess has four As, target only one: one exact, no partial credit
        assert_eq!(
            Feedback::calculate(&code("AAAA"), &code("ABCD")),
            Feedback::new(1, 0)
        );
        // Guess has two As, target one A elsewhere: one partial
        assert_eq!(
            Feedback::calculate(&code("AABC"), &code("DDAD")),
            Feedback::new(0, 1)
        );
    }

    #[test]
    fn exact_matches_are_not_recounted_as_partial() {
        // First A is exact; the second A in the guess has no partner left
        assert_eq!(
            Feedback::calculate(&code("AACD"), &code("ABBB")),
            Feedback::new(1, 0)
        );
    }

    #[test]
    fn naive_presence_count_would_over_report() {
        // "symbol present anywhere" would give 3 partial here
        assert_eq!(
            Feedback::calculate(&code("BBBA"), &code("ACBD")),
            Feedback::new(1, 1)
        );
    }

    #[test]
    fn scoring_is_symmetric() {
        let pairs = [("RGBY", "RRGB"), ("AABC", "CAAB"), ("ABCD", "DCBA")];
        for (a, b) in pairs {
            assert_eq!(
                Feedback::calculate(&code(a), &code(b)),
                Feedback::calculate(&code(b), &code(a))
            );
        }
    }

    #[test]
    fn try_calculate_reports_length_mismatch() {
        assert_eq!(
            Feedback::try_calculate(&code("ABC"), &code("ABCD")),
            Err(MastermindError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            Feedback::try_calculate(&code("ABCD"), &code("ABCD")),
            Ok(Feedback::new(4, 0))
        );
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn calculate_panics_on_length_mismatch() {
        let _ = Feedback::calculate(&code("AB"), &code("ABC"));
    }

    #[test]
    fn parse_counts() {
        assert_eq!("2 1".parse::<Feedback>().unwrap(), Feedback::new(2, 1));
        assert_eq!("2,1".parse::<Feedback>().unwrap(), Feedback::new(2, 1));
        assert_eq!("0/4".parse::<Feedback>().unwrap(), Feedback::new(0, 4));
        assert_eq!("(1, 2)".parse::<Feedback>().unwrap(), Feedback::new(1, 2));
    }

    #[test]
    fn parse_pegs() {
        assert_eq!("BBW-".parse::<Feedback>().unwrap(), Feedback::new(2, 1));
        assert_eq!("xoo".parse::<Feedback>().unwrap(), Feedback::new(1, 2));
        assert_eq!("----".parse::<Feedback>().unwrap(), Feedback::new(0, 0));
        assert_eq!("BBBB".parse::<Feedback>().unwrap(), Feedback::perfect(4));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Feedback>().is_err());
        assert!("BQ".parse::<Feedback>().is_err());
        assert!("1 2 3".parse::<Feedback>().is_err());
        assert!("300 1".parse::<Feedback>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        let feedback = Feedback::new(3, 0);
        assert_eq!(feedback.to_string(), "(3, 0)");
        assert_eq!(feedback.to_string().parse::<Feedback>().unwrap(), feedback);
    }

    #[test]
    fn validate_rejects_impossible_feedback() {
        assert!(Feedback::new(2, 2).validate(4).is_ok());
        assert!(Feedback::new(4, 0).validate(4).is_ok());
        assert!(Feedback::new(3, 2).validate(4).is_err());
        assert!(Feedback::new(3, 1).validate(4).is_err());
        assert!(Feedback::new(0, 1).validate(1).is_err());
    }
}
