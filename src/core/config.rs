//! Game configuration
//!
//! Alphabet size, code length and the duplicates rule are fixed for the
//! lifetime of a game and validated once here.

use crate::error::{MastermindError, Result};

/// Largest supported alphabet (symbols are rendered as letters `A..Z`)
pub const MAX_ALPHABET: usize = 26;

/// Longest code that can be scored (peg counts are stored as `u8`)
pub const MAX_CODE_LENGTH: usize = u8::MAX as usize;

/// Largest code space the solver will materialize as a candidate domain
pub const MAX_DOMAIN_SIZE: usize = 1 << 24;

/// Validated rules of one Mastermind game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    alphabet_size: usize,
    code_length: usize,
    allow_duplicates: bool,
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if:
    /// - `alphabet_size` is outside `2..=26`
    /// - `code_length` is zero
    /// - duplicates are disallowed and `code_length > alphabet_size`
    /// - the resulting code space exceeds [`MAX_DOMAIN_SIZE`]
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    ///
    /// let config = GameConfig::new(6, 4, false).unwrap();
    /// assert_eq!(config.domain_size(), 360);
    ///
    /// assert!(GameConfig::new(3, 4, false).is_err());
    /// ```
    pub fn new(alphabet_size: usize, code_length: usize, allow_duplicates: bool) -> Result<Self> {
        if !(2..=MAX_ALPHABET).contains(&alphabet_size) {
            return Err(MastermindError::InvalidConfiguration(format!(
                "alphabet size must be between 2 and {MAX_ALPHABET}, got {alphabet_size}"
            )));
        }

        if code_length == 0 {
            return Err(MastermindError::InvalidConfiguration(
                "code length must be at least 1".to_string(),
            ));
        }

        if !allow_duplicates && code_length > alphabet_size {
            return Err(MastermindError::InvalidConfiguration(format!(
                "code length {code_length} exceeds alphabet size {alphabet_size} without duplicates"
            )));
        }

        let size = count_codes(alphabet_size, code_length, allow_duplicates)
            .filter(|&size| size <= MAX_DOMAIN_SIZE)
            .ok_or_else(|| {
                MastermindError::InvalidConfiguration(format!(
                    "code space for {alphabet_size} symbols x {code_length} positions exceeds {MAX_DOMAIN_SIZE} codes"
                ))
            })?;
        debug_assert!(size > 0);

        Ok(Self {
            alphabet_size,
            code_length,
            allow_duplicates,
        })
    }

    /// Number of symbols in the alphabet
    #[inline]
    #[must_use]
    pub const fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Number of positions in a code
    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    /// Whether a code may repeat a symbol
    #[inline]
    #[must_use]
    pub const fn allow_duplicates(&self) -> bool {
        self.allow_duplicates
    }

    /// Number of valid codes: `A^L` with duplicates, `A!/(A-L)!` without
    #[must_use]
    pub fn domain_size(&self) -> usize {
        // Validated in `new`, cannot overflow
        count_codes(self.alphabet_size, self.code_length, self.allow_duplicates).unwrap_or(0)
    }
}

impl Default for GameConfig {
    /// Classic board: six colors, four pegs, duplicates allowed
    fn default() -> Self {
        Self {
            alphabet_size: 6,
            code_length: 4,
            allow_duplicates: true,
        }
    }
}

/// Count valid codes with overflow detection
fn count_codes(alphabet_size: usize, code_length: usize, allow_duplicates: bool) -> Option<usize> {
    (0..code_length).try_fold(1usize, |acc, position| {
        let choices = if allow_duplicates {
            alphabet_size
        } else {
            alphabet_size - position
        };
        acc.checked_mul(choices)
    })
}
