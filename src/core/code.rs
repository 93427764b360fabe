//! Mastermind code representation
//!
//! A Code is an ordered sequence of symbols drawn from an alphabet of at most
//! 26 values. Symbols are written as the letters `A..Z`.

use super::config::{GameConfig, MAX_ALPHABET, MAX_CODE_LENGTH};
use crate::error::{MastermindError, Result};
use std::fmt;
use std::str::FromStr;

/// One value of the alphabet (index `0..26`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Create a symbol from its alphabet index
    ///
    /// # Panics
    /// Panics if `index >= 26`
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < MAX_ALPHABET, "Symbol index must be < 26");
        Self(index)
    }

    /// Parse a symbol from its letter (case-insensitive)
    ///
    /// # Errors
    /// Returns `InvalidSymbol` if `ch` is not a letter below `alphabet_size`
    pub fn from_char(ch: char, alphabet_size: usize) -> Result<Self> {
        let upper = ch.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            let index = upper as u8 - b'A';
            if usize::from(index) < alphabet_size {
                return Ok(Self(index));
            }
        }
        Err(MastermindError::InvalidSymbol {
            symbol: ch,
            alphabet_size,
        })
    }

    /// Alphabet index of this symbol
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Letter used to display this symbol
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// An ordered sequence of symbols
///
/// Codes have at most [`MAX_CODE_LENGTH`] positions so that feedback counts
/// fit in a `u8`. The checked constructors enforce this.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    symbols: Vec<Symbol>,
}

impl Code {
    /// Create a code from symbols
    #[must_use]
    pub const fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Create a code from raw alphabet indices
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let code = Code::from_indices(&[0, 1, 2]);
    /// assert_eq!(code.to_string(), "ABC");
    /// ```
    ///
    /// # Panics
    /// Panics if an index is `>= 26` or there are more than
    /// [`MAX_CODE_LENGTH`] indices
    #[must_use]
    pub fn from_indices(indices: &[u8]) -> Self {
        assert!(
            indices.len() <= MAX_CODE_LENGTH,
            "codes have at most {MAX_CODE_LENGTH} positions"
        );
        Self::new(indices.iter().map(|&i| Symbol::new(i)).collect())
    }

    /// Parse a code and check it against the game rules
    ///
    /// Accepts letters with optional separators: `"ABCD"`, `"a b c d"`, `"A,B,C,D"`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - a symbol is outside the alphabet (`InvalidSymbol`)
    /// - the length differs from the configured length (`LengthMismatch`)
    /// - the code repeats a symbol when duplicates are disallowed (`InvalidCode`)
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameConfig};
    ///
    /// let config = GameConfig::new(6, 4, false).unwrap();
    /// assert!(Code::parse("ABCD", &config).is_ok());
    /// assert!(Code::parse("AABB", &config).is_err()); // duplicates
    /// assert!(Code::parse("ABCG", &config).is_err()); // G is the 7th symbol
    /// ```
    pub fn parse(text: &str, config: &GameConfig) -> Result<Self> {
        let code = parse_symbols(text, config.alphabet_size())?;
        code.validate(config)?;
        Ok(code)
    }

    /// Check that this code is a member of the configured code space
    ///
    /// # Errors
    /// Returns `LengthMismatch`, `InvalidSymbol` or `InvalidCode` describing
    /// the first violated rule.
    pub fn validate(&self, config: &GameConfig) -> Result<()> {
        if self.len() != config.code_length() {
            return Err(MastermindError::LengthMismatch {
                expected: config.code_length(),
                actual: self.len(),
            });
        }

        if let Some(symbol) = self
            .symbols
            .iter()
            .find(|s| s.index() >= config.alphabet_size())
        {
            return Err(MastermindError::InvalidSymbol {
                symbol: symbol.letter(),
                alphabet_size: config.alphabet_size(),
            });
        }

        if !config.allow_duplicates() && self.has_duplicates() {
            return Err(MastermindError::InvalidCode(format!(
                "{self} repeats a symbol but duplicates are disallowed"
            )));
        }

        Ok(())
    }

    /// Whether this code is a valid member of the configured code space
    #[inline]
    #[must_use]
    pub fn is_valid_for(&self, config: &GameConfig) -> bool {
        self.validate(config).is_ok()
    }

    /// The symbols of this code
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the code has no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether any symbol appears more than once
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.symbol_counts().iter().any(|&count| count > 1)
    }

    /// Occurrences of each symbol, indexed by symbol
    #[inline]
    #[must_use]
    pub fn symbol_counts(&self) -> [u8; MAX_ALPHABET] {
        let mut counts = [0u8; MAX_ALPHABET];
        for symbol in &self.symbols {
            counts[symbol.index()] += 1;
        }
        counts
    }

    /// Knuth's opening guess: first half symbol `A`, second half symbol `B`
    ///
    /// Returns `None` when that pattern is not a valid code for `config`
    /// (duplicates disallowed and length above 2).
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameConfig};
    ///
    /// let opening = Code::knuth_opening(&GameConfig::default()).unwrap();
    /// assert_eq!(opening.to_string(), "AABB");
    /// ```
    #[must_use]
    pub fn knuth_opening(config: &GameConfig) -> Option<Self> {
        let half = config.code_length() / 2;
        let code = Self::new(
            (0..config.code_length())
                .map(|i| Symbol::new(u8::from(i >= half)))
                .collect(),
        );
        code.is_valid_for(config).then_some(code)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = MastermindError;

    /// Parse letters without game rules (any of the 26 symbols, any length)
    fn from_str(s: &str) -> Result<Self> {
        let code = parse_symbols(s, MAX_ALPHABET)?;
        if code.is_empty() {
            return Err(MastermindError::InvalidCode("empty code".to_string()));
        }
        Ok(code)
    }
}

/// Parse letters, skipping whitespace and `,`/`-` separators
fn parse_symbols(text: &str, alphabet_size: usize) -> Result<Code> {
    let symbols = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '-')
        .map(|c| Symbol::from_char(c, alphabet_size))
        .collect::<Result<Vec<_>>>()?;

    if symbols.len() > MAX_CODE_LENGTH {
        return Err(MastermindError::InvalidCode(format!(
            "{} positions exceed the maximum of {MAX_CODE_LENGTH}",
            symbols.len()
        )));
    }
    Ok(Code::new(symbols))
}
