//! Lexicographic code space
//!
//! Every valid code has an index in `0..len()`. With duplicates the index is
//! read as a base-`A` number; without duplicates each position picks among the
//! symbols not used yet, so position `i` has `A - i` choices.

use crate::core::{Code, GameConfig, Symbol};
use rand::Rng;
use std::iter::FusedIterator;

/// The full domain of valid codes for one configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpace {
    config: GameConfig,
    len: usize,
}

impl CodeSpace {
    /// Create the code space for a validated configuration
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            len: config.domain_size(),
        }
    }

    /// The configuration this space enumerates
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of valid codes
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false: a validated configuration has at least one code
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `code` is a member of this space
    #[inline]
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        code.is_valid_for(&self.config)
    }

    /// Iterate every valid code in lexicographic order
    ///
    /// The iterator borrows nothing and can be restarted by calling `iter` again.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    /// use mastermind_solver::space::CodeSpace;
    ///
    /// let space = CodeSpace::new(GameConfig::new(3, 2, false).unwrap());
    /// let codes: Vec<String> = space.iter().map(|c| c.to_string()).collect();
    /// assert_eq!(codes, ["AB", "AC", "BA", "BC", "CA", "CB"]);
    /// ```
    #[must_use]
    pub const fn iter(&self) -> Codes {
        Codes {
            space: *self,
            next: 0,
            end: self.len,
        }
    }

    /// Decode the code at lexicographic `index`
    ///
    /// Returns `None` if `index >= len()`.
    #[must_use]
    pub fn code_at(&self, index: usize) -> Option<Code> {
        if index >= self.len {
            return None;
        }

        let alphabet = self.config.alphabet_size();
        let length = self.config.code_length();

        let symbols = if self.config.allow_duplicates() {
            let mut digits = vec![Symbol::new(0); length];
            let mut rest = index;
            for slot in digits.iter_mut().rev() {
                *slot = Symbol::new((rest % alphabet) as u8);
                rest /= alphabet;
            }
            digits
        } else {
            let mut unused: Vec<u8> = (0..alphabet as u8).collect();
            let mut symbols = Vec::with_capacity(length);
            // Codes sharing a prefix of i+1 symbols: (A-i-1)!/(A-L)!
            let mut block = self.len;
            let mut rest = index;
            for position in 0..length {
                block /= alphabet - position;
                let choice = rest / block;
                rest %= block;
                symbols.push(Symbol::new(unused.remove(choice)));
            }
            symbols
        };

        Some(Code::new(symbols))
    }

    /// Draw a code uniformly at random
    ///
    /// # Panics
    /// Will not panic - the index is drawn below `len()`, which is never zero
    /// for a validated configuration.
    #[must_use]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Code {
        let index = rng.random_range(0..self.len);
        self.code_at(index).expect("index drawn below len")
    }

    /// Collect the whole space into a vector
    #[must_use]
    pub fn to_vec(&self) -> Vec<Code> {
        self.iter().collect()
    }
}

impl IntoIterator for &CodeSpace {
    type Item = Code;
    type IntoIter = Codes;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lexicographic iterator over a [`CodeSpace`]
#[derive(Debug, Clone)]
pub struct Codes {
    space: CodeSpace,
    next: usize,
    end: usize,
}

impl Iterator for Codes {
    type Item = Code;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let code = self.space.code_at(self.next);
        self.next += 1;
        code
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.next = self.next.saturating_add(n).min(self.end);
        self.next()
    }
}

impl DoubleEndedIterator for Codes {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        self.space.code_at(self.end)
    }
}

impl ExactSizeIterator for Codes {}

impl FusedIterator for Codes {}
