//! Core domain types for Mastermind
//!
//! Symbols, codes, feedback and the game rules they are checked against.
//! Everything here is pure and deterministic.

mod code;
mod config;
mod feedback;
mod oracle;

pub use code::{Code, Symbol};
pub use config::{GameConfig, MAX_ALPHABET, MAX_CODE_LENGTH, MAX_DOMAIN_SIZE};
pub use feedback::Feedback;
pub use oracle::{HiddenCode, Oracle};
