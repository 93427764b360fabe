//! Mastermind Solver
//!
//! A Mastermind codebreaker that treats the game as a constraint satisfaction
//! problem: every feedback prunes the candidate domain, and a pluggable
//! strategy picks the next guess (Knuth's minimax by default, at most five
//! guesses on the classic 6 colors and 4 pegs).
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, GameConfig, HiddenCode, Oracle};
//! use mastermind_solver::solver::{MinimaxStrategy, Solver};
//!
//! let config = GameConfig::default();
//! let mut solver = Solver::new(MinimaxStrategy::default(), config);
//! let mut oracle = HiddenCode::new("FCCA".parse().unwrap(), &config).unwrap();
//!
//! loop {
//!     let guess = solver.next_guess().unwrap();
//!     let feedback = oracle.score(&guess);
//!     solver.apply_feedback(guess, feedback).unwrap();
//!     if solver.is_solved(feedback) {
//!         break;
//!     }
//! }
//!
//! assert!(solver.history().len() <= 5);
//! assert_eq!(solver.candidates(), &["FCCA".parse::<Code>().unwrap()]);
//! ```

// Core domain types
pub mod core;

// Lazy code space enumeration
pub mod space;

// Solving algorithms
pub mod solver;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup
pub mod logging;

pub use error::{MastermindError, Result};
