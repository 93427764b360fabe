//! Entropy-based guess selection
//!
//! Implements Shannon entropy calculation for Mastermind feedback distributions.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use selector::select_best_guess;
