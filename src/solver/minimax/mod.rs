//! Minimax guess selection
//!
//! Knuth's worst-case minimization: choose the guess whose largest feedback
//! class is smallest.

mod calculator;
mod selector;

pub use calculator::calculate_max_remaining;
pub use selector::select_best_guess;
