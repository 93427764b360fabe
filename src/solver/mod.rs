//! Mastermind solving algorithms
//!
//! The constraint solver and the strategies it can pick guesses with.

mod engine;
pub mod entropy;
pub mod minimax;
pub mod partition;
pub mod strategy;

pub use engine::Solver;
pub use entropy::GuessMetrics;
pub use strategy::{
    EntropyStrategy, FirstCandidateStrategy, HybridStrategy, MinimaxStrategy, RandomStrategy,
    Strategy, StrategyType,
};
