//! Benchmark command
//!
//! Tests solver performance across many hidden codes. Games are independent,
//! so each worker thread runs its own solver instance.

use super::solve::{SolveConfig, solve_code};
use crate::core::{Code, GameConfig, HiddenCode};
use crate::error::Result;
use crate::solver::{Solver, Strategy};
use crate::space::CodeSpace;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Draw `count` hidden codes, reproducibly when a seed is given
#[must_use]
pub fn random_hidden_codes(space: &CodeSpace, count: usize, seed: Option<u64>) -> Vec<Code> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    (0..count).map(|_| space.sample(&mut rng)).collect()
}

/// Solve every code in `hidden_codes` with a fresh game each
///
/// # Errors
///
/// Returns an error if a hidden code is not valid for `config`, or if a game
/// exhausts its candidate domain.
pub fn run_benchmark<S>(
    strategy: &S,
    config: GameConfig,
    hidden_codes: &[Code],
) -> Result<BenchmarkResult>
where
    S: Strategy + Clone + Send + Sync,
{
    let start = Instant::now();

    let counts: Vec<(usize, bool)> = hidden_codes
        .par_iter()
        .map_init(
            || Solver::new(strategy.clone(), config),
            |solver, code| -> Result<(usize, bool)> {
                let mut oracle = HiddenCode::new(code.clone(), &config)?;
                let result = solve_code(solver, &mut oracle, SolveConfig::default())?;
                Ok((result.num_guesses(), result.success))
            },
        )
        .collect::<Result<_>>()?;

    let duration = start.elapsed();
    Ok(summarize(&counts, duration))
}

/// Aggregate per-game guess counts into a benchmark result
fn summarize(counts: &[(usize, bool)], duration: Duration) -> BenchmarkResult {
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut total_guesses = 0;
    let mut solved = 0;

    for &(guesses, success) in counts {
        total_guesses += guesses;
        if success {
            solved += 1;
            *distribution.entry(guesses).or_insert(0) += 1;
        }
    }

    let total_games = counts.len();
    let average_guesses = if total_games > 0 {
        total_guesses as f64 / total_games as f64
    } else {
        0.0
    };
    let games_per_second = if duration.as_secs_f64() > 0.0 {
        total_games as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    BenchmarkResult {
        total_games,
        solved,
        total_guesses,
        average_guesses,
        min_guesses: counts.iter().map(|&(g, _)| g).min().unwrap_or(0),
        max_guesses: counts.iter().map(|&(g, _)| g).max().unwrap_or(0),
        distribution,
        duration,
        games_per_second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FirstCandidateStrategy, StrategyType};

    fn small_config() -> GameConfig {
        GameConfig::new(4, 3, true).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let config = small_config();
        let codes = random_hidden_codes(&CodeSpace::new(config), 10, Some(3));

        let result = run_benchmark(&FirstCandidateStrategy, config, &codes).unwrap();

        assert_eq!(result.total_games, 10);
        assert_eq!(result.solved, 10);
        assert!(result.total_guesses >= 10);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let config = small_config();
        let codes = CodeSpace::new(config).to_vec();

        let strategy = StrategyType::from_name("minimax").unwrap();
        let result = run_benchmark(&strategy, config, &codes).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_games);
        assert_eq!(
            result
                .distribution
                .iter()
                .map(|(g, n)| g * n)
                .sum::<usize>(),
            result.total_guesses
        );
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let config = small_config();
        let codes = random_hidden_codes(&CodeSpace::new(config), 20, Some(11));
        let result = run_benchmark(&FirstCandidateStrategy, config, &codes).unwrap();

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn seeded_random_benchmark_is_reproducible() {
        let config = GameConfig::new(5, 4, true).unwrap();
        let codes = random_hidden_codes(&CodeSpace::new(config), 30, Some(21));
        let strategy = StrategyType::from_name("random")
            .unwrap()
            .with_seed(Some(5));

        let first = run_benchmark(&strategy, config, &codes).unwrap();
        let second = run_benchmark(&strategy, config, &codes).unwrap();

        assert_eq!(first.total_guesses, second.total_guesses);
        assert_eq!(first.distribution, second.distribution);
    }

    #[test]
    fn benchmark_empty_code_list() {
        let result = run_benchmark(&FirstCandidateStrategy, small_config(), &[]).unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_rejects_invalid_hidden_code() {
        let config = GameConfig::new(4, 3, false).unwrap();
        let codes = vec![Code::from_indices(&[0, 0, 1])];
        assert!(run_benchmark(&FirstCandidateStrategy, config, &codes).is_err());
    }

    #[test]
    fn seeded_codes_are_reproducible() {
        let space = CodeSpace::new(GameConfig::default());
        assert_eq!(
            random_hidden_codes(&space, 25, Some(99)),
            random_hidden_codes(&space, 25, Some(99))
        );
        assert_eq!(random_hidden_codes(&space, 4, None).len(), 4);
    }
}
