//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{Code, GameConfig};
use crate::space::CodeSpace;

/// A strategy for picking the next guess
///
/// The solver only asks a strategy when at least two candidates remain, so
/// `candidates` is never empty. Closures with the signature of
/// [`Strategy::select_guess`] are strategies too.
pub trait Strategy {
    /// Select a guess given the full code space and the current candidates
    ///
    /// Returns `None` if the strategy has no opinion; the solver then falls back
    /// to the first candidate.
    fn select_guess(&self, space: &CodeSpace, candidates: &[Code]) -> Option<Code>;

    /// Fixed first guess of a game, if the strategy has one
    fn opening(&self, _config: &GameConfig) -> Option<Code> {
        None
    }
}

impl<F> Strategy for F
where
    F: Fn(&CodeSpace, &[Code]) -> Option<Code>,
{
    fn select_guess(&self, space: &CodeSpace, candidates: &[Code]) -> Option<Code> {
        self(space, candidates)
    }
}

/// Most guess-candidate scorings a search strategy spends on one turn
///
/// Minimax and entropy search the whole code space while
/// `space.len() * candidates.len()` stays within this budget. Past it they
/// search only the first `SEARCH_BUDGET / candidates.len()` candidates.
pub const SEARCH_BUDGET: usize = 1 << 26;

/// Guesses a search strategy considers, bounded by `budget` scorings
///
/// The bounded pool keeps only candidates, so every guess it yields can still
/// win and always shrinks the domain when it misses.
pub fn search_pool<'a>(
    space: &CodeSpace,
    candidates: &'a [Code],
    budget: usize,
) -> Box<dyn Iterator<Item = Code> + 'a> {
    if space.len().saturating_mul(candidates.len()) <= budget {
        return Box::new(space.iter());
    }

    let take = (budget / candidates.len().max(1)).max(1);
    tracing::debug!(
        space = space.len(),
        candidates = candidates.len(),
        pool = take.min(candidates.len()),
        "search restricted to candidates"
    );
    Box::new(candidates.iter().take(take).cloned())
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// First remaining candidate in lexicographic order
    First(FirstCandidateStrategy),
    /// Random selection from candidates
    Random(RandomStrategy),
    /// Knuth's worst-case minimization (default)
    Minimax(MinimaxStrategy),
    /// Pure entropy maximization
    Entropy(EntropyStrategy),
    /// Hybrid entropy/minimax
    Hybrid(HybridStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&self, space: &CodeSpace, candidates: &[Code]) -> Option<Code> {
        match self {
            Self::First(s) => s.select_guess(space, candidates),
            Self::Random(s) => s.select_guess(space, candidates),
            Self::Minimax(s) => s.select_guess(space, candidates),
            Self::Entropy(s) => s.select_guess(space, candidates),
            Self::Hybrid(s) => s.select_guess(space, candidates),
        }
    }

    fn opening(&self, config: &GameConfig) -> Option<Code> {
        match self {
            Self::First(s) => s.opening(config),
            Self::Random(s) => s.opening(config),
            Self::Minimax(s) => s.opening(config),
            Self::Entropy(s) => s.opening(config),
            Self::Hybrid(s) => s.opening(config),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 5] = ["first", "random", "minimax", "entropy", "hybrid"];

    /// Create strategy from name string
    ///
    /// Supported names: "first", "random", "minimax" (alias "knuth"), "entropy", "hybrid".
    /// Returns `None` if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "first" | "first-candidate" => Some(Self::First(FirstCandidateStrategy)),
            "random" => Some(Self::Random(RandomStrategy::new())),
            "minimax" | "knuth" => Some(Self::Minimax(MinimaxStrategy::default())),
            "entropy" => Some(Self::Entropy(EntropyStrategy)),
            "hybrid" => Some(Self::Hybrid(HybridStrategy::default())),
            _ => None,
        }
    }

    /// Seed the random strategy; other strategies are deterministic already
    #[must_use]
    pub fn with_seed(self, seed: Option<u64>) -> Self {
        match (self, seed) {
            (Self::Random(_), Some(seed)) => Self::Random(RandomStrategy::seeded(seed)),
            (other, _) => other,
        }
    }

    /// Short name of the selected strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::First(_) => "first",
            Self::Random(_) => "random",
            Self::Minimax(_) => "minimax",
            Self::Entropy(_) => "entropy",
            Self::Hybrid(_) => "hybrid",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Minimax(MinimaxStrategy::default())
    }
}

/// First candidate strategy
///
/// The minimal consistent policy: always guess a code that could still be the answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn select_guess(&self, _space: &CodeSpace, candidates: &[Code]) -> Option<Code> {
        candidates.first().cloned()
    }
}

/// Random strategy
///
/// Picks uniformly among the remaining candidates. A seeded strategy derives
/// each pick from the seed and the candidates alone, so a game replays the
/// same way on any thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy {
    seed: Option<u64>,
}

impl RandomStrategy {
    /// Unseeded strategy drawing from the thread-local generator
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: None }
    }

    /// Reproducible strategy
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Seed of a reproducible strategy
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Strategy for RandomStrategy {
    fn select_guess(&self, _space: &CodeSpace, candidates: &[Code]) -> Option<Code> {
        use rand::SeedableRng;
        use rand::prelude::IndexedRandom;
        use rand::rngs::StdRng;
        use std::hash::{Hash, Hasher};

        match self.seed {
            None => candidates.choose(&mut rand::rng()).cloned(),
            Some(seed) => {
                let mut hasher = rustc_hash::FxHasher::default();
                seed.hash(&mut hasher);
                candidates.hash(&mut hasher);
                let mut rng = StdRng::seed_from_u64(hasher.finish());
                candidates.choose(&mut rng).cloned()
            }
        }
    }
}

/// Pure minimax strategy
///
/// Considers every code in the space as a guess and selects the one that
/// minimizes worst-case remaining candidates, preferring candidates on ties.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxStrategy {
    /// Open with Knuth's `AABB` pattern instead of searching the first turn
    pub knuth_opening: bool,
}

impl MinimaxStrategy {
    /// Create a minimax strategy
    #[must_use]
    pub const fn new(knuth_opening: bool) -> Self {
        Self { knuth_opening }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Strategy for MinimaxStrategy {
    fn select_guess(&self, space: &CodeSpace, candidates: &[Code]) -> Option<Code> {
        let pool = search_pool(space, candidates, SEARCH_BUDGET);
        super::minimax::select_best_guess(pool, candidates).map(|(best, _)| best)
    }

    fn opening(&self, config: &GameConfig) -> Option<Code> {
        if self.knuth_opening {
            Code::knuth_opening(config)
        } else {
            None
        }
    }
}

/// Pure entropy maximization strategy
///
/// Always selects the guess with the highest Shannon entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess(&self, space: &CodeSpace, candidates: &[Code]) -> Option<Code> {
        let pool = search_pool(space, candidates, SEARCH_BUDGET);
        super::entropy::select_best_guess(pool, candidates).map(|(best, _)| best)
    }
}

/// Hybrid strategy combining entropy and minimax
///
/// Uses entropy when many candidates remain, switches to minimax near the end.
#[derive(Debug, Clone, Copy)]
pub struct HybridStrategy {
    /// Switch to minimax when candidates <= this threshold
    pub minimax_threshold: usize,
}

impl HybridStrategy {
    /// Create a new hybrid strategy
    ///
    /// # Parameters
    /// - `minimax_threshold`: Switch to minimax when candidates <= this value (default: 20)
    #[must_use]
    pub const fn new(minimax_threshold: usize) -> Self {
        Self { minimax_threshold }
    }
}

impl Default for HybridStrategy {
    fn default() -> Self {
        Self::new(20)
    }
}

impl Strategy for HybridStrategy {
    fn select_guess(&self, space: &CodeSpace, candidates: &[Code]) -> Option<Code> {
        if candidates.len() <= self.minimax_threshold {
            MinimaxStrategy::new(false).select_guess(space, candidates)
        } else {
            EntropyStrategy.select_guess(space, candidates)
        }
    }

    fn opening(&self, config: &GameConfig) -> Option<Code> {
        Code::knuth_opening(config)
    }
}
