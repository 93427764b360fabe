//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_code, partition_sizes};
pub use benchmark::{BenchmarkResult, random_hidden_codes, run_benchmark};
pub use play::{SessionEnd, play_session, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_code};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
