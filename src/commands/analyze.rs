//! Code analysis command
//!
//! Analyzes how well a specific code splits the full code space as an opening guess.

use crate::core::{Code, Feedback, GameConfig};
use crate::error::Result;
use crate::solver::entropy::calculate_metrics;
use crate::solver::partition::partition_counts;
use crate::space::CodeSpace;

/// Result of analyzing a code
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub code: Code,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub partitions: usize,
    pub total_candidates: usize,
}

/// Analyze a code as the first guess of a game
///
/// # Errors
///
/// Returns an error if the text is not a valid code for `config`
pub fn analyze_code(code: &str, config: &GameConfig) -> Result<AnalysisResult> {
    let code = Code::parse(code, config)?;
    let candidates = CodeSpace::new(*config).to_vec();

    let metrics = calculate_metrics(&code, &candidates);
    let expected_reduction = metrics.entropy.exp2();

    Ok(AnalysisResult {
        code,
        entropy: metrics.entropy,
        expected_reduction,
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        partitions: metrics.partitions,
        total_candidates: candidates.len(),
    })
}

/// Partition sizes of a guess against the full space, largest first
///
/// # Errors
///
/// Returns an error if the text is not a valid code for `config`
pub fn partition_sizes(code: &str, config: &GameConfig) -> Result<Vec<(Feedback, usize)>> {
    let code = Code::parse(code, config)?;
    let candidates = CodeSpace::new(*config).to_vec();

    let mut sizes: Vec<_> = partition_counts(&code, &candidates).into_iter().collect();
    sizes.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    Ok(sizes)
}
