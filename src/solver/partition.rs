//! Feedback partitions
//!
//! A guess splits the candidate domain into classes of codes that would
//! answer it with the same feedback. Every selection heuristic scores these
//! classes.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Count how many candidates fall into each feedback class for `guess`
#[must_use]
pub fn partition_counts(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::calculate(guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}
