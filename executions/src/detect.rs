//! Change detection: which executions are worth showing.

#[cfg(test)]
#[path = "detect_test.rs"]
mod detect_test;

use crate::record::ExecutionRecord;

/// An execution is relevant when it carries a non-empty change summary or its
/// trigger condition fired.
#[must_use]
pub fn is_relevant(record: &ExecutionRecord) -> bool {
    record.has_summary() || record.condition_met
}

/// Stable, order-preserving subsequence of `records` that are relevant.
///
/// An empty result is a valid "nothing changed" answer, not a loading state.
#[must_use]
pub fn relevant_executions(records: &[ExecutionRecord]) -> Vec<&ExecutionRecord> {
    records.iter().filter(|record| is_relevant(record)).collect()
}
