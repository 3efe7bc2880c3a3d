//! Build errors for the store builder.

use crate::validation::SnapshotViolation;
use thiserror::Error;

/// Errors that can occur when building a store.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state breaks {} invariant(s): {}", .violations.len(), describe(.violations))]
    InvalidInitialState { violations: Vec<SnapshotViolation> },

    #[error("History limit must be positive. Call .without_history() to disable history")]
    ZeroHistoryLimit,
}

fn describe(violations: &[SnapshotViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
