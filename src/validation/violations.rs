//! Snapshot invariant violations.

use thiserror::Error;

/// Ways a caller-supplied snapshot can break the calculator's invariants
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SnapshotViolation {
    #[error("Display value '{display}' is not a number and no error is set")]
    UnparsableDisplay { display: String },

    #[error("Operation '{operation}' is pending without a first operand")]
    DanglingOperation { operation: char },

    #[error("First operand {operand} is held without a pending operation")]
    DanglingOperand { operand: f64 },
}
