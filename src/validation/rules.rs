//! Invariant checks for calculator snapshots using Validation.

use crate::core::{parse_number, CalculatorState};
use crate::validation::violations::SnapshotViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for the outcome of a single check
pub type SnapshotCheck = Validation<(), NonEmptyVec<SnapshotViolation>>;

/// Check every invariant, accumulating ALL violations.
///
/// Returns `Validation::Success(())` if the snapshot could have been produced
/// by the transition function, otherwise `Validation::Failure` with every
/// broken invariant.
///
/// # Example
///
/// ```rust
/// use mvi_calc::core::CalculatorState;
/// use mvi_calc::validation::validate_snapshot;
///
/// assert!(validate_snapshot(&CalculatorState::default()).is_success());
///
/// let broken = CalculatorState {
///     display_value: "x".to_string(),
///     operation: Some('+'),
///     ..CalculatorState::default()
/// };
/// assert!(validate_snapshot(&broken).is_failure());
/// ```
pub fn validate_snapshot(state: &CalculatorState) -> SnapshotCheck {
    let checks = vec![check_display(state), check_pending_pair(state)];

    Validation::all_vec(checks).map(|_| ())
}

/// Like [`validate_snapshot`], flattened into a plain list.
pub fn snapshot_violations(state: &CalculatorState) -> Vec<SnapshotViolation> {
    match validate_snapshot(state) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

fn check_display(state: &CalculatorState) -> SnapshotCheck {
    if state.error.is_some() || parse_number(&state.display_value).is_some() {
        Validation::success(())
    } else {
        Validation::fail(SnapshotViolation::UnparsableDisplay {
            display: state.display_value.clone(),
        })
    }
}

fn check_pending_pair(state: &CalculatorState) -> SnapshotCheck {
    match (state.first_number, state.operation) {
        (None, Some(operation)) => {
            Validation::fail(SnapshotViolation::DanglingOperation { operation })
        }
        (Some(operand), None) => Validation::fail(SnapshotViolation::DanglingOperand { operand }),
        _ => Validation::success(()),
    }
}
