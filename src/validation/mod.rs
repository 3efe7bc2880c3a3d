//! Validation of caller-supplied calculator snapshots.
//!
//! Uses Stillwater's `Validation` type to accumulate ALL violations instead
//! of stopping at the first one, so a rejected snapshot reports everything
//! that is wrong with it in a single pass.

pub mod rules;
pub mod violations;

pub use rules::{snapshot_violations, validate_snapshot, SnapshotCheck};
pub use violations::SnapshotViolation;
