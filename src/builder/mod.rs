//! Builder API for ergonomic store construction.
//!
//! This module provides a fluent builder for creating calculator stores
//! with validated initial snapshots and configured messages.

pub mod error;
pub mod store;

pub use error::BuildError;
pub use store::StoreBuilder;
