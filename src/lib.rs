//! mvi-calc: a four-function calculator driven by a pure intent reducer
//!
//! The calculator follows the "pure core, imperative shell" philosophy.
//! The transition function maps a snapshot and an intent to the next
//! snapshot with no side effects; a thin store holds the current snapshot,
//! records history and broadcasts each new snapshot to observers.
//!
//! # Core Concepts
//!
//! - **State**: immutable `CalculatorState` snapshots, replaced on every intent
//! - **Intent**: discrete user events (`NumberEntered`, `OperatorSelected`, ...)
//! - **Transition**: total, pure function; failures land in `state.error`
//! - **Store**: explicit lifecycle, last-value-wins observer channel
//! - **Adapters**: controller, presenter and view-model shapes over one store
//!
//! # Example
//!
//! ```rust
//! use mvi_calc::builder::StoreBuilder;
//! use mvi_calc::core::{Intent, Messages};
//!
//! let mut store = StoreBuilder::new()
//!     .messages(Messages::default())
//!     .build()
//!     .unwrap();
//!
//! for intent in [
//!     Intent::NumberEntered(5),
//!     Intent::OperatorSelected('/'),
//!     Intent::NumberEntered(0),
//!     Intent::EqualsPressed,
//! ] {
//!     store.dispatch(intent);
//! }
//!
//! assert_eq!(store.state().display_value, "inf");
//! assert!(store.state().error.is_none());
//! ```

pub mod adapters;
pub mod builder;
pub mod core;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{transition, CalculatorState, Intent, Messages, Reducer, State};
pub use crate::store::{CalculatorStore, Store, SubscriptionId};
