//! Core calculator types and logic.
//!
//! This module contains the pure functional core:
//! - Snapshot and reducer contracts via the `State` and `Reducer` traits
//! - The arithmetic engine
//! - The calculator snapshot, intents and transition function
//! - Immutable history tracking
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod calculator;
mod engine;
mod history;
mod state;
mod transition;

pub use calculator::{CalculatorState, Intent, Phase};
pub use engine::{add, apply, divide, multiply, subtract, EngineError, Operator};
pub use history::{StateHistory, StateTransition};
pub use state::{Reducer, State};
pub use transition::{
    format_number, parse_number, transition, transition_with, CalcError, CalculatorReducer,
    ErrorKind, Messages,
};
