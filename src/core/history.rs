//! Transition history tracking.
//!
//! Provides immutable tracking of dispatched intents and the snapshots they
//! produced, following functional programming principles.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied intent.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use mvi_calc::core::{transition, CalculatorState, Intent, StateTransition};
///
/// let from = CalculatorState::default();
/// let intent = Intent::NumberEntered(4);
/// let record = StateTransition {
///     to: transition(&from, &intent),
///     from,
///     intent,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to.display_value, "4");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "I: Serialize", deserialize = "I: DeserializeOwned"))]
pub struct StateTransition<S: State, I> {
    /// The snapshot the intent was applied to
    pub from: S,
    /// The snapshot the intent produced
    pub to: S,
    /// The intent that was applied
    pub intent: I,
    /// When the intent was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied intents.
///
/// History is immutable - `record` and `retain_last` return a new history.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "I: Serialize", deserialize = "I: DeserializeOwned"))]
pub struct StateHistory<S: State, I> {
    transitions: Vec<StateTransition<S, I>>,
}

impl<S: State, I: Clone> Default for StateHistory<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, I: Clone> StateHistory<S, I> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the transition added.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::Utc;
    /// use mvi_calc::core::{CalculatorState, Intent, StateHistory, StateTransition};
    ///
    /// let history = StateHistory::new();
    /// let new_history = history.record(StateTransition {
    ///     from: CalculatorState::default(),
    ///     to: CalculatorState::default(),
    ///     intent: Intent::Cleared,
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// assert_eq!(new_history.transitions().len(), 1);
    /// assert_eq!(history.transitions().len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, transition: StateTransition<S, I>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Keep only the most recent `limit` transitions, returning a new history.
    pub fn retain_last(&self, limit: usize) -> Self {
        let skip = self.transitions.len().saturating_sub(limit);
        Self {
            transitions: self.transitions[skip..].to_vec(),
        }
    }

    /// Append in place, dropping the oldest entries beyond `limit`.
    ///
    /// For owners of a history; shared values go through `record`.
    pub(crate) fn push_bounded(&mut self, transition: StateTransition<S, I>, limit: usize) {
        self.transitions.push(transition);
        let excess = self.transitions.len().saturating_sub(limit);
        self.transitions.drain(..excess);
    }

    /// Get the path of snapshots traversed.
    ///
    /// Returns references in order: the first `from` snapshot, then the `to`
    /// snapshot of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Get the applied intents in order.
    pub fn intents(&self) -> Vec<&I> {
        self.transitions.iter().map(|t| &t.intent).collect()
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S, I>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
