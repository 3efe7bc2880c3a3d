//! Builder for constructing calculator stores.

use crate::builder::error::BuildError;
use crate::core::{CalculatorReducer, CalculatorState, Messages};
use crate::store::{CalculatorStore, Store, DEFAULT_HISTORY_LIMIT};
use crate::validation::snapshot_violations;

/// Builder for constructing calculator stores with a fluent API.
#[derive(Debug, Clone)]
pub struct StoreBuilder {
    messages: Messages,
    initial: Option<CalculatorState>,
    history_limit: Option<usize>,
}

impl StoreBuilder {
    /// Create a new builder with English messages, a fresh initial snapshot
    /// and the default history limit.
    pub fn new() -> Self {
        Self {
            messages: Messages::default(),
            initial: None,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }

    /// Set the messages written into error snapshots.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Start from a caller-supplied snapshot instead of a fresh one.
    /// The snapshot is validated by `build()`.
    pub fn initial(mut self, state: CalculatorState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Keep at most `limit` transitions in the store's history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Do not record transitions at all.
    pub fn without_history(mut self) -> Self {
        self.history_limit = None;
        self
    }

    /// Build the store.
    /// Returns an error if the initial snapshot or history limit is invalid.
    pub fn build(self) -> Result<CalculatorStore, BuildError> {
        if self.history_limit == Some(0) {
            return Err(BuildError::ZeroHistoryLimit);
        }

        let initial = match self.initial {
            Some(state) => {
                let violations = snapshot_violations(&state);
                if !violations.is_empty() {
                    return Err(BuildError::InvalidInitialState { violations });
                }
                state
            }
            None => CalculatorState::default(),
        };

        Ok(Store::from_parts(
            CalculatorReducer::new(self.messages),
            initial,
            self.history_limit,
        ))
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
