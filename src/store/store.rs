//! Stateful holder that runs a pure reducer and republishes its snapshots.

use super::channel::{StateChannel, SubscriptionId};
use crate::core::{CalculatorReducer, Reducer, State, StateHistory, StateTransition};
use chrono::Utc;
use std::fmt;
use tracing::{debug, info, warn};

/// Number of transitions a store remembers unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Store over the calculator reducer.
pub type CalculatorStore = Store<CalculatorReducer>;

/// Owns the current snapshot, applies intents through the reducer and
/// publishes each new snapshot to observers.
///
/// A store is created explicitly and disposed explicitly with
/// [`Store::dispose`]. It carries no locking; hosts that share it across
/// threads serialize access themselves.
///
/// # Example
///
/// ```rust
/// use mvi_calc::core::Intent;
/// use mvi_calc::store::CalculatorStore;
///
/// let mut store = CalculatorStore::default();
/// store.dispatch(Intent::NumberEntered(5));
/// store.dispatch(Intent::OperatorSelected('+'));
/// store.dispatch(Intent::NumberEntered(3));
/// let state = store.dispatch(Intent::EqualsPressed);
///
/// assert_eq!(state.display_value, "8.0");
/// assert_eq!(store.history().len(), 4);
///
/// let last = store.dispose();
/// assert_eq!(last.display_value, "8.0");
/// ```
pub struct Store<R: Reducer> {
    reducer: R,
    channel: StateChannel<R::State>,
    history: StateHistory<R::State, R::Intent>,
    history_limit: Option<usize>,
}

impl<R: Reducer> Store<R> {
    /// Create a store starting from the reducer's initial snapshot.
    pub fn new(reducer: R) -> Self {
        let initial = reducer.initial();
        Self::from_parts(reducer, initial, Some(DEFAULT_HISTORY_LIMIT))
    }

    pub(crate) fn from_parts(reducer: R, initial: R::State, history_limit: Option<usize>) -> Self {
        Self {
            reducer,
            channel: StateChannel::new(initial),
            history: StateHistory::new(),
            history_limit,
        }
    }

    /// Current snapshot (pure)
    pub fn state(&self) -> &R::State {
        self.channel.current()
    }

    pub fn reducer(&self) -> &R {
        &self.reducer
    }

    /// Recorded transitions, oldest first (pure)
    pub fn history(&self) -> &StateHistory<R::State, R::Intent> {
        &self.history
    }

    pub fn history_limit(&self) -> Option<usize> {
        self.history_limit
    }

    /// Apply an intent, record it, publish the result and return it.
    ///
    /// Observers have all been notified by the time this returns.
    pub fn dispatch(&mut self, intent: R::Intent) -> &R::State {
        let from = self.channel.current().clone();
        let to = self.reducer.reduce(&from, &intent);

        debug!(intent = ?intent, from = from.name(), to = to.name(), "intent applied");
        if to.is_error() && !from.is_error() {
            warn!(intent = ?intent, state = ?to, "intent produced an error snapshot");
        }

        self.record(from, to.clone(), intent);
        self.channel.publish(to);
        self.channel.current()
    }

    fn record(&mut self, from: R::State, to: R::State, intent: R::Intent) {
        let Some(limit) = self.history_limit.filter(|limit| *limit > 0) else {
            return;
        };

        self.history.push_bounded(
            StateTransition {
                from,
                to,
                intent,
                timestamp: Utc::now(),
            },
            limit,
        );
    }

    /// Register an observer; it is called immediately with the current snapshot.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&R::State) + Send + 'static,
    {
        self.channel.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.channel.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.channel.subscriber_count()
    }

    /// End the store's lifecycle, dropping every observer.
    ///
    /// Returns the final snapshot.
    pub fn dispose(self) -> R::State {
        info!(
            observers = self.channel.subscriber_count(),
            transitions = self.history.len(),
            "store disposed"
        );
        self.channel.into_inner()
    }
}

impl<R: Reducer + Default> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: Reducer + fmt::Debug> fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("reducer", &self.reducer)
            .field("channel", &self.channel)
            .field("history", &self.history.len())
            .field("history_limit", &self.history_limit)
            .finish()
    }
}
