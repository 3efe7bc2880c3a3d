//! Single-slot, last-value-wins broadcast of the current snapshot.

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;
use uuid::Uuid;

/// Handle returned by [`StateChannel::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Observer callback registered on a channel.
pub type Observer<S> = Box<dyn FnMut(&S) + Send>;

/// Holds exactly one current value and notifies observers on every publish.
///
/// There is no buffering: a late subscriber sees the value current at
/// subscription time and everything published afterwards.
///
/// # Example
///
/// ```rust
/// use mvi_calc::core::CalculatorState;
/// use mvi_calc::store::StateChannel;
/// use std::sync::{Arc, Mutex};
///
/// let mut channel = StateChannel::new(CalculatorState::default());
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&seen);
/// channel.subscribe(move |s: &CalculatorState| {
///     sink.lock().unwrap().push(s.display_value.clone());
/// });
///
/// channel.publish(CalculatorState {
///     display_value: "7".to_string(),
///     ..CalculatorState::default()
/// });
///
/// assert_eq!(*seen.lock().unwrap(), vec!["0", "7"]);
/// ```
pub struct StateChannel<S: State> {
    current: S,
    observers: Vec<(SubscriptionId, Observer<S>)>,
}

impl<S: State> StateChannel<S> {
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            observers: Vec::new(),
        }
    }

    /// The value currently held.
    pub fn current(&self) -> &S {
        &self.current
    }

    /// Replace the held value and notify every observer in registration
    /// order before returning.
    pub fn publish(&mut self, state: S) {
        self.current = state;
        for (_, observer) in &mut self.observers {
            observer(&self.current);
        }
    }

    /// Register an observer. It is called immediately with the current value.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&S) + Send + 'static,
    {
        let id = SubscriptionId::new();
        let mut observer: Observer<S> = Box::new(observer);
        observer(&self.current);
        self.observers.push((id, observer));
        trace!(subscription = %id, observers = self.observers.len(), "observer subscribed");
        id
    }

    /// Remove an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        let removed = self.observers.len() != before;
        trace!(subscription = %id, removed, "observer unsubscribed");
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Drop every observer and hand back the held value.
    pub fn into_inner(self) -> S {
        self.current
    }
}

impl<S: State> fmt::Debug for StateChannel<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateChannel")
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}
