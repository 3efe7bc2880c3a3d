//! Core `State` and `Reducer` traits.
//!
//! A state is an immutable snapshot. A reducer is the pure function that maps
//! a snapshot and an intent to the next snapshot.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for snapshots held and published by a store.
///
/// All methods are pure - no side effects. Snapshots are replaced wholesale
/// on every transition and never mutated after being published.
///
/// # Required Traits
///
/// - `Clone`: snapshots are handed out to observers and recorded in history
/// - `PartialEq`: snapshots must be comparable for no-op detection
/// - `Debug`: snapshots must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: snapshots must be serializable for inspection
///
/// # Example
///
/// ```rust
/// use mvi_calc::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
///     Broken,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///             Self::Broken => "Broken",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this snapshot carries an error.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Pure transition function over a [`State`].
///
/// `reduce` must be deterministic and must not panic: every failure is
/// expressed in the returned snapshot.
///
/// # Example
///
/// ```rust
/// use mvi_calc::core::{Reducer, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Counter(i64);
///
/// impl State for Counter {
///     fn name(&self) -> &str {
///         "Counter"
///     }
/// }
///
/// struct CounterReducer;
///
/// impl Reducer for CounterReducer {
///     type State = Counter;
///     type Intent = i64;
///
///     fn initial(&self) -> Counter {
///         Counter(0)
///     }
///
///     fn reduce(&self, state: &Counter, delta: &i64) -> Counter {
///         Counter(state.0.saturating_add(*delta))
///     }
/// }
///
/// let reducer = CounterReducer;
/// let next = reducer.reduce(&reducer.initial(), &5);
/// assert_eq!(next, Counter(5));
/// ```
pub trait Reducer: Send + Sync {
    type State: State;
    type Intent: Clone + Debug + Serialize + DeserializeOwned + Send + Sync;

    /// The fresh snapshot a store starts from.
    fn initial(&self) -> Self::State;

    /// Apply one intent to a snapshot, producing the next snapshot.
    fn reduce(&self, state: &Self::State, intent: &Self::Intent) -> Self::State;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Busy,
        Failed,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Busy => "Busy",
                Self::Failed => "Failed",
            }
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Failed)
        }
    }

    struct Toggle;

    impl Reducer for Toggle {
        type State = TestState;
        type Intent = bool;

        fn initial(&self) -> TestState {
            TestState::Idle
        }

        fn reduce(&self, state: &TestState, ok: &bool) -> TestState {
            match (state, ok) {
                (_, false) => TestState::Failed,
                (TestState::Idle, true) => TestState::Busy,
                (_, true) => TestState::Idle,
            }
        }
    }

    #[test]
    fn default_predicates_are_false() {
        assert!(!TestState::Idle.is_final());
        assert!(!TestState::Idle.is_error());
        assert!(TestState::Failed.is_error());
    }

    #[test]
    fn reducer_is_deterministic() {
        let reducer = Toggle;
        let start = reducer.initial();
        assert_eq!(reducer.reduce(&start, &true), reducer.reduce(&start, &true));
        assert_eq!(reducer.reduce(&start, &false), TestState::Failed);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Busy;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
        assert_eq!(deserialized.name(), "Busy");
    }
}
