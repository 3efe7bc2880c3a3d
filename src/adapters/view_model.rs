//! Observable-state adapter.

use crate::core::{CalculatorState, Intent};
use crate::store::{CalculatorStore, SubscriptionId};

/// Exposes the store's snapshot, and its display and error fields, as
/// values a rendering layer can bind to.
///
/// Field subscriptions are distinct-until-changed: an observer of the display
/// text is only called again when the text differs from what it last saw.
///
/// # Example
///
/// ```rust
/// use mvi_calc::adapters::ViewModel;
/// use mvi_calc::core::Intent;
/// use std::sync::{Arc, Mutex};
///
/// let mut vm = ViewModel::new();
/// let shown = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&shown);
/// vm.subscribe_display(move |text| sink.lock().unwrap().push(text.to_string()));
///
/// vm.process_intent(Intent::NumberEntered(0));
/// vm.process_intent(Intent::NumberEntered(6));
///
/// assert_eq!(*shown.lock().unwrap(), vec!["0", "6"]);
/// vm.dispose();
/// ```
pub struct ViewModel {
    store: CalculatorStore,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::with_store(CalculatorStore::default())
    }

    pub fn with_store(store: CalculatorStore) -> Self {
        Self { store }
    }

    pub fn process_intent(&mut self, intent: Intent) -> &CalculatorState {
        self.store.dispatch(intent)
    }

    pub fn state(&self) -> &CalculatorState {
        self.store.state()
    }

    pub fn display_text(&self) -> &str {
        &self.store.state().display_value
    }

    pub fn error_text(&self) -> Option<&str> {
        self.store.state().error.as_deref()
    }

    /// Observe whole snapshots.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&CalculatorState) + Send + 'static,
    {
        self.store.subscribe(observer)
    }

    /// Observe the display text.
    pub fn subscribe_display<F>(&mut self, mut observer: F) -> SubscriptionId
    where
        F: FnMut(&str) + Send + 'static,
    {
        let mut last: Option<String> = None;
        self.store.subscribe(move |state: &CalculatorState| {
            if last.as_deref() != Some(state.display_value.as_str()) {
                observer(&state.display_value);
                last = Some(state.display_value.clone());
            }
        })
    }

    /// Observe the error text; `None` means no error.
    pub fn subscribe_error<F>(&mut self, mut observer: F) -> SubscriptionId
    where
        F: FnMut(Option<&str>) + Send + 'static,
    {
        let mut last: Option<Option<String>> = None;
        self.store.subscribe(move |state: &CalculatorState| {
            if last.as_ref() != Some(&state.error) {
                observer(state.error.as_deref());
                last = Some(state.error.clone());
            }
        })
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// End the view model's lifecycle. Every binding is dropped.
    pub fn dispose(self) -> CalculatorState {
        self.store.dispose()
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}
