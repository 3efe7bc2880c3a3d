//! Controller-style adapter.

use super::Adapter;
use crate::core::{CalculatorState, Intent};
use crate::store::CalculatorStore;

/// Display capability driven by a [`Controller`].
pub trait DisplayView {
    fn update_display(&mut self, value: &str);
    fn show_error(&mut self, message: &str);
}

/// Translates button clicks into intents and pushes the outcome to a
/// [`DisplayView`].
pub struct Controller<V: DisplayView> {
    store: CalculatorStore,
    view: V,
}

impl<V: DisplayView> Controller<V> {
    /// Create a controller over a fresh store and render its initial snapshot.
    pub fn new(view: V) -> Self {
        Self::with_store(CalculatorStore::default(), view)
    }

    pub fn with_store(store: CalculatorStore, view: V) -> Self {
        let mut controller = Self { store, view };
        let initial = controller.store.state().clone();
        controller.render(&initial);
        controller
    }

    pub fn on_number_click(&mut self, digit: u8) {
        self.dispatch(Intent::NumberEntered(digit));
    }

    pub fn on_operation_click(&mut self, symbol: char) {
        self.dispatch(Intent::OperatorSelected(symbol));
    }

    pub fn on_equals_click(&mut self) {
        self.dispatch(Intent::EqualsPressed);
    }

    pub fn on_clear_click(&mut self) {
        self.dispatch(Intent::Cleared);
    }

    pub fn state(&self) -> &CalculatorState {
        self.store.state()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Dispose the underlying store and hand back the view.
    pub fn dispose(self) -> (V, CalculatorState) {
        (self.view, self.store.dispose())
    }
}

impl<V: DisplayView> Adapter for Controller<V> {
    fn store_mut(&mut self) -> &mut CalculatorStore {
        &mut self.store
    }

    fn render(&mut self, state: &CalculatorState) {
        match &state.error {
            Some(message) => self.view.show_error(message),
            None => self.view.update_display(&state.display_value),
        }
    }
}
