//! Presenter-style adapter.

use super::Adapter;
use crate::core::{CalculatorState, Intent};
use crate::store::CalculatorStore;

/// Passive view driven by a [`Presenter`].
pub trait PresenterView {
    fn show_result(&mut self, result: &str);
    fn show_error(&mut self, message: &str);
    /// Text the view is currently showing.
    fn current_input(&self) -> String;
}

/// Mediates between a passive view and the store.
///
/// The store owns the operand and pending operator; the view's own text is
/// only read to detect when it has drifted from the canonical display.
pub struct Presenter<V: PresenterView> {
    store: CalculatorStore,
    view: V,
    // Error message last pushed through `show_error`, until a result replaces it.
    shown_error: Option<String>,
}

impl<V: PresenterView> Presenter<V> {
    pub fn new(view: V) -> Self {
        Self::with_store(CalculatorStore::default(), view)
    }

    pub fn with_store(store: CalculatorStore, view: V) -> Self {
        let mut presenter = Self {
            store,
            view,
            shown_error: None,
        };
        presenter.refresh();
        presenter
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

    /// Re-render when the view no longer matches the store.
    ///
    /// An error snapshot is in sync once its message has been shown; any
    /// other snapshot is in sync when the view's text equals the display.
    /// Returns `true` if the view was updated.
    pub fn refresh(&mut self) -> bool {
        let state = self.store.state();
        let in_sync = match &state.error {
            Some(_) => self.shown_error == state.error,
            None => {
                self.shown_error.is_none() && self.view.current_input() == state.display_value
            }
        };
        if in_sync {
            return false;
        }
        let state = state.clone();
        self.render(&state);
        true
    }

    pub fn state(&self) -> &CalculatorState {
        self.store.state()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn dispose(self) -> (V, CalculatorState) {
        (self.view, self.store.dispose())
    }
}

impl<V: PresenterView> Adapter for Presenter<V> {
    fn store_mut(&mut self) -> &mut CalculatorStore {
        &mut self.store
    }

    fn render(&mut self, state: &CalculatorState) {
        match &state.error {
            Some(message) => self.view.show_error(message),
            None => self.view.show_result(&state.display_value),
        }
        self.shown_error = state.error.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TextField {
        text: String,
        error: Option<String>,
        renders: usize,
    }

    impl PresenterView for TextField {
        fn show_result(&mut self, result: &str) {
            self.text = result.to_string();
            self.error = None;
            self.renders += 1;
        }

        fn show_error(&mut self, message: &str) {
            self.error = Some(message.to_string());
            self.renders += 1;
        }

        fn current_input(&self) -> String {
            self.text.clone()
        }
    }

    #[test]
    fn attaching_syncs_the_view() {
        let presenter = Presenter::new(TextField::default());
        assert_eq!(presenter.view().text, "0");
        assert_eq!(presenter.view().renders, 1);
    }

    #[test]
    fn computes_through_the_store() {
        let mut presenter = Presenter::new(TextField::default());
        presenter.on_number_click(9);
        presenter.on_operation_click('-');
        presenter.on_number_click(4);
        presenter.on_equals_click();

        assert_eq!(presenter.view().text, "5.0");
        assert_eq!(presenter.state().first_number, Some(9.0));
    }

    #[test]
    fn refresh_repairs_drifted_view() {
        let mut presenter = Presenter::new(TextField::default());
        presenter.on_number_click(3);
        assert!(!presenter.refresh());

        presenter.view_mut().text = "typed by hand".to_string();
        assert!(presenter.refresh());
        assert_eq!(presenter.view().text, "3");
    }

    #[test]
    fn error_is_shown_without_touching_text() {
        let store = crate::builder::StoreBuilder::new()
            .initial(CalculatorState {
                display_value: "7".to_string(),
                first_number: Some(7.0),
                operation: Some('^'),
                ..CalculatorState::default()
            })
            .build()
            .unwrap();
        let mut presenter = Presenter::with_store(store, TextField::default());
        presenter.on_equals_click();

        assert_eq!(presenter.view().error.as_deref(), Some("calculation error"));
        assert_eq!(presenter.view().text, "7");
    }

    #[test]
    fn refresh_does_not_repeat_shown_error() {
        let mut presenter = Presenter::new(TextField::default());
        presenter.on_number_click(1);
        presenter.on_operation_click('x');
        presenter.on_equals_click();
        let renders = presenter.view().renders;
        assert_eq!(presenter.view().error.as_deref(), Some("calculation error"));

        assert!(!presenter.refresh());
        assert!(!presenter.refresh());
        assert_eq!(presenter.view().renders, renders);

        presenter.on_clear_click();
        assert!(presenter.view().error.is_none());
        assert!(!presenter.refresh());
    }
}
