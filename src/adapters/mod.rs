//! Presentation adapters over a single calculator store.
//!
//! Adapters are thin translators: UI events become [`Intent`]s dispatched
//! into the store, and the resulting snapshot is rendered back. None of them
//! keeps its own copy of the operand or pending operator.
//!
//! - [`Controller`]: pushes text to a [`DisplayView`]
//! - [`Presenter`]: pushes text to a [`PresenterView`] it can also read from
//! - [`ViewModel`]: exposes the snapshot and its fields as subscribable values

mod controller;
mod presenter;
mod view_model;

pub use controller::{Controller, DisplayView};
pub use presenter::{Presenter, PresenterView};
pub use view_model::ViewModel;

use crate::core::{CalculatorState, Intent};
use crate::store::CalculatorStore;

/// Capability set shared by the push-style adapters.
pub trait Adapter {
    /// The store intents are dispatched into.
    fn store_mut(&mut self) -> &mut CalculatorStore;

    /// Show a snapshot on the view.
    fn render(&mut self, state: &CalculatorState);

    /// Dispatch an intent and render the snapshot it produced.
    fn dispatch(&mut self, intent: Intent) {
        let state = self.store_mut().dispatch(intent).clone();
        self.render(&state);
    }
}
