//! Imperative shell around the pure core.
//!
//! - **Channel**: single-slot broadcast of the current snapshot
//! - **Store**: runs the reducer, records history and republishes

mod channel;
#[allow(clippy::module_inception)]
mod store;

pub use channel::{Observer, StateChannel, SubscriptionId};
pub use store::{CalculatorStore, Store, DEFAULT_HISTORY_LIMIT};
