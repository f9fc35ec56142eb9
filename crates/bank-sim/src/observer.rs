//! Simulation observer trait for progress reporting and data collection.

use bank_core::{Customer, Minute, WindowId};
use bank_history::HistoryEntry;

use crate::Summary;

/// Callbacks invoked by [`Simulation::step`][crate::Simulation::step] and
/// [`Simulation::run`][crate::Simulation::run] as events are processed.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// A customer joined `window`; its departure is scheduled at `departure`.
    fn on_arrival(&mut self, _customer: &Customer, _window: WindowId, _departure: Minute) {}

    /// Every window was full; the customer left without queuing.
    fn on_turned_away(&mut self, _customer: &Customer) {}

    /// A customer finished service and was written to the ledger.
    fn on_departure(&mut self, _entry: &HistoryEntry) {}

    /// Called once after the last event.
    fn on_sim_end(&mut self, _summary: &Summary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
