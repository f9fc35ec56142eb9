//! `HistoryLedger` — per-window append-only service log.

use bank_core::{Customer, Minute, WindowId};

use crate::{HistoryError, HistoryResult};

/// One completed service.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub customer:  Customer,
    pub window:    WindowId,
    pub departure: Minute,
}

impl HistoryEntry {
    /// Minutes between arrival and departure.
    pub fn time_in_bank(&self) -> u32 {
        self.departure.saturating_since(self.customer.arrival)
    }

    /// Minutes spent waiting before service started.  Zero when the
    /// customer left sooner than their own service time allows, which only
    /// happens with overlapping service.
    pub fn wait(&self) -> u32 {
        self.time_in_bank().saturating_sub(self.customer.service_duration)
    }
}

#[derive(Debug, Default, Clone)]
struct WindowLog {
    entries: Vec<HistoryEntry>,
    served:  u32,
}

/// Service history for every window, in departure order.
#[derive(Debug, Clone)]
pub struct HistoryLedger {
    logs: Vec<WindowLog>,
}

impl HistoryLedger {
    /// One empty log per window.
    pub fn new(window_count: usize) -> Self {
        Self { logs: vec![WindowLog::default(); window_count] }
    }

    pub fn window_count(&self) -> usize {
        self.logs.len()
    }

    fn log(&self, window: WindowId) -> HistoryResult<&WindowLog> {
        let count = self.logs.len();
        self.logs
            .get(window.index())
            .ok_or(HistoryError::UnknownWindow { window, count })
    }

    /// Append a completed service to `window`'s log.
    pub fn record(
        &mut self,
        window:    WindowId,
        customer:  Customer,
        departure: Minute,
    ) -> HistoryResult<&HistoryEntry> {
        let count = self.logs.len();
        let log = self
            .logs
            .get_mut(window.index())
            .ok_or(HistoryError::UnknownWindow { window, count })?;
        log.served += 1;
        log.entries.push(HistoryEntry { customer, window, departure });
        Ok(&log.entries[log.entries.len() - 1])
    }

    /// `window`'s services in departure order.  Non-destructive.
    pub fn report(&self, window: WindowId) -> HistoryResult<&[HistoryEntry]> {
        Ok(&self.log(window)?.entries)
    }

    /// How many customers `window` has served.
    pub fn served(&self, window: WindowId) -> HistoryResult<u32> {
        Ok(self.log(window)?.served)
    }

    /// Customers served across all windows.
    pub fn total_served(&self) -> u32 {
        self.logs.iter().map(|l| l.served).sum()
    }

    /// Every entry, window by window.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.logs.iter().flat_map(|l| l.entries.iter())
    }
}
