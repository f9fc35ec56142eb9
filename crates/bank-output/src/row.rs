//! Plain data row types written by output backends.

use bank_history::HistoryEntry;
use bank_sim::Summary;

/// One completed service.  Times are minutes since opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRow {
    pub customer:         u32,
    /// 1-based window number.
    pub window:           u32,
    pub arrival:          u32,
    pub service_minutes:  u32,
    pub departure:        u32,
    pub wait_minutes:     u32,
}

impl From<&HistoryEntry> for ServiceRow {
    fn from(e: &HistoryEntry) -> Self {
        Self {
            customer:        e.customer.id.0,
            window:          e.window.number() as u32,
            arrival:         e.customer.arrival.0,
            service_minutes: e.customer.service_duration,
            departure:       e.departure.0,
            wait_minutes:    e.wait(),
        }
    }
}

/// End-of-day totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRow {
    pub windows:               u32,
    pub customers:             u32,
    pub served:                u32,
    pub turned_away:           u32,
    pub total_service_minutes: u64,
    pub closing_time:          u32,
    pub last_event:            u32,
}

impl From<&Summary> for SummaryRow {
    fn from(s: &Summary) -> Self {
        Self {
            windows:               s.window_count as u32,
            customers:             s.counters.customer_count,
            served:                s.counters.departures,
            turned_away:           s.counters.turned_away,
            total_service_minutes: s.counters.total_service_time,
            closing_time:          s.closing_time.0,
            last_event:            s.last_event.0,
        }
    }
}
