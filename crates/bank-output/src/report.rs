//! Console rendering of the end-of-day summary and per-window service tables.
//!
//! Both renderers are `Display` adapters; the `render_*` functions are
//! shorthand for `.to_string()`.

use std::fmt::{self, Write as _};

use bank_core::{BankClock, WindowId};
use bank_history::HistoryEntry;
use bank_sim::Summary;

const HEADERS: [&str; 5] = ["Customer", "Window", "Arrival", "Service", "Departure"];
const CELL: usize = 11;

/// Totals and opening hours, as shown after the day is over.
pub struct SummaryReport<'a> {
    pub summary: &'a Summary,
    pub clock:   BankClock,
}

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.summary;
        writeln!(
            f,
            "Total service time today: {} min    Customers today: {}",
            s.total_service_time(),
            s.customer_count(),
        )?;
        writeln!(
            f,
            "Opening time: {}    Closing time: {}",
            self.clock.opening(),
            self.clock.clock_time(s.closing_time),
        )?;
        if s.counters.turned_away > 0 {
            writeln!(f, "Turned away (all windows full): {}", s.counters.turned_away)?;
        }
        Ok(())
    }
}

/// Boxed table of every customer one window served.
pub struct WindowReport<'a> {
    pub window:  WindowId,
    pub entries: &'a [HistoryEntry],
    pub clock:   BankClock,
}

impl WindowReport<'_> {
    fn rule(f: &mut fmt::Formatter<'_>, left: char, mid: char, right: char) -> fmt::Result {
        f.write_char(left)?;
        for i in 0..HEADERS.len() {
            if i > 0 {
                f.write_char(mid)?;
            }
            for _ in 0..CELL {
                f.write_char('─')?;
            }
        }
        f.write_char(right)?;
        f.write_char('\n')
    }

    fn row(f: &mut fmt::Formatter<'_>, cells: [String; 5]) -> fmt::Result {
        for cell in &cells {
            write!(f, "│ {:<width$}", cell, width = CELL - 1)?;
        }
        f.write_str("│\n")
    }
}

impl fmt::Display for WindowReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "----- Window {} served {} customers -----",
            self.window.number(),
            self.entries.len(),
        )?;
        Self::rule(f, '┌', '┬', '┐')?;
        Self::row(f, HEADERS.map(str::to_owned))?;
        Self::rule(f, '├', '┼', '┤')?;
        for e in self.entries {
            Self::row(f, [
                e.customer.id.0.to_string(),
                e.window.number().to_string(),
                self.clock.clock_time(e.customer.arrival).to_string(),
                e.customer.service_duration.to_string(),
                self.clock.clock_time(e.departure).to_string(),
            ])?;
        }
        Self::rule(f, '└', '┴', '┘')
    }
}

/// Render the end-of-day summary.
pub fn render_summary(summary: &Summary, clock: BankClock) -> String {
    SummaryReport { summary, clock }.to_string()
}

/// Render `window`'s service history as a table.
pub fn render_window_report(window: WindowId, entries: &[HistoryEntry], clock: BankClock) -> String {
    WindowReport { window, entries, clock }.to_string()
}
