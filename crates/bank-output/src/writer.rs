//! The `OutputWriter` trait implemented by file backends.

use crate::{OutputResult, ServiceRow, SummaryRow};

/// Sink for ledger rows.
///
/// Errors are stored by [`LedgerObserver`][crate::LedgerObserver] and
/// retrieved with its `take_error`.
pub trait OutputWriter {
    /// Write one completed service.
    fn write_service(&mut self, row: &ServiceRow) -> OutputResult<()>;

    /// Write the end-of-day summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Calling it again after the first time is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
