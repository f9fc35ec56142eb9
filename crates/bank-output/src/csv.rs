//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `services.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, ServiceRow, SummaryRow};

/// Writes the ledger and the summary to two CSV files.
pub struct CsvWriter {
    services: Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut services = Writer::from_path(dir.join("services.csv"))?;
        services.write_record([
            "customer", "window", "arrival", "service_minutes", "departure", "wait_minutes",
        ])?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record([
            "windows", "customers", "served", "turned_away", "total_service_minutes",
            "closing_time", "last_event",
        ])?;

        Ok(Self {
            services,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_service(&mut self, row: &ServiceRow) -> OutputResult<()> {
        self.services.write_record(&[
            row.customer.to_string(),
            row.window.to_string(),
            row.arrival.to_string(),
            row.service_minutes.to_string(),
            row.departure.to_string(),
            row.wait_minutes.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.windows.to_string(),
            row.customers.to_string(),
            row.served.to_string(),
            row.turned_away.to_string(),
            row.total_service_minutes.to_string(),
            row.closing_time.to_string(),
            row.last_event.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.services.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
