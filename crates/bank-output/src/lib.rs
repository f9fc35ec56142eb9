//! `bank-output` — presentation of simulation results.
//!
//! Two consumers of the core's data live here:
//!
//! | Module      | Output                                                    |
//! |-------------|-----------------------------------------------------------|
//! | [`report`]  | Text summary and per-window service tables for a console  |
//! | [`csv`]     | `services.csv`, `summary.csv` via [`CsvWriter`]           |
//!
//! File backends implement [`OutputWriter`] and are driven by
//! [`LedgerObserver`], which implements `bank_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bank_output::{CsvWriter, LedgerObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = LedgerObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::LedgerObserver;
pub use report::{render_summary, render_window_report, SummaryReport, WindowReport};
pub use row::{ServiceRow, SummaryRow};
pub use writer::OutputWriter;
