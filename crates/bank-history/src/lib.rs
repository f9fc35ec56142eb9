//! `bank-history` — the ledger of completed services.
//!
//! The ledger is written by the driver on every departure and only read
//! afterwards for reporting.  Nothing in the simulation consults it.

pub mod error;
pub mod ledger;


pub use error::{HistoryError, HistoryResult};
pub use ledger::{HistoryEntry, HistoryLedger};
