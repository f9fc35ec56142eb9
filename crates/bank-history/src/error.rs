use bank_core::WindowId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("no history for {window} (bank has {count} windows)")]
    UnknownWindow { window: WindowId, count: usize },
}

pub type HistoryResult<T> = Result<T, HistoryError>;
