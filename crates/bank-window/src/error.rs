use bank_core::WindowId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("{window} queue is full ({capacity} customers)")]
    QueueFull { window: WindowId, capacity: usize },

    #[error("{0} queue is empty, nobody can leave")]
    QueueEmpty(WindowId),

    #[error("{window} does not exist (bank has {count} windows)")]
    UnknownWindow { window: WindowId, count: usize },
}

pub type WindowResult<T> = Result<T, WindowError>;
